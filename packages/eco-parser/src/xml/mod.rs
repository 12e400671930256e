//! XML utilities: namespace-qualified tags, element lookup and text
//! normalization over `roxmltree` trees, plus a nesting check on raw text.

mod depth;
mod namespace;
mod text;
mod utils;

pub use depth::check_nesting_depth;
pub use namespace::{leg, xhtml, Namespace, QualifiedTag};
pub use text::{normalize_text, normalize_whitespace};
pub use utils::{element_children, find_all_recursive, find_exactly_one, has_tag};
