//! Element lookup over DOM trees.

use roxmltree::Node;

use super::namespace::QualifiedTag;
use crate::error::{EcoParserError, Result};

/// Get all element children of a node.
///
/// # Arguments
/// * `node` - Parent node
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Check if a node is an element with the given qualified tag.
pub fn has_tag(node: Node<'_, '_>, tag: QualifiedTag<'_>) -> bool {
    tag.matches(node)
}

/// Find the single direct child element matching `tag`.
///
/// # Arguments
/// * `parent` - Node whose direct children are searched
/// * `tag` - Qualified tag to look for
///
/// # Returns
/// * `Ok(node)` if exactly one child matches
/// * `Err(EcoParserError::AmbiguousOrMissingElement)` carrying the observed
///   match count otherwise
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use eco_parser::xml::{find_exactly_one, leg};
///
/// let xml = r#"<Legislation xmlns="http://www.legislation.gov.uk/namespaces/legislation">
///     <Secondary/>
/// </Legislation>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_exactly_one(doc.root_element(), leg("Secondary")).is_ok());
/// assert!(find_exactly_one(doc.root_element(), leg("Primary")).is_err());
/// ```
pub fn find_exactly_one<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: QualifiedTag<'_>,
) -> Result<Node<'a, 'input>> {
    let matches: Vec<_> = element_children(parent)
        .filter(|child| tag.matches(*child))
        .collect();

    match matches.as_slice() {
        [node] => Ok(*node),
        _ => Err(EcoParserError::AmbiguousOrMissingElement {
            tag: tag.to_string(),
            found: matches.len(),
        }),
    }
}

/// Find every element matching `tag` anywhere below `parent`.
///
/// The walk is pre-order over the whole subtree (not only direct children)
/// and does not include `parent` itself. Matches nested inside other matches
/// are returned too, after their ancestor.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use eco_parser::xml::{find_all_recursive, leg};
///
/// let xml = r#"<Body xmlns="http://www.legislation.gov.uk/namespaces/legislation">
///     <P><Text>one</Text></P><P><P><Text>two</Text></P></P>
/// </Body>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let texts = find_all_recursive(doc.root_element(), leg("Text"));
/// assert_eq!(texts.len(), 2);
/// ```
pub fn find_all_recursive<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: QualifiedTag<'_>,
) -> Vec<Node<'a, 'input>> {
    // roxmltree's descendant iterator walks the tree without recursion
    parent
        .descendants()
        .skip(1)
        .filter(|node| tag.matches(*node))
        .collect()
}
