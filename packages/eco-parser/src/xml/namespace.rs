//! Namespace table and namespace-qualified tag names.

use std::fmt;

use roxmltree::Node;

use crate::config::{LEGISLATION_NAMESPACE, XHTML_NAMESPACE};

/// Namespaces used by legislation.gov.uk documents.
///
/// `Legislation` is the default namespace of every document; `Xhtml` is used
/// by tables nested inside `Tabular` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    #[default]
    Legislation,
    Xhtml,
}

impl Namespace {
    /// Every known namespace, in prefix-table order.
    pub const ALL: [Namespace; 2] = [Namespace::Legislation, Namespace::Xhtml];

    /// Full namespace URI.
    #[must_use]
    pub fn uri(&self) -> &'static str {
        match self {
            Self::Legislation => LEGISLATION_NAMESPACE,
            Self::Xhtml => XHTML_NAMESPACE,
        }
    }

    /// Short prefix as used in legislation.gov.uk documents.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Legislation => "leg",
            Self::Xhtml => "xhtml",
        }
    }

    /// Look up a namespace by its short prefix.
    ///
    /// # Examples
    /// ```
    /// use eco_parser::xml::Namespace;
    ///
    /// assert_eq!(Namespace::from_prefix("xhtml"), Some(Namespace::Xhtml));
    /// assert_eq!(Namespace::from_prefix("dc"), None);
    /// ```
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.prefix() == prefix)
    }
}

/// A tag name combined with its namespace, used as the matching key against
/// parsed nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualifiedTag<'a> {
    pub namespace: Namespace,
    pub name: &'a str,
}

impl<'a> QualifiedTag<'a> {
    #[must_use]
    pub const fn new(namespace: Namespace, name: &'a str) -> Self {
        Self { namespace, name }
    }

    /// Resolve an optional textual prefix and a local name.
    ///
    /// `None` selects the default legislation namespace. Returns `None` for a
    /// prefix that is not in the namespace table.
    ///
    /// # Examples
    /// ```
    /// use eco_parser::xml::{QualifiedTag, Namespace};
    ///
    /// let tag = QualifiedTag::resolve(None, "Secondary").unwrap();
    /// assert_eq!(tag.namespace, Namespace::Legislation);
    ///
    /// let tag = QualifiedTag::resolve(Some("xhtml"), "table").unwrap();
    /// assert_eq!(tag.namespace.uri(), "http://www.w3.org/1999/xhtml");
    /// ```
    #[must_use]
    pub fn resolve(prefix: Option<&str>, name: &'a str) -> Option<Self> {
        let namespace = match prefix {
            Some(prefix) => Namespace::from_prefix(prefix)?,
            None => Namespace::default(),
        };
        Some(Self::new(namespace, name))
    }

    /// Check whether `node` is an element with this namespace and local name.
    #[must_use]
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        let tag = node.tag_name();
        tag.name() == self.name && tag.namespace() == Some(self.namespace.uri())
    }
}

impl fmt::Display for QualifiedTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace.prefix(), self.name)
    }
}

/// Tag in the default legislation namespace.
#[must_use]
pub const fn leg(name: &str) -> QualifiedTag<'_> {
    QualifiedTag::new(Namespace::Legislation, name)
}

/// Tag in the XHTML namespace.
#[must_use]
pub const fn xhtml(name: &str) -> QualifiedTag<'_> {
    QualifiedTag::new(Namespace::Xhtml, name)
}
