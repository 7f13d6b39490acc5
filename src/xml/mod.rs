//! Owned XML node model and document-order node sequences.
//!
//! Parsing and XPath evaluation are delegated to `sxd-document` and
//! `sxd-xpath`; everything this module hands back is an owned, detached
//! [`XmlNode`] deep-copied out of the evaluator's tree. That keeps node
//! sequences free of lifetimes and guarantees that a projected result carries
//! no hidden dependency on the document it was drawn from.

mod equivalence;
mod extract;

pub use equivalence::NodeEquivalence;

use std::fmt;
use std::ops::Index;

use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::QName;
use sxd_xpath::nodeset::Node;

use crate::error::Error;

/// A single XML node, detached from any document.
///
/// Only the four kinds the containment checks compare are represented;
/// processing instructions and namespace nodes are dropped during
/// conversion. Element attributes are stored sorted by name, so attribute
/// declaration order is never significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// An element with its attributes and child nodes in document order.
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<XmlNode>,
    },
    /// An attribute node extracted on its own (e.g. via `@*`).
    Attribute { name: String, value: String },
    /// A text node.
    Text(String),
    /// A comment node.
    Comment(String),
}

impl XmlNode {
    /// Parse an XML document into its root element.
    ///
    /// Any parser diagnostic collapses into [`Error::NotWellFormed`] carrying
    /// the original text.
    pub fn parse(text: &str) -> Result<XmlNode, Error> {
        let not_well_formed = || Error::NotWellFormed {
            text: text.to_string(),
        };
        let package = sxd_document::parser::parse(text).map_err(|_| not_well_formed())?;
        let document = package.as_document();
        document
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(element) => Some(XmlNode::from_element(element)),
                _ => None,
            })
            .ok_or_else(not_well_formed)
    }

    /// The node kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            XmlNode::Element { .. } => "element",
            XmlNode::Attribute { .. } => "attribute",
            XmlNode::Text(_) => "text",
            XmlNode::Comment(_) => "comment",
        }
    }

    /// The element or attribute name; `None` for text and comment nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            XmlNode::Element { name, .. } | XmlNode::Attribute { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The XPath string-value of the node: concatenated descendant text for
    /// elements, the value or text itself otherwise.
    pub fn string_value(&self) -> String {
        match self {
            XmlNode::Element { children, .. } => children
                .iter()
                .filter(|child| matches!(child, XmlNode::Element { .. } | XmlNode::Text(_)))
                .map(XmlNode::string_value)
                .collect(),
            XmlNode::Attribute { value, .. } => value.clone(),
            XmlNode::Text(text) | XmlNode::Comment(text) => text.clone(),
        }
    }

    fn from_element(element: Element<'_>) -> XmlNode {
        let mut attributes: Vec<(String, String)> = element
            .attributes()
            .iter()
            .map(|attribute| (local_name(attribute.name()), attribute.value().to_string()))
            .collect();
        attributes.sort();
        let children = element
            .children()
            .into_iter()
            .filter_map(|child| match child {
                ChildOfElement::Element(element) => Some(XmlNode::from_element(element)),
                ChildOfElement::Text(text) => Some(XmlNode::Text(text.text().to_string())),
                ChildOfElement::Comment(comment) => {
                    Some(XmlNode::Comment(comment.text().to_string()))
                }
                ChildOfElement::ProcessingInstruction(_) => None,
            })
            .collect();
        XmlNode::Element {
            name: local_name(element.name()),
            attributes,
            children,
        }
    }

    /// Deep-copy an evaluator node into an owned value. Returns `None` for
    /// node kinds the checks do not compare.
    pub(crate) fn from_sxd(node: Node<'_>) -> Option<XmlNode> {
        match node {
            Node::Root(root) => root.children().into_iter().find_map(|child| match child {
                ChildOfRoot::Element(element) => Some(XmlNode::from_element(element)),
                _ => None,
            }),
            Node::Element(element) => Some(XmlNode::from_element(element)),
            Node::Attribute(attribute) => Some(XmlNode::Attribute {
                name: local_name(attribute.name()),
                value: attribute.value().to_string(),
            }),
            Node::Text(text) => Some(XmlNode::Text(text.text().to_string())),
            Node::Comment(comment) => Some(XmlNode::Comment(comment.text().to_string())),
            Node::ProcessingInstruction(_) | Node::Namespace(_) => None,
        }
    }
}

fn local_name(name: QName<'_>) -> String {
    name.local_part().to_string()
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlNode::Element {
                name,
                attributes,
                children,
            } => {
                write!(f, "<{name}")?;
                for (attr_name, attr_value) in attributes {
                    write!(f, " {attr_name}=\"{attr_value}\"")?;
                }
                if children.is_empty() {
                    write!(f, "/>")
                } else {
                    write!(f, ">")?;
                    for child in children {
                        write!(f, "{child}")?;
                    }
                    write!(f, "</{name}>")
                }
            }
            XmlNode::Attribute { name, value } => write!(f, "@{name}=\"{value}\""),
            XmlNode::Text(text) => write!(f, "{text}"),
            XmlNode::Comment(text) => write!(f, "<!--{text}-->"),
        }
    }
}

/// An immutable sequence of nodes in document order.
///
/// A `NodeSet` is the query context as well as the query result: extracting
/// from a set produced by a previous extraction behaves exactly like
/// extracting from a freshly constructed set over the same nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeSet {
    nodes: Vec<XmlNode>,
}

impl NodeSet {
    /// Wrap nodes (assumed already in document order) as a set.
    pub fn new(nodes: Vec<XmlNode>) -> NodeSet {
        NodeSet { nodes }
    }

    /// Parse a document and wrap its root element as a single-node set.
    pub fn document(text: &str) -> Result<NodeSet, Error> {
        Ok(NodeSet::new(vec![XmlNode::parse(text)?]))
    }

    /// Evaluate an XPath expression against this set and return the selected
    /// nodes, in document order, as a new independent set.
    ///
    /// Each node in this set acts as the context node of a minimal standalone
    /// document, so relative expressions resolve against the node itself and
    /// absolute expressions see only that node's subtree. Neither this set
    /// nor its nodes are affected; two extractions from the same set are
    /// fully independent.
    pub fn extract(&self, query: &str) -> Result<NodeSet, Error> {
        extract::extract(&self.nodes, query)
    }

    /// Number of nodes in the set.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the set holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes in document order.
    pub fn nodes(&self) -> &[XmlNode] {
        &self.nodes
    }

    /// Iterate the nodes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, XmlNode> {
        self.nodes.iter()
    }
}

impl Index<usize> for NodeSet {
    type Output = XmlNode;

    fn index(&self, index: usize) -> &XmlNode {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a XmlNode;
    type IntoIter = std::slice::Iter<'a, XmlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
