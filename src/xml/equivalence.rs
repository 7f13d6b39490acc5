//! Structural equality between detached XML nodes.

use super::XmlNode;
use crate::equivalence::Equivalence;

/// Treats two XML nodes as equal when they are structurally equivalent.
///
/// Node kinds are compared exactly; names and values must match; attribute
/// sets are compared as unordered maps (declaration order is incidental
/// representation); whitespace-only text children are ignored when comparing
/// element content. Stateless, so one instance serves concurrent assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeEquivalence;

impl Equivalence<XmlNode> for NodeEquivalence {
    fn equal(&self, a: &XmlNode, b: &XmlNode) -> bool {
        structurally_equal(a, b)
    }
}

fn structurally_equal(a: &XmlNode, b: &XmlNode) -> bool {
    match (a, b) {
        (
            XmlNode::Element {
                name: a_name,
                attributes: a_attributes,
                children: a_children,
            },
            XmlNode::Element {
                name: b_name,
                attributes: b_attributes,
                children: b_children,
            },
        ) => {
            // Attributes are name-sorted at construction, so slice equality
            // is unordered-map equality here.
            a_name == b_name
                && a_attributes == b_attributes
                && children_equal(a_children, b_children)
        }
        (
            XmlNode::Attribute {
                name: a_name,
                value: a_value,
            },
            XmlNode::Attribute {
                name: b_name,
                value: b_value,
            },
        ) => a_name == b_name && a_value == b_value,
        (XmlNode::Text(a_text), XmlNode::Text(b_text)) => a_text == b_text,
        (XmlNode::Comment(a_text), XmlNode::Comment(b_text)) => a_text == b_text,
        _ => false,
    }
}

fn children_equal(a: &[XmlNode], b: &[XmlNode]) -> bool {
    let a = significant(a);
    let b = significant(b);
    a.len() == b.len()
        && a.iter()
            .zip(&b)
            .all(|(a_child, b_child)| structurally_equal(a_child, b_child))
}

fn significant(children: &[XmlNode]) -> Vec<&XmlNode> {
    children
        .iter()
        .filter(|child| !matches!(child, XmlNode::Text(text) if text.trim().is_empty()))
        .collect()
}
