//! XPath projection of a node context into a new document-order sequence.

use sxd_document::dom::{Document, Element};
use sxd_document::Package;
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value, XPath};

use super::{NodeSet, XmlNode};
use crate::error::Error;

/// Evaluate `query` against every context node and concatenate the results.
///
/// Result order is the order of the context nodes and, within each, the
/// evaluator's document order.
pub(crate) fn extract(context: &[XmlNode], query: &str) -> Result<NodeSet, Error> {
    if query.is_empty() {
        return Err(Error::EmptyXpath);
    }
    let xpath = compile(query)?;
    let mut nodes = Vec::new();
    for node in context {
        let package = Package::new();
        let document = package.as_document();
        let eval_context = Context::new();
        let planted = plant(&document, node);
        let value = xpath
            .evaluate(&eval_context, planted)
            .map_err(|_| Error::InvalidXpath {
                query: query.to_string(),
            })?;
        match value {
            Value::Nodeset(selected) => {
                for found in selected.document_order() {
                    if let Some(owned) = XmlNode::from_sxd(found) {
                        nodes.push(owned);
                    }
                }
            }
            _ => {
                return Err(Error::NotANodeSet {
                    query: query.to_string(),
                })
            }
        }
    }
    Ok(NodeSet::new(nodes))
}

fn compile(query: &str) -> Result<XPath, Error> {
    Factory::new()
        .build(query)
        .ok()
        .flatten()
        .ok_or_else(|| Error::InvalidXpath {
            query: query.to_string(),
        })
}

/// Rebuild `node` inside a fresh package and return it as the context node.
///
/// Elements become the document element, so absolute expressions resolve
/// within the node's own subtree. Text, comment, and attribute nodes are
/// created detached (an attribute on a synthetic owner element); relative
/// expressions resolve against them as usual.
fn plant<'d>(document: &Document<'d>, node: &'d XmlNode) -> Node<'d> {
    match node {
        XmlNode::Element {
            name,
            attributes,
            children,
        } => {
            let element = build_element(document, name, attributes, children);
            document.root().append_child(element);
            element.into()
        }
        XmlNode::Attribute { name, value } => {
            let owner = document.create_element("owner");
            owner.set_attribute_value(name.as_str(), value).into()
        }
        XmlNode::Text(text) => document.create_text(text).into(),
        XmlNode::Comment(text) => document.create_comment(text).into(),
    }
}

fn build_element<'d>(
    document: &Document<'d>,
    name: &'d str,
    attributes: &'d [(String, String)],
    children: &'d [XmlNode],
) -> Element<'d> {
    let element = document.create_element(name);
    for (attr_name, attr_value) in attributes {
        element.set_attribute_value(attr_name.as_str(), attr_value);
    }
    for child in children {
        match child {
            XmlNode::Element {
                name,
                attributes,
                children,
            } => element.append_child(build_element(document, name, attributes, children)),
            XmlNode::Text(text) => element.append_child(document.create_text(text)),
            XmlNode::Comment(text) => element.append_child(document.create_comment(text)),
            // Attributes never occur as children of a parsed element.
            XmlNode::Attribute { name, value } => {
                element.set_attribute_value(name.as_str(), value);
            }
        }
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> NodeSet {
        NodeSet::document(text).unwrap()
    }

    #[test]
    fn test_extract_element() {
        let extracted = doc("<name>John Doe</name>").extract("/name").unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].kind(), "element");
        assert_eq!(extracted[0].name(), Some("name"));
        assert_eq!(extracted[0].string_value(), "John Doe");
    }

    #[test]
    fn test_extract_element_text() {
        let extracted = doc("<name>John Doe</name>").extract("/name/text()").unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].kind(), "text");
        assert_eq!(extracted[0].string_value(), "John Doe");
    }

    #[test]
    fn test_extract_elements_in_document_order() {
        let extracted =
            doc("<person><first-name>John</first-name><last-name>Doe</last-name></person>")
                .extract("/person/*")
                .unwrap();
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[0].name(), Some("first-name"));
        assert_eq!(extracted[1].name(), Some("last-name"));
    }

    #[test]
    fn test_extract_nested_elements() {
        let extracted =
            doc("<person><first-name>John</first-name><last-name>Doe</last-name></person>")
                .extract("//first-name")
                .unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].name(), Some("first-name"));
    }

    #[test]
    fn test_extract_attributes() {
        let extracted = doc("<person first-name='John' last-name='Doe'/>")
            .extract("/person/@*")
            .unwrap();
        assert_eq!(extracted.len(), 2);
        assert!(extracted.iter().all(|node| node.kind() == "attribute"));
        let mut names: Vec<&str> = extracted.iter().filter_map(XmlNode::name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["first-name", "last-name"]);
    }

    #[test]
    fn test_extract_attribute_and_element_union() {
        let extracted =
            doc("<person vip='true'><first-name>John</first-name><last-name>Doe</last-name></person>")
                .extract("/person/@* | /person/*")
                .unwrap();
        assert_eq!(extracted.len(), 3);
        assert_eq!(extracted[0].kind(), "attribute");
        assert_eq!(extracted[1].kind(), "element");
        assert_eq!(extracted[2].kind(), "element");
    }

    #[test]
    fn test_chain_extract_element_from_element() {
        let first = doc("<document><element attribute='abc'/><otherElement attribute='def'/></document>")
            .extract("/document/element")
            .unwrap();
        let second = first.extract("/element").unwrap();
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_chain_extract_attribute_from_element() {
        let first = doc("<document><element attribute='abc'/><otherElement attribute='def'/></document>")
            .extract("/document/element")
            .unwrap();
        let second = first.extract("@attribute").unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].string_value(), "abc");
    }

    #[test]
    fn test_chain_extract_text_from_element() {
        let first =
            doc("<document><element attribute='abc'>text</element><otherElement/></document>")
                .extract("/document/element")
                .unwrap();
        let second = first.extract("text()").unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].string_value(), "text");
    }

    #[test]
    fn test_chain_extract_comment_from_element() {
        let first =
            doc("<document><element attribute='abc'><!--comment--></element><otherElement/></document>")
                .extract("/document/element")
                .unwrap();
        let second = first.extract("comment()").unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].kind(), "comment");
    }

    #[test]
    fn test_chain_extract_self_from_text() {
        let first = doc("<name>John Doe</name>").extract("/name/text()").unwrap();
        let second = first.extract(".").unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].kind(), "text");
        assert_eq!(second[0].string_value(), "John Doe");
    }

    #[test]
    fn test_extract_rejects_empty_query() {
        assert_eq!(doc("<a/>").extract(""), Err(Error::EmptyXpath));
    }

    #[test]
    fn test_extract_rejects_invalid_query_naming_it() {
        assert_eq!(
            doc("<a/>").extract("invalidXpath!"),
            Err(Error::InvalidXpath {
                query: "invalidXpath!".to_string(),
            })
        );
    }

    #[test]
    fn test_extract_rejects_scalar_result() {
        assert_eq!(
            doc("<a x='1'/>").extract("string(/a/@x)"),
            Err(Error::NotANodeSet {
                query: "string(/a/@x)".to_string(),
            })
        );
    }

    #[test]
    fn test_extraction_is_restartable() {
        let context = doc("<a><b/><b/></a>");
        let first = context.extract("//b").unwrap();
        let second = context.extract("//b").unwrap();
        assert_eq!(first, second);
        assert_eq!(context, doc("<a><b/><b/></a>"));
    }
}
