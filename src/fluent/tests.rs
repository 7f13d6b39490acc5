//! Tests for the fluent assertion API.

use super::*;
use crate::engine::Divergence;
use crate::xml::XmlNode;

const PEOPLE: &str = "<people><person>John</person><person>Jane</person><person>John</person></people>";

#[test]
fn test_contains_passes_on_subset() {
    assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .contains(&["<person>Jane</person>"]);
}

#[test]
fn test_contains_counts_duplicates() {
    assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .contains(&["<person>John</person>", "<person>John</person>"]);
}

#[test]
#[should_panic(expected = "missing")]
fn test_contains_fails_on_missing_node() {
    assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .contains(&["<person>Janet</person>"]);
}

#[test]
fn test_contains_only_ignores_order() {
    assert_xml(PEOPLE).extracting_xpath("//person").contains_only(&[
        "<person>Jane</person>",
        "<person>John</person>",
        "<person>John</person>",
    ]);
}

#[test]
#[should_panic(expected = "unexpected")]
fn test_contains_only_fails_on_extra_node() {
    assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .contains_only(&["<person>John</person>", "<person>Jane</person>"]);
}

#[test]
fn test_contains_exactly_passes_in_document_order() {
    assert_xml(PEOPLE).extracting_xpath("//person").contains_exactly(&[
        "<person>John</person>",
        "<person>Jane</person>",
        "<person>John</person>",
    ]);
}

#[test]
#[should_panic(expected = "differ in order at index 0")]
fn test_contains_exactly_fails_on_wrong_order() {
    assert_xml(PEOPLE).extracting_xpath("//person").contains_exactly(&[
        "<person>Jane</person>",
        "<person>John</person>",
        "<person>John</person>",
    ]);
}

#[test]
fn test_evaluate_contains_exactly_reports_set_mismatch() {
    let result = assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .evaluate_contains_exactly(&["<person>John</person>", "<person>Janet</person>"]);
    assert!(!result.passed);
    match result.failure.unwrap() {
        Failure::Containment {
            missing,
            unexpected,
            divergence,
        } => {
            assert_eq!(missing, vec![XmlNode::parse("<person>Janet</person>").unwrap()]);
            assert_eq!(unexpected.len(), 2);
            assert!(divergence.is_none());
        }
        other => panic!("wrong failure kind: {other:?}"),
    }
}

#[test]
fn test_evaluate_contains_exactly_reports_first_divergence() {
    let result = assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .evaluate_contains_exactly(&[
            "<person>John</person>",
            "<person>John</person>",
            "<person>Jane</person>",
        ]);
    assert!(!result.passed);
    match result.failure.unwrap() {
        Failure::Containment { divergence, .. } => {
            assert_eq!(
                divergence,
                Some(Divergence {
                    index: 1,
                    actual: XmlNode::parse("<person>Jane</person>").unwrap(),
                    expected: XmlNode::parse("<person>John</person>").unwrap(),
                })
            );
        }
        other => panic!("wrong failure kind: {other:?}"),
    }
}

#[test]
fn test_structural_equality_ignores_attribute_order() {
    assert_xml("<people><person first-name='John' last-name='Doe'/></people>")
        .extracting_xpath("//person")
        .contains_exactly(&["<person last-name='Doe' first-name='John'/>"]);
}

#[test]
fn test_has_size() {
    assert_xml(PEOPLE).extracting_xpath("//person").has_size(3);
    assert_xml(PEOPLE).extracting_xpath("//nobody").has_size(0);
}

#[test]
#[should_panic(expected = "expected size 2 but was 3")]
fn test_has_size_fails_naming_actual_length() {
    assert_xml(PEOPLE).extracting_xpath("//person").has_size(2);
}

#[test]
fn test_is_empty() {
    assert_xml(PEOPLE).extracting_xpath("//nobody").is_empty();
}

#[test]
#[should_panic(expected = "expected empty node set")]
fn test_is_empty_fails_naming_nodes() {
    assert_xml(PEOPLE).extracting_xpath("//person").is_empty();
}

#[test]
fn test_is_single_node() {
    assert_xml(PEOPLE)
        .extracting_xpath("//person[text()='Jane']")
        .is_single_node();
}

#[test]
#[should_panic(expected = "no nodes")]
fn test_is_single_node_distinguishes_empty() {
    assert_xml(PEOPLE).extracting_xpath("//nobody").is_single_node();
}

#[test]
#[should_panic(expected = "multiple nodes")]
fn test_is_single_node_distinguishes_multiple() {
    assert_xml(PEOPLE).extracting_xpath("//person").is_single_node();
}

#[test]
fn test_is_single_node_failure_kinds() {
    let empty = assert_xml(PEOPLE)
        .extracting_xpath("//nobody")
        .evaluate_is_single_node();
    assert_eq!(empty.failure, Some(Failure::NotSingleNode { count: 0 }));

    let multiple = assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .evaluate_is_single_node();
    assert_eq!(multiple.failure, Some(Failure::NotSingleNode { count: 3 }));
}

#[test]
#[should_panic(expected = "expected XML document but was: <invalidXml>")]
fn test_assert_xml_rejects_malformed_document() {
    assert_xml("invalidXml");
}

#[test]
fn test_assert_xml_accepts_well_formed_document() {
    assert_xml("<validXml/>").has_size(1);
}

#[test]
#[should_panic(expected = "invalid XPath: <invalidXpath!>")]
fn test_extracting_xpath_rejects_invalid_expression() {
    assert_xml("<a/>").extracting_xpath("invalidXpath!");
}

#[test]
#[should_panic(expected = "XPath expression cannot be empty")]
fn test_extracting_xpath_rejects_empty_expression() {
    assert_xml("<a/>").extracting_xpath("");
}

#[test]
fn test_assertion_is_immutable() {
    let assertion = assert_xml(PEOPLE).extracting_xpath("//person");
    let johns = assertion.extracting_xpath("//person[text()='John']");
    let janes = assertion.extracting_xpath("//person[text()='Jane']");
    johns.has_size(2);
    janes.has_size(1);
    assertion.has_size(3);
}

#[test]
fn test_evaluate_non_panicking() {
    let result = assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .evaluate_has_size(3);
    assert!(result.passed);
    assert!(result.failure.is_none());
    assert!(result.reason().is_none());

    let result = assert_xml(PEOPLE)
        .extracting_xpath("//person")
        .evaluate_has_size(1);
    assert!(!result.passed);
    assert!(result.reason().is_some());
}
