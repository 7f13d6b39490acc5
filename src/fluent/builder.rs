//! Fluent assertion builder for XML node sets.
//!
//! This module provides the core builder types for asserting on node sets:
//! - `assert_xml()` - Entry point that parses a document and starts a chain
//! - `XmlNodeSetAssert` - Holds a node set and creates specific assertions
//! - `AssertionResult` / `Failure` - Inspectable assertion outcomes

use std::fmt;

use crate::engine::{self, Divergence, MatchResult};
use crate::error::Error;
use crate::xml::{NodeEquivalence, NodeSet, XmlNode};

/// Result of evaluating an assertion.
#[derive(Debug, Clone)]
pub struct AssertionResult {
    /// Whether the assertion passed.
    pub passed: bool,
    /// Description of what was asserted.
    pub description: String,
    /// Why the assertion failed, if it did.
    pub failure: Option<Failure>,
}

impl AssertionResult {
    pub(crate) fn pass(description: impl Into<String>) -> Self {
        Self {
            passed: true,
            description: description.into(),
            failure: None,
        }
    }

    pub(crate) fn fail(description: impl Into<String>, failure: Failure) -> Self {
        Self {
            passed: false,
            description: description.into(),
            failure: Some(failure),
        }
    }

    /// Rendered failure reason, if the assertion failed.
    pub fn reason(&self) -> Option<String> {
        self.failure.as_ref().map(Failure::to_string)
    }
}

/// Why an assertion did not pass.
///
/// Callers branch on the variant; the `Display` rendering is a diagnostic,
/// not a compatibility surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The engine's reconciliation left unmatched elements, or the multisets
    /// agree but the arrangement differs (`divergence`).
    Containment {
        missing: Vec<XmlNode>,
        unexpected: Vec<XmlNode>,
        divergence: Option<Divergence<XmlNode>>,
    },
    /// The node set has the wrong number of nodes.
    Size {
        actual: Vec<XmlNode>,
        expected: usize,
    },
    /// The node set should have been empty.
    NotEmpty { actual: Vec<XmlNode> },
    /// The node set should have held exactly one node; `count` distinguishes
    /// "no nodes" from "multiple nodes".
    NotSingleNode { count: usize },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Containment {
                missing,
                unexpected,
                divergence,
            } => {
                if let Some(divergence) = divergence {
                    return write!(
                        f,
                        "nodes match but differ in order at index {}: expected <{}> but was <{}>",
                        divergence.index, divergence.expected, divergence.actual
                    );
                }
                let mut parts = Vec::new();
                if !missing.is_empty() {
                    parts.push(format!("missing: {}", render_nodes(missing)));
                }
                if !unexpected.is_empty() {
                    parts.push(format!("unexpected: {}", render_nodes(unexpected)));
                }
                write!(f, "{}", parts.join("; "))
            }
            Failure::Size { actual, expected } => write!(
                f,
                "expected size {} but was {} in {}",
                expected,
                actual.len(),
                render_nodes(actual)
            ),
            Failure::NotEmpty { actual } => {
                write!(f, "expected empty node set but was {}", render_nodes(actual))
            }
            Failure::NotSingleNode { count: 0 } => {
                write!(f, "expected single XML node but was no nodes")
            }
            Failure::NotSingleNode { count } => {
                write!(f, "expected single XML node but was multiple nodes ({count})")
            }
        }
    }
}

fn render_nodes(nodes: &[XmlNode]) -> String {
    let rendered: Vec<String> = nodes.iter().map(|node| format!("<{node}>")).collect();
    format!("[{}]", rendered.join(", "))
}

/// Parse a document and create an expectation on its node set.
///
/// This is the entry point for the fluent assertion API.
///
/// # Example
///
/// ```rust
/// use xassert::assert_xml;
///
/// assert_xml("<person><name>John</name></person>")
///     .extracting_xpath("/person/name")
///     .is_single_node();
/// ```
///
/// # Panics
///
/// Panics if `text` is not a well-formed XML document. Use
/// [`XmlNodeSetAssert::from_xml`] for a non-panicking variant.
pub fn assert_xml(text: &str) -> XmlNodeSetAssert {
    match XmlNodeSetAssert::from_xml(text) {
        Ok(assertion) => assertion,
        Err(error) => panic!("assertion failed: {error}"),
    }
}

/// Holds a node set and creates specific assertions.
///
/// Terminal methods like `contains()` evaluate immediately and panic on
/// failure; each has an `evaluate_*` twin returning an [`AssertionResult`].
/// The assertion itself is immutable: `extracting_xpath` returns a new
/// independent assertion, so several projections can be taken from the same
/// starting point.
#[derive(Debug, Clone)]
pub struct XmlNodeSetAssert {
    nodes: NodeSet,
}

impl XmlNodeSetAssert {
    /// Create an assertion over an existing node set.
    pub fn new(nodes: NodeSet) -> Self {
        Self { nodes }
    }

    /// Parse a document into a single-node assertion without panicking.
    pub fn from_xml(text: &str) -> Result<Self, Error> {
        Ok(Self {
            nodes: NodeSet::document(text)?,
        })
    }

    /// The underlying node set.
    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Project the node set through an XPath expression and return a new
    /// assertion over the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xassert::assert_xml;
    ///
    /// assert_xml("<a><b/><b/></a>")
    ///     .extracting_xpath("//b")
    ///     .has_size(2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the expression is empty, syntactically invalid, or does not
    /// evaluate to a node-set.
    pub fn extracting_xpath(&self, query: &str) -> XmlNodeSetAssert {
        match self.try_extracting_xpath(query) {
            Ok(next) => next,
            Err(error) => panic!("assertion failed: {error}"),
        }
    }

    /// Non-panicking variant of [`extracting_xpath`](Self::extracting_xpath).
    pub fn try_extracting_xpath(&self, query: &str) -> Result<XmlNodeSetAssert, Error> {
        Ok(Self {
            nodes: self.nodes.extract(query)?,
        })
    }

    // =========================================================================
    // Containment assertions
    // =========================================================================

    /// Assert the node set contains a structural match for every expected
    /// fragment, duplicates counted.
    ///
    /// # Panics
    ///
    /// Panics if a fragment is not well-formed XML, or if any expected node
    /// is missing.
    pub fn contains(&self, expected: &[&str]) -> &Self {
        self.check(self.evaluate_contains(expected))
    }

    /// Assert the node set and the expected fragments reconcile symmetrically
    /// as multisets, order ignored.
    ///
    /// # Panics
    ///
    /// Panics if a fragment is not well-formed XML, or on missing/unexpected
    /// nodes.
    pub fn contains_only(&self, expected: &[&str]) -> &Self {
        self.check(self.evaluate_contains_only(expected))
    }

    /// Assert the node set holds exactly the expected fragments, in order.
    ///
    /// A multiset mismatch is reported with missing/unexpected nodes; equal
    /// multisets in a different arrangement are reported with the first
    /// diverging index.
    ///
    /// # Panics
    ///
    /// Panics if a fragment is not well-formed XML, or on any mismatch.
    pub fn contains_exactly(&self, expected: &[&str]) -> &Self {
        self.check(self.evaluate_contains_exactly(expected))
    }

    /// Non-panicking variant of [`contains`](Self::contains).
    pub fn evaluate_contains(&self, expected: &[&str]) -> AssertionResult {
        let expected_nodes = expected_nodes(expected);
        let result = engine::contains_all(self.nodes.nodes(), &expected_nodes, &NodeEquivalence);
        containment_outcome(
            format!("node set contains {}", render_nodes(&expected_nodes)),
            result,
        )
    }

    /// Non-panicking variant of [`contains_only`](Self::contains_only).
    pub fn evaluate_contains_only(&self, expected: &[&str]) -> AssertionResult {
        let expected_nodes = expected_nodes(expected);
        let result = engine::contains_only(self.nodes.nodes(), &expected_nodes, &NodeEquivalence);
        containment_outcome(
            format!("node set contains only {}", render_nodes(&expected_nodes)),
            result,
        )
    }

    /// Non-panicking variant of [`contains_exactly`](Self::contains_exactly).
    pub fn evaluate_contains_exactly(&self, expected: &[&str]) -> AssertionResult {
        let expected_nodes = expected_nodes(expected);
        let result = engine::contains_exactly(self.nodes.nodes(), &expected_nodes, &NodeEquivalence);
        containment_outcome(
            format!("node set contains exactly {}", render_nodes(&expected_nodes)),
            result,
        )
    }

    // =========================================================================
    // Cardinality assertions
    // =========================================================================

    /// Assert the node set holds exactly `expected` nodes.
    ///
    /// # Panics
    ///
    /// Panics if the size differs.
    pub fn has_size(&self, expected: usize) -> &Self {
        self.check(self.evaluate_has_size(expected))
    }

    /// Assert the node set holds no nodes.
    ///
    /// # Panics
    ///
    /// Panics if any node is present.
    pub fn is_empty(&self) -> &Self {
        self.check(self.evaluate_is_empty())
    }

    /// Assert the node set holds exactly one node.
    ///
    /// The failure distinguishes "no nodes" from "multiple nodes".
    ///
    /// # Panics
    ///
    /// Panics unless exactly one node is present.
    pub fn is_single_node(&self) -> &Self {
        self.check(self.evaluate_is_single_node())
    }

    /// Non-panicking variant of [`has_size`](Self::has_size).
    pub fn evaluate_has_size(&self, expected: usize) -> AssertionResult {
        let description = format!("node set has size {expected}");
        if self.nodes.len() == expected {
            AssertionResult::pass(description)
        } else {
            AssertionResult::fail(
                description,
                Failure::Size {
                    actual: self.nodes.nodes().to_vec(),
                    expected,
                },
            )
        }
    }

    /// Non-panicking variant of [`is_empty`](Self::is_empty).
    pub fn evaluate_is_empty(&self) -> AssertionResult {
        let description = "node set is empty".to_string();
        if self.nodes.is_empty() {
            AssertionResult::pass(description)
        } else {
            AssertionResult::fail(
                description,
                Failure::NotEmpty {
                    actual: self.nodes.nodes().to_vec(),
                },
            )
        }
    }

    /// Non-panicking variant of [`is_single_node`](Self::is_single_node).
    pub fn evaluate_is_single_node(&self) -> AssertionResult {
        let description = "node set is a single node".to_string();
        if self.nodes.len() == 1 {
            AssertionResult::pass(description)
        } else {
            AssertionResult::fail(
                description,
                Failure::NotSingleNode {
                    count: self.nodes.len(),
                },
            )
        }
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn check(&self, result: AssertionResult) -> &Self {
        if !result.passed {
            let reason = result.reason().unwrap_or_default();
            panic!(
                "assertion failed: expected {}\n\n  reason: {}\n{}",
                result.description,
                reason,
                self.format_nodes()
            );
        }
        self
    }

    fn format_nodes(&self) -> String {
        if self.nodes.is_empty() {
            return "  nodes: (none)\n".to_string();
        }
        let mut output = format!("  nodes ({}):\n", self.nodes.len());
        for (index, node) in self.nodes.iter().enumerate() {
            output.push_str(&format!("    {}. {}\n", index + 1, node));
        }
        output
    }
}

fn containment_outcome(description: String, result: MatchResult<XmlNode>) -> AssertionResult {
    if result.is_match() {
        AssertionResult::pass(description)
    } else {
        AssertionResult::fail(
            description,
            Failure::Containment {
                missing: result.missing,
                unexpected: result.unexpected,
                divergence: result.divergence,
            },
        )
    }
}

/// Expected fragments are a precondition of every containment assertion:
/// each must itself be well-formed XML.
fn expected_nodes(expected: &[&str]) -> Vec<XmlNode> {
    expected
        .iter()
        .map(|text| match XmlNode::parse(text) {
            Ok(node) => node,
            Err(error) => panic!("assertion failed: {error}"),
        })
        .collect()
}
