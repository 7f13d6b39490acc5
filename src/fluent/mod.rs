//! Fluent assertion API for XML node sets.
//!
//! This module provides a chainable API over the matching engine. Assertions
//! evaluate immediately (panic on failure) when using terminal methods like
//! `contains_exactly()`, or can be evaluated non-destructively using the
//! `evaluate_*` methods.
//!
//! # Example
//!
//! ```rust
//! use xassert::assert_xml;
//!
//! // Immediate evaluation (panics on failure)
//! assert_xml("<person><name>John</name></person>")
//!     .extracting_xpath("/person/name")
//!     .contains_exactly(&["<name>John</name>"]);
//!
//! // Non-panicking evaluation
//! let result = assert_xml("<person/>")
//!     .extracting_xpath("//name")
//!     .evaluate_is_single_node();
//! assert!(!result.passed);
//! ```

mod builder;

pub use builder::{assert_xml, AssertionResult, Failure, XmlNodeSetAssert};

#[cfg(test)]
mod tests;
