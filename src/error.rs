//! Errors raised before any containment check runs.
//!
//! Only preconditions and delegated parsing surface as [`Error`]. A failed
//! assertion is not an error: the engine reports it as a
//! [`MatchResult`](crate::engine::MatchResult) and the fluent facade as a
//! [`Failure`](crate::fluent::Failure).

use thiserror::Error;

/// Precondition, query-syntax, and parse failures.
///
/// Each kind is distinct so callers can branch on it; the display strings are
/// diagnostics, not a compatibility surface. All kinds are terminal for the
/// call that raised them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The XPath expression was empty.
    #[error("XPath expression cannot be empty")]
    EmptyXpath,

    /// The XPath expression could not be parsed by the evaluator.
    #[error("invalid XPath: <{query}>")]
    InvalidXpath {
        /// The offending expression text.
        query: String,
    },

    /// The XPath expression is valid but evaluated to a scalar (string,
    /// number, or boolean) instead of a node-set.
    #[error("XPath <{query}> did not evaluate to a node-set")]
    NotANodeSet {
        /// The offending expression text.
        query: String,
    },

    /// The input text is not a well-formed XML document.
    ///
    /// The underlying parser's diagnostics are deliberately not carried; the
    /// offending text is.
    #[error("expected XML document but was: <{text}>")]
    NotWellFormed {
        /// The text that failed to parse.
        text: String,
    },
}
