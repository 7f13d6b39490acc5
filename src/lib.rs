//! # xassert
//!
//! Composable containment checks over XML node sets, with pluggable equality.
//!
//! The crate has two layers. The matching engine decides whether an actual
//! sequence *contains*, *contains only*, or *contains exactly* an expected
//! sequence under an injectable [`Equivalence`] relation, reconciling
//! duplicates occurrence-for-occurrence and reporting order divergence
//! separately from set mismatch. The XML layer projects a document into node
//! sequences via XPath and feeds them to the same engine under structural
//! node equality, so scalar sequences and tree fragments are checked by the
//! same algorithms.
//!
//! ## Quick Start
//!
//! ```rust
//! use xassert::assert_xml;
//!
//! assert_xml("<people><person>John</person><person>Jane</person></people>")
//!     .extracting_xpath("//person")
//!     .has_size(2)
//!     .contains_exactly(&["<person>John</person>", "<person>Jane</person>"]);
//! ```
//!
//! ## Chained extraction
//!
//! Extraction results are independent node sets: querying one behaves as if
//! its nodes formed a standalone document, and never touches the source.
//!
//! ```rust
//! use xassert::assert_xml;
//!
//! assert_xml("<continents><continent name='Europe'><area>10180000</area></continent></continents>")
//!     .extracting_xpath("//continent[@name='Europe']")
//!     .extracting_xpath("//area")
//!     .is_single_node();
//! ```
//!
//! ## Custom equality
//!
//! The engine is usable directly over any element type and strategy:
//!
//! ```rust
//! use xassert::{contains_only, DefaultEquivalence};
//!
//! let result = contains_only(&[1, 1, 2], &[2, 1, 1], &DefaultEquivalence);
//! assert!(result.is_match());
//! ```

pub mod engine;
pub mod equivalence;
pub mod error;
pub mod fluent;
pub mod xml;

// Matching engine
pub use engine::{contains_all, contains_exactly, contains_only, Divergence, MatchResult};

// Equality strategies
pub use equivalence::{DefaultEquivalence, Equivalence};

// Errors
pub use error::Error;

// Fluent facade
pub use fluent::{assert_xml, AssertionResult, Failure, XmlNodeSetAssert};

// XML node model
pub use xml::{NodeEquivalence, NodeSet, XmlNode};
