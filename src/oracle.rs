//! Interface to external statistical models
//!
//! Tagging, dependency parsing, entity recognition and word vectors are not computed by this
//! crate. A model that provides them plugs in through [`Oracle`] (and optionally
//! [`VectorOracle`]); the document layer consumes its output but never produces it.
//!
//! Calls are synchronous. An implementation backed by a remote service or a worker pool is
//! responsible for its own scheduling.
//!
//! # Examples
//!
//! ```rust
//! use wordscope::{oracle::{Dependency, Oracle, PredictedEntity}, Doc, Result, Vocab};
//!
//! /// Labels every titlecased token as a person
//! struct Titles;
//!
//! impl Oracle for Titles {
//!     fn predict_tags(&self, doc: &Doc) -> Result<Vec<String>> {
//!         Ok(doc.iter().map(|_| "X".to_string()).collect())
//!     }
//!
//!     fn predict_dependencies(&self, doc: &Doc) -> Result<Vec<Dependency>> {
//!         Ok((0..doc.len()).map(|i| Dependency::new("dep", i)).collect())
//!     }
//!
//!     fn predict_entities(&self, doc: &Doc) -> Result<Vec<PredictedEntity>> {
//!         Ok(doc
//!             .iter()
//!             .filter(|token| token.lexeme().is_title())
//!             .map(|token| PredictedEntity::new(token.i(), token.i() + 1, "PERSON"))
//!             .collect())
//!     }
//! }
//!
//! let vocab = Vocab::default_shared();
//! let doc = Doc::from_whitespace(&vocab, "ask Ada about it")?;
//! doc.apply_entities(&Titles)?;
//! assert_eq!(doc.entities()?[0].text(), "Ada");
//! # Ok::<(), wordscope::Error>(())
//! ```

use crate::{doc::Doc, text::HasText, Result};

/// A predicted syntactic dependency of one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// The dependency relation (`nsubj`, `dobj`, `ROOT`, ...)
    pub label: String,
    /// Index of the head token; a root is its own head
    pub head: usize,
}

impl Dependency {
    /// Create a new dependency
    pub fn new(label: impl Into<String>, head: usize) -> Self {
        Dependency {
            label: label.into(),
            head,
        }
    }
}

/// A predicted entity over token positions `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedEntity {
    /// First covered token
    pub start: usize,
    /// Position after the last covered token
    pub end: usize,
    /// Category label (`PERSON`, `GPE`, ...)
    pub label: String,
}

impl PredictedEntity {
    /// Create a new predicted entity
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        PredictedEntity {
            start,
            end,
            label: label.into(),
        }
    }
}

/// External tagger, parser and entity recognizer
pub trait Oracle {
    /// One part-of-speech tag per token, in document order
    ///
    /// # Errors
    /// Implementation defined
    fn predict_tags(&self, doc: &Doc) -> Result<Vec<String>>;

    /// One dependency per token, in document order
    ///
    /// # Errors
    /// Implementation defined
    fn predict_dependencies(&self, doc: &Doc) -> Result<Vec<Dependency>>;

    /// Entity predictions, in the order they should be assigned
    ///
    /// # Errors
    /// Implementation defined
    fn predict_entities(&self, doc: &Doc) -> Result<Vec<PredictedEntity>>;
}

/// External word vector table
///
/// Vectors are never stored by the vocabulary; similarity is entirely the model's business,
/// conventionally the cosine of averaged token vectors mapped into `[0, 1]`.
pub trait VectorOracle {
    /// Fixed-length vector of a token, span or document
    ///
    /// # Errors
    /// Implementation defined
    fn vector_of(&self, item: &dyn HasText) -> Result<Vec<f32>>;

    /// Similarity score in `[0, 1]`
    ///
    /// # Errors
    /// Implementation defined
    fn similarity(&self, a: &dyn HasText, b: &dyn HasText) -> Result<f32>;
}
