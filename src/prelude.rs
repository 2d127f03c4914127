//! # wordscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the wordscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all wordscope operations
pub use crate::Error;

/// The result type used throughout wordscope
pub use crate::Result;

// ================================================================================================
// Vocabulary
// ================================================================================================

/// The shared vocabulary and its configuration
pub use crate::vocab::{Vocab, VocabConfig};

/// String interning
pub use crate::vocab::{StringId, StringInterner};

/// Lexical attributes
pub use crate::vocab::{Attr, LexFlags, Lexeme, LexemeStore};

// ================================================================================================
// Documents
// ================================================================================================

/// Document, token and span views
pub use crate::doc::{Doc, Span, Token};

/// The shared text capability
pub use crate::text::HasText;

// ================================================================================================
// External Models
// ================================================================================================

/// Oracle interfaces for tagging, parsing, entity recognition and vectors
pub use crate::oracle::{Dependency, Oracle, PredictedEntity, VectorOracle};
