// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # wordscope
//!
//! A shared, hash-interned vocabulary for NLP pipelines, with cheap document, token and span
//! views on top of it.
//!
//! ## Features
//!
//! - **🔑 Stable identifiers** - Every string maps to a 64-bit identifier derived from its content
//! - **🔁 Instance-local resolution** - Identifiers resolve only in vocabularies that saw the string
//! - **📚 Lexeme cache** - Context-independent word attributes computed once per word type
//! - **🧵 Thread safe** - Vocabularies are append-only and shared through `Arc`
//! - **🪟 Zero-copy views** - Tokens and spans own no text and rebuild it on demand
//! - **🔌 Model agnostic** - Taggers, parsers and vectors plug in through the [`oracle`] traits
//!
//! ## Quick Start
//!
//! ```rust
//! use wordscope::prelude::*;
//!
//! let vocab = Vocab::default_shared();
//! let doc = Doc::new(&vocab, &["Hello", "world", "!"], &[true, false, false])?;
//! assert_eq!(doc.text(), "Hello world!");
//!
//! let hello = doc.token_at(0)?;
//! assert!(hello.is_alpha());
//! assert_eq!(vocab.strings().resolve(hello.orth())?, "Hello");
//!
//! let greeting = doc.span_with_label(0, 2, "GREETING")?;
//! doc.set_entities(&[greeting])?;
//! assert_eq!(doc.entities()?[0].text(), "Hello world");
//! # Ok::<(), wordscope::Error>(())
//! ```
//!
//! ## Identifiers across vocabularies
//!
//! ```rust
//! use wordscope::{Error, Vocab};
//!
//! let first = Vocab::default_shared();
//! let second = Vocab::default_shared();
//!
//! let id = first.strings().intern("coffee")?;
//! assert_eq!(second.strings().intern("coffee")?, id);
//!
//! let unseen = first.strings().intern("tea")?;
//! assert_eq!(second.strings().resolve(unseen), Err(Error::Lookup(unseen)));
//! # Ok::<(), wordscope::Error>(())
//! ```

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use wordscope::prelude::*;
///
/// let vocab = Vocab::new(VocabConfig::minimal());
/// let doc = Doc::from_whitespace(&vocab, "I like tree kangaroos")?;
/// assert_eq!(doc.span(0, 2)?.surface(), "I like");
/// # Ok::<(), wordscope::Error>(())
/// ```
pub mod prelude;

/// Shared vocabulary: string interning and the lexeme cache
///
/// # Key Types
///
/// - [`vocab::Vocab`] - The shared context every document is built against
/// - [`vocab::StringInterner`] - Bidirectional string <-> [`vocab::StringId`] mapping
/// - [`vocab::LexemeStore`] - Memoized [`vocab::Lexeme`] records
/// - [`vocab::VocabConfig`] - Creation-time configuration
pub mod vocab;

/// Documents and their token and span views
///
/// # Key Types
///
/// - [`doc::Doc`] - Token sequence plus entity list
/// - [`doc::Token`] - A single position
/// - [`doc::Span`] - A half-open, optionally labeled range
pub mod doc;

/// Interface to external statistical models (tagger, parser, entity recognizer, vectors)
pub mod oracle;

/// The textual surface shared by documents, spans and tokens
pub mod text;

/// `wordscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `wordscope` Error type
///
/// The error type for all fallible operations in this crate.
pub use error::Error;

/// The shared vocabulary context; see [`vocab::Vocab`]
pub use vocab::{Vocab, VocabConfig};

/// Document views; see [`doc`]
pub use doc::{Doc, Span, Token};

/// The shared text capability; see [`text::HasText`]
pub use text::HasText;
