//! Shared vocabulary
//!
//! This module implements the vocabulary every document is built against: a hash-interned
//! [`StringInterner`] and a [`LexemeStore`] caching context-independent word records.
//!
//! # Key Components
//!
//! - [`Vocab`] - The shared context combining both stores
//! - [`StringInterner`] / [`StringId`] - Bidirectional string <-> identifier mapping
//! - [`LexemeStore`] / [`Lexeme`] - Memoized lexical attributes per word type
//! - [`LexFlags`] / [`Attr`] - The lexical attribute set
//! - [`VocabConfig`] - Creation-time configuration
//!
//! # Sharing
//!
//! A [`Vocab`] is always handed out as an `Arc<Vocab>` and shared, never copied: identifiers
//! are only comparable between documents that resolve them through the same vocabulary.
//! Both stores are append-only and safe to use from many threads at once.
//!
//! # Examples
//!
//! ```rust
//! use wordscope::Vocab;
//!
//! let vocab = Vocab::default_shared();
//! let id = vocab.strings().intern("coffee")?;
//! assert_eq!(vocab.strings().resolve(id)?, "coffee");
//!
//! let lexeme = vocab.lexeme("10")?;
//! assert!(lexeme.like_num());
//! # Ok::<(), wordscope::Error>(())
//! ```

mod attrs;
mod config;
mod lexeme;
mod strings;

use std::{fmt, sync::Arc};

pub use attrs::{Attr, LexFlags};
pub(crate) use attrs::{prefix, suffix, word_shape};
pub use config::VocabConfig;
pub use lexeme::{Lexeme, LexemeStore};
pub use strings::{StringId, StringInterner, StringKey};

use crate::Result;

/// The shared vocabulary context
///
/// Owns exactly one [`StringInterner`] and one [`LexemeStore`] and nothing else. Documents keep
/// an `Arc<Vocab>`, so the vocabulary lives as long as the last document referencing it.
pub struct Vocab {
    strings: StringInterner,
    lexemes: LexemeStore,
    config: VocabConfig,
}

impl Vocab {
    /// Create a new, empty vocabulary
    #[must_use]
    pub fn new(config: VocabConfig) -> Arc<Self> {
        let strings = StringInterner::with_capacity(config.initial_capacity)
            .parallel_threshold(config.parallel_threshold);
        let lexemes = LexemeStore::new(&config);

        Arc::new(Vocab {
            strings,
            lexemes,
            config,
        })
    }

    /// Create a new, empty vocabulary with the default configuration
    #[must_use]
    pub fn default_shared() -> Arc<Self> {
        Self::new(VocabConfig::default())
    }

    /// The string store
    #[must_use]
    pub fn strings(&self) -> &StringInterner {
        &self.strings
    }

    /// The lexeme cache
    #[must_use]
    pub fn lexemes(&self) -> &LexemeStore {
        &self.lexemes
    }

    /// The configuration this vocabulary was created with
    #[must_use]
    pub fn config(&self) -> &VocabConfig {
        &self.config
    }

    /// Look up (and cache) the lexeme of a string or identifier
    ///
    /// # Errors
    /// See [`LexemeStore::lookup`]
    pub fn lexeme<'a>(&self, key: impl Into<StringKey<'a>>) -> Result<Lexeme> {
        self.lexemes.lookup(&self.strings, key)
    }
}

impl fmt::Debug for Vocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocab")
            .field("strings", &self.strings.len())
            .field("lexemes", &self.lexemes.len())
            .finish()
    }
}
