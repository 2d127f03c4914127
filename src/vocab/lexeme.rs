//! Context-independent lexeme cache
//!
//! A [`Lexeme`] is the record of a word *type*: its identifier, its length and its
//! [`LexFlags`]. It never carries anything that depends on context (no tag, no dependency,
//! no entity) so every occurrence of a word anywhere in any document shares one record.
//!
//! [`LexemeStore`] computes a record the first time a word is looked up and serves the cached
//! copy afterwards. Records are never mutated once created.
//!
//! Creating a record never touches the interner beyond the word itself. String features such as
//! the lowercase form or the word shape are derived from the text on demand (see
//! [`Token::lower`](crate::doc::Token::lower)), so they never become resolvable identifiers.

use dashmap::DashMap;
use tracing::trace;

use crate::{
    vocab::{
        attrs::{self, Attr, LexFlags},
        StringId, StringInterner, StringKey, VocabConfig,
    },
    Result,
};

/// Lexical record of a single word type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme {
    /// Identifier of the verbatim text
    pub orth: StringId,
    /// Boolean lexical attributes
    pub flags: LexFlags,
    /// Length of the text in characters
    pub length: usize,
}

impl Lexeme {
    /// Check a named attribute
    #[must_use]
    pub fn check(&self, attr: Attr) -> bool {
        self.flags.contains(attr.flag())
    }

    /// Consists of alphabetic characters only
    #[must_use]
    pub fn is_alpha(&self) -> bool {
        self.flags.contains(LexFlags::IS_ALPHA)
    }

    /// Consists of ASCII digits only
    #[must_use]
    pub fn is_digit(&self) -> bool {
        self.flags.contains(LexFlags::IS_DIGIT)
    }

    /// Consists of punctuation only
    #[must_use]
    pub fn is_punct(&self) -> bool {
        self.flags.contains(LexFlags::IS_PUNCT)
    }

    /// Consists of whitespace only
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.flags.contains(LexFlags::IS_SPACE)
    }

    /// All cased characters are lowercase
    #[must_use]
    pub fn is_lower(&self) -> bool {
        self.flags.contains(LexFlags::IS_LOWER)
    }

    /// All cased characters are uppercase
    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.flags.contains(LexFlags::IS_UPPER)
    }

    /// Titlecased
    #[must_use]
    pub fn is_title(&self) -> bool {
        self.flags.contains(LexFlags::IS_TITLE)
    }

    /// Resembles a number
    #[must_use]
    pub fn like_num(&self) -> bool {
        self.flags.contains(LexFlags::LIKE_NUM)
    }

    /// Resembles a URL
    #[must_use]
    pub fn like_url(&self) -> bool {
        self.flags.contains(LexFlags::LIKE_URL)
    }

    /// Resembles an email address
    #[must_use]
    pub fn like_email(&self) -> bool {
        self.flags.contains(LexFlags::LIKE_EMAIL)
    }
}

/// Memoizing cache of [`Lexeme`]s keyed by [`StringId`]
///
/// The store does not own any strings: every identifier it holds belongs to the
/// [`StringInterner`] passed in on lookup, which must be the same interner on every call.
#[derive(Debug)]
pub struct LexemeStore {
    entries: DashMap<StringId, Lexeme>,
    number_words: Vec<String>,
}

impl LexemeStore {
    /// Create a new, empty store
    #[must_use]
    pub fn new(config: &VocabConfig) -> Self {
        LexemeStore {
            entries: DashMap::with_capacity(config.initial_capacity),
            number_words: config.number_words.clone(),
        }
    }

    /// Return the lexeme for a string or identifier, creating and caching it on first access.
    ///
    /// Text keys are interned first; nothing else is added to `strings`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Lookup`] for an identifier `strings` can not resolve, or a
    /// [`crate::Error::HashCollision`] propagated from interning
    pub fn lookup<'a>(
        &self,
        strings: &StringInterner,
        key: impl Into<StringKey<'a>>,
    ) -> Result<Lexeme> {
        let id = match key.into() {
            StringKey::Text(text) => strings.intern(text)?,
            StringKey::Id(id) => id,
        };

        if let Some(lexeme) = self.entries.get(&id) {
            return Ok(*lexeme);
        }

        let text = strings.resolve(id)?;
        let lexeme = self.create(id, text);

        let cached = *self.entries.entry(id).or_insert(lexeme);
        Ok(cached)
    }

    /// Return the lexeme for `id` if it has been created already
    #[must_use]
    pub fn get(&self, id: StringId) -> Option<Lexeme> {
        self.entries.get(&id).map(|lexeme| *lexeme)
    }

    /// Returns true if a lexeme for `id` has been created
    #[must_use]
    pub fn contains(&self, id: StringId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of cached lexemes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no lexeme has been created yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn create(&self, orth: StringId, text: &str) -> Lexeme {
        let lexeme = Lexeme {
            orth,
            flags: attrs::compute_flags(text, &self.number_words),
            length: text.chars().count(),
        };

        trace!(%orth, text, flags = ?lexeme.flags, "created lexeme");
        lexeme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn setup() -> (StringInterner, LexemeStore) {
        (StringInterner::new(), LexemeStore::new(&VocabConfig::default()))
    }

    #[test]
    fn number_like() {
        let (strings, lexemes) = setup();

        assert!(lexemes.lookup(&strings, "10").unwrap().like_num());
        assert!(!lexemes.lookup(&strings, "the").unwrap().like_num());
        assert!(lexemes.lookup(&strings, "ten").unwrap().like_num());
    }

    #[test]
    fn lookup_is_cached() {
        let (strings, lexemes) = setup();

        let first = lexemes.lookup(&strings, "coffee").unwrap();
        let second = lexemes.lookup(&strings, first.orth).unwrap();

        assert_eq!(first, second);
        assert_eq!(lexemes.len(), 1);
        assert!(lexemes.contains(first.orth));
    }

    #[test]
    fn record_contents() {
        let (strings, lexemes) = setup();
        let lexeme = lexemes.lookup(&strings, "Kangaroos").unwrap();

        assert_eq!(lexeme.orth, StringId::of("Kangaroos"));
        assert_eq!(lexeme.length, 9);
        assert!(lexeme.is_title());
        assert!(lexeme.check(Attr::IsAlpha));
    }

    #[test]
    fn creation_interns_only_the_word() {
        let (strings, lexemes) = setup();
        lexemes.lookup(&strings, "Hello").unwrap();

        assert_eq!(strings.len(), 1);
        assert!(strings.contains("Hello"));
        assert!(!strings.contains("hello"));
        assert!(!strings.contains("llo"));
        assert!(!strings.contains("Xxxxx"));
        assert!(!strings.contains("H"));
        assert_eq!(
            strings.resolve(StringId::of("llo")),
            Err(Error::Lookup(StringId::of("llo")))
        );
    }

    #[test]
    fn unknown_id() {
        let (strings, lexemes) = setup();
        let id = StringId::of("never seen");

        assert_eq!(lexemes.lookup(&strings, id), Err(Error::Lookup(id)));
        assert!(lexemes.is_empty());
        assert_eq!(lexemes.get(id), None);
    }

    #[test]
    fn same_text_same_record() {
        let strings = StringInterner::new();
        let first = LexemeStore::new(&VocabConfig::default());
        let second = LexemeStore::new(&VocabConfig::default());

        assert_eq!(
            first.lookup(&strings, "Hello").unwrap(),
            second.lookup(&strings, "Hello").unwrap()
        );
    }
}
