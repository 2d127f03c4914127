//! Hash-interned string store
//!
//! Provides [`StringInterner`], the bidirectional mapping between strings and their
//! [`StringId`] handles. Identifiers are derived from string content alone, so the same
//! string receives the same identifier in every interner, in every process, on every platform.
//!
//! The reverse direction is deliberately instance-local: an interner can only turn an identifier
//! back into text if it has interned that text itself. Handing an identifier from one vocabulary
//! to another that never saw the string yields [`Error::Lookup`](crate::Error::Lookup).
//!
//! # Thread Safety
//!
//! All operations take `&self`. The forward table is a [`DashMap`] whose entry lock makes the
//! check-then-insert step atomic per string, and the string storage is an append-only
//! [`boxcar::Vec`], so resolved `&str` references stay valid for the lifetime of the interner.
//!
//! # Examples
//!
//! ```rust
//! use wordscope::vocab::{StringId, StringInterner};
//!
//! let strings = StringInterner::new();
//! let coffee = strings.intern("coffee")?;
//! assert_eq!(strings.intern("coffee")?, coffee);
//! assert_eq!(strings.resolve(coffee)?, "coffee");
//!
//! // Same content, same identifier - but a fresh interner can not resolve it
//! let other = StringInterner::new();
//! assert_eq!(StringId::of("coffee"), coffee);
//! assert!(other.resolve(coffee).is_err());
//! # Ok::<(), wordscope::Error>(())
//! ```

use std::{fmt, str::FromStr};

use dashmap::{mapref::entry::Entry, DashMap};
use rayon::prelude::*;
use sha1::{Digest, Sha1};
use tracing::trace;

use crate::{Error, Result};

/// Stable handle of an interned string.
///
/// The value is the first eight bytes (little endian) of the SHA-1 digest of the string's
/// UTF-8 bytes. The empty string is the only string mapped to [`StringId::EMPTY`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StringId(pub u64);

impl StringId {
    /// Identifier of the empty string
    pub const EMPTY: StringId = StringId(0);

    /// Create a new `StringId` from a raw value
    #[must_use]
    pub fn new(value: u64) -> Self {
        StringId(value)
    }

    /// Compute the identifier of `text` without interning it.
    ///
    /// This is a one-way function: the result can only be resolved by an interner that has
    /// seen `text`.
    #[must_use]
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return StringId::EMPTY;
        }

        let digest = Sha1::digest(text.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        StringId(u64::from_le_bytes(head))
    }

    /// Returns the raw value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if this is the identifier of the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for StringId {
    fn from(value: u64) -> Self {
        StringId(value)
    }
}

impl From<StringId> for u64 {
    fn from(id: StringId) -> Self {
        id.0
    }
}

impl fmt::Debug for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringId(0x{:016x})", self.0)
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl FromStr for StringId {
    type Err = Error;

    /// Parses the hexadecimal form produced by `Display`
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim_start_matches("0x");
        u64::from_str_radix(digits, 16)
            .map(StringId)
            .map_err(|_| construction_error!("Invalid identifier - '{}'", s))
    }
}

/// Either side of the interner's mapping, used by the non-failing membership probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKey<'a> {
    /// Look up by content
    Text(&'a str),
    /// Look up by identifier
    Id(StringId),
}

impl<'a> From<&'a str> for StringKey<'a> {
    fn from(text: &'a str) -> Self {
        StringKey::Text(text)
    }
}

impl<'a> From<&'a String> for StringKey<'a> {
    fn from(text: &'a String) -> Self {
        StringKey::Text(text.as_str())
    }
}

impl From<StringId> for StringKey<'_> {
    fn from(id: StringId) -> Self {
        StringKey::Id(id)
    }
}

/// Bidirectional, append-only mapping between strings and [`StringId`]s.
///
/// The store only ever grows: once an identifier has been handed out it resolves to the same
/// string for as long as the interner lives.
///
/// Memory layout:
/// - `strings`: every interned string with its identifier, in insertion order
/// - `forward`: string content -> identifier
/// - `reverse`: identifier -> slot in `strings`
pub struct StringInterner {
    strings: boxcar::Vec<(StringId, Box<str>)>,
    forward: DashMap<Box<str>, StringId>,
    reverse: DashMap<StringId, usize>,
    parallel_threshold: usize,
}

impl StringInterner {
    /// Create a new, empty interner
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new, empty interner with room for `capacity` strings
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StringInterner {
            strings: boxcar::Vec::with_capacity(capacity),
            forward: DashMap::with_capacity(capacity),
            reverse: DashMap::with_capacity(capacity),
            parallel_threshold: usize::MAX,
        }
    }

    /// Batches of at least `threshold` strings are interned on the rayon thread pool
    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Intern `text` and return its identifier.
    ///
    /// Returns the existing identifier if `text` was interned before. Otherwise the identifier
    /// is computed from the content and both directions of the mapping are recorded.
    ///
    /// # Errors
    /// Returns [`Error::HashCollision`] if a different string already owns the computed identifier
    pub fn intern(&self, text: &str) -> Result<StringId> {
        if text.is_empty() {
            return Ok(StringId::EMPTY);
        }

        if let Some(id) = self.forward.get(text) {
            return Ok(*id);
        }

        let id = StringId::of(text);
        match self.forward.entry(Box::from(text)) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                if id.is_empty() {
                    return Err(Error::HashCollision {
                        id,
                        existing: String::new(),
                        incoming: text.to_string(),
                    });
                }

                if let Some(slot) = self.reverse.get(&id) {
                    let existing = self
                        .strings
                        .get(*slot)
                        .map(|(_, s)| s.to_string())
                        .unwrap_or_default();
                    return Err(Error::HashCollision {
                        id,
                        existing,
                        incoming: text.to_string(),
                    });
                }

                let slot = self.strings.push((id, Box::from(text)));
                self.reverse.insert(id, slot);
                entry.insert(id);

                trace!(%id, text, "interned new string");
                Ok(id)
            }
        }
    }

    /// Intern every string of `words`, returning the identifiers in input order.
    ///
    /// Large batches are spread over the rayon thread pool.
    ///
    /// # Errors
    /// Returns the first [`Error::HashCollision`] encountered
    pub fn intern_all<S>(&self, words: &[S]) -> Result<Vec<StringId>>
    where
        S: AsRef<str> + Sync,
    {
        if words.len() >= self.parallel_threshold {
            words
                .par_iter()
                .map(|word| self.intern(word.as_ref()))
                .collect()
        } else {
            words.iter().map(|word| self.intern(word.as_ref())).collect()
        }
    }

    /// Resolve `id` back to the string it was interned from.
    ///
    /// # Errors
    /// Returns [`Error::Lookup`] if `id` was never interned by this instance
    pub fn resolve(&self, id: StringId) -> Result<&str> {
        if id.is_empty() {
            return Ok("");
        }

        let slot = match self.reverse.get(&id) {
            Some(slot) => *slot,
            None => return Err(Error::Lookup(id)),
        };

        match self.strings.get(slot) {
            Some((_, text)) => Ok(&**text),
            None => Err(Error::Lookup(id)),
        }
    }

    /// Return the identifier of `text` if it has been interned, without interning it
    #[must_use]
    pub fn get(&self, text: &str) -> Option<StringId> {
        if text.is_empty() {
            return Some(StringId::EMPTY);
        }

        self.forward.get(text).map(|id| *id)
    }

    /// Return the identifier of `text` if it has been interned, without interning it
    ///
    /// # Errors
    /// Returns [`Error::LookupText`] if this interner has never seen `text`
    pub fn id_of(&self, text: &str) -> Result<StringId> {
        self.get(text)
            .ok_or_else(|| Error::LookupText(text.to_string()))
    }

    /// Non-failing membership probe, accepting either a string or an identifier
    pub fn contains<'a>(&self, key: impl Into<StringKey<'a>>) -> bool {
        match key.into() {
            StringKey::Text(text) => text.is_empty() || self.forward.contains_key(text),
            StringKey::Id(id) => id.is_empty() || self.reverse.contains_key(&id),
        }
    }

    /// Number of interned strings (the always-present empty string is not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.count()
    }

    /// Returns true if nothing has been interned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.count() == 0
    }

    /// Iterate over all interned strings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (StringId, &str)> + '_ {
        self.strings.iter().map(|(_, (id, text))| (*id, &**text))
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn id_of_unknown_text() {
        let strings = StringInterner::new();
        let id = strings.intern("coffee").unwrap();

        assert_eq!(strings.id_of("coffee"), Ok(id));
        assert_eq!(strings.id_of(""), Ok(StringId::EMPTY));
        assert_eq!(
            strings.id_of("tea"),
            Err(Error::LookupText("tea".to_string()))
        );
        assert!(!strings.contains("tea"));
    }

    #[test]
    fn intern_and_resolve() {
        let strings = StringInterner::new();
        let id = strings.intern("coffee").unwrap();

        assert_eq!(strings.intern("coffee").unwrap(), id);
        assert_eq!(strings.resolve(id).unwrap(), "coffee");
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn distinct_strings_distinct_ids() {
        let strings = StringInterner::new();
        let a = strings.intern("tea").unwrap();
        let b = strings.intern("Tea").unwrap();

        assert_ne!(a, b);
        assert_eq!(strings.len(), 2);
    }

    #[test]
    fn ids_agree_across_instances() {
        let first = StringInterner::new();
        let second = StringInterner::new();

        assert_eq!(
            first.intern("kangaroo").unwrap(),
            second.intern("kangaroo").unwrap()
        );
        assert_eq!(StringId::of("kangaroo"), first.get("kangaroo").unwrap());
    }

    #[test]
    fn unseen_id_is_unresolvable() {
        let first = StringInterner::new();
        let second = StringInterner::new();
        let id = first.intern("cat").unwrap();

        assert_eq!(second.resolve(id), Err(Error::Lookup(id)));
        assert!(!second.contains(id));
        assert!(first.contains(id));
    }

    #[test]
    fn empty_string() {
        let strings = StringInterner::new();

        assert_eq!(strings.intern("").unwrap(), StringId::EMPTY);
        assert_eq!(strings.resolve(StringId::EMPTY).unwrap(), "");
        assert!(strings.contains(""));
        assert!(strings.is_empty());
    }

    #[test]
    fn contains_by_text_and_id() {
        let strings = StringInterner::new();
        let id = strings.intern("dog").unwrap();

        assert!(strings.contains("dog"));
        assert!(strings.contains(id));
        assert!(!strings.contains("cat"));
        assert!(!strings.contains(StringId::of("cat")));
        assert_eq!(strings.get("cat"), None);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let strings = StringInterner::new();
        for word in ["c", "a", "b", "a"] {
            strings.intern(word).unwrap();
        }

        let order: Vec<&str> = strings.iter().map(|(_, s)| s).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn intern_all_keeps_order() {
        let strings = StringInterner::new().parallel_threshold(2);
        let words = ["I", "like", "tree", "kangaroos", "I"];
        let ids = strings.intern_all(&words).unwrap();

        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], ids[4]);
        for (id, word) in ids.iter().zip(words) {
            assert_eq!(strings.resolve(*id).unwrap(), word);
        }
        assert_eq!(strings.len(), 4);
    }

    #[test]
    fn concurrent_interning() {
        let strings = Arc::new(StringInterner::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let strings = Arc::clone(&strings);
                thread::spawn(move || {
                    (0..200)
                        .map(|n| strings.intern(&format!("word{}", n)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<StringId>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for ids in &results[1..] {
            assert_eq!(ids, &results[0]);
        }
        assert_eq!(strings.len(), 200);
    }

    #[test]
    fn id_display_round_trip() {
        let id = StringId::of("hello");
        let parsed: StringId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!(format!("{:?}", id).starts_with("StringId(0x"));
    }
}
