//! Documents, tokens and spans
//!
//! A [`Doc`] is an ordered sequence of tokens built against a shared [`Vocab`]. Every word is
//! interned (and its lexeme cached) when the document is created, so the document itself only
//! stores fixed-width identifiers and whitespace flags.
//!
//! [`Token`] and [`Span`] are borrowing views into a document: they own no text and reconstruct
//! it on demand from the vocabulary.
//!
//! # Entities
//!
//! A document carries a list of labeled, pairwise non-overlapping entity spans. The list is
//! replaced wholesale by [`Doc::set_entities`]; a batch that violates an invariant is rejected
//! as a whole and leaves the previous list untouched.
//!
//! # Examples
//!
//! ```rust
//! use wordscope::{Doc, Span, Vocab};
//!
//! let vocab = Vocab::default_shared();
//! let doc = Doc::from_whitespace(&vocab, "I like tree kangaroos")?;
//! assert_eq!(doc.token_count(), 4);
//!
//! let animal = Span::new(&doc, 2, 4, Some("ANIMAL"))?;
//! doc.set_entities(&[animal])?;
//!
//! let entities = doc.entities()?;
//! assert_eq!(entities[0].text(), "tree kangaroos");
//! assert_eq!(entities[0].label_text(), Some("ANIMAL"));
//! # Ok::<(), wordscope::Error>(())
//! ```

mod span;
mod token;

use std::{fmt, sync::Arc, sync::RwLock};

pub use span::Span;
pub use token::Token;

use tracing::debug;

use crate::{
    oracle::Oracle,
    text::{self, HasText},
    vocab::{Lexeme, StringId, Vocab},
    Error, Result,
};

/// Per-position storage of a document
#[derive(Debug, Clone, Copy)]
struct TokenData {
    lex: Lexeme,
    whitespace: bool,
}

/// Stored form of an entity span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntityData {
    start: usize,
    end: usize,
    label: Option<StringId>,
}

/// An ordered token sequence referencing a shared [`Vocab`]
///
/// Token text is fixed at creation. The only mutable state is the entity list, which sits
/// behind a lock so it can be replaced through a shared reference while spans borrow the
/// document.
pub struct Doc {
    vocab: Arc<Vocab>,
    tokens: Vec<TokenData>,
    entities: RwLock<Vec<EntityData>>,
}

impl Doc {
    /// Create a document from parallel word and whitespace sequences.
    ///
    /// `spaces[i]` states whether `words[i]` is followed by a space; the flag of the final word
    /// is taken as given, like every other.
    ///
    /// # Errors
    /// Returns [`Error::Construction`] if the two sequences differ in length, or propagates
    /// interning failures
    pub fn new<S>(vocab: &Arc<Vocab>, words: &[S], spaces: &[bool]) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        if words.len() != spaces.len() {
            return Err(construction_error!(
                "{} words but {} space flags",
                words.len(),
                spaces.len()
            ));
        }

        let ids = vocab.strings().intern_all(words)?;
        let tokens = ids
            .into_iter()
            .zip(spaces)
            .map(|(id, whitespace)| {
                Ok(TokenData {
                    lex: vocab.lexeme(id)?,
                    whitespace: *whitespace,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Doc {
            vocab: Arc::clone(vocab),
            tokens,
            entities: RwLock::new(Vec::new()),
        })
    }

    /// Create a document by splitting `text` on single spaces.
    ///
    /// A word followed by a space gets its whitespace flag set. Each additional consecutive
    /// space becomes a `" "` token of its own, so [`Doc::text`] reproduces `text` exactly.
    ///
    /// # Errors
    /// Propagates interning failures
    pub fn from_whitespace(vocab: &Arc<Vocab>, text: &str) -> Result<Self> {
        let pieces: Vec<&str> = text.split(' ').collect();
        let last = pieces.len() - 1;

        let mut words = Vec::with_capacity(pieces.len());
        let mut spaces = Vec::with_capacity(pieces.len());
        for (n, piece) in pieces.into_iter().enumerate() {
            if !piece.is_empty() {
                words.push(piece);
                spaces.push(n < last);
            } else if n < last {
                words.push(" ");
                spaces.push(false);
            }
        }

        Doc::new(vocab, &words, &spaces)
    }

    /// The vocabulary this document was built against
    #[must_use]
    pub fn vocab(&self) -> &Arc<Vocab> {
        &self.vocab
    }

    /// Number of tokens
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the document has no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Full surface text: every token followed by a space when its flag is set
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        text::join_tokens(&mut out, self.pairs(0, self.tokens.len()), true);
        out
    }

    /// The token at `index`
    ///
    /// # Errors
    /// Returns [`Error::Index`] if `index` is not below [`Doc::token_count`]
    pub fn token_at(&self, index: usize) -> Result<Token<'_>> {
        if index >= self.tokens.len() {
            return Err(Error::Index {
                index,
                len: self.tokens.len(),
            });
        }

        Ok(Token::new(self, index))
    }

    /// Iterate over all tokens in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Token<'_>> + '_ {
        (0..self.tokens.len()).map(move |i| Token::new(self, i))
    }

    /// An unlabeled span over `[start, end)`; see [`Span::new`]
    ///
    /// # Errors
    /// See [`Span::new`]
    pub fn span(&self, start: usize, end: usize) -> Result<Span<'_>> {
        Span::new(self, start, end, None)
    }

    /// A labeled span over `[start, end)`; see [`Span::new`]
    ///
    /// # Errors
    /// See [`Span::new`]
    pub fn span_with_label(&self, start: usize, end: usize, label: &str) -> Result<Span<'_>> {
        Span::new(self, start, end, Some(label))
    }

    /// Replace the entity list with `spans`.
    ///
    /// The batch is validated before anything changes: every span must belong to this document
    /// and no two spans may share a token position. On failure the previous list is kept.
    ///
    /// # Errors
    /// Returns [`Error::Constraint`] for a foreign or overlapping span, [`Error::LockError`] if
    /// the entity lock is poisoned
    pub fn set_entities(&self, spans: &[Span<'_>]) -> Result<()> {
        for (n, span) in spans.iter().enumerate() {
            if !std::ptr::eq(span.doc(), self) {
                debug!(entity = n, "rejected entity from a different document");
                return Err(constraint_error!(
                    "Entity {} [{}, {}) belongs to a different document",
                    n,
                    span.start(),
                    span.end()
                ));
            }
        }

        for (a, first) in spans.iter().enumerate() {
            for (b, second) in spans.iter().enumerate().skip(a + 1) {
                if first.overlaps(second) {
                    debug!(first = a, second = b, "rejected overlapping entities");
                    return Err(constraint_error!(
                        "Entity {} [{}, {}) overlaps entity {} [{}, {})",
                        a,
                        first.start(),
                        first.end(),
                        b,
                        second.start(),
                        second.end()
                    ));
                }
            }
        }

        let replacement: Vec<EntityData> = spans
            .iter()
            .map(|span| EntityData {
                start: span.start(),
                end: span.end(),
                label: span.label(),
            })
            .collect();

        let mut entities = self.entities.write().map_err(|_| Error::LockError)?;
        *entities = replacement;

        debug!(count = entities.len(), "entities assigned");
        Ok(())
    }

    /// The entity spans, in the order they were last assigned
    ///
    /// # Errors
    /// Returns [`Error::LockError`] if the entity lock is poisoned
    pub fn entities(&self) -> Result<Vec<Span<'_>>> {
        let entities = self.entities.read().map_err(|_| Error::LockError)?;
        Ok(entities
            .iter()
            .map(|entity| Span::from_parts(self, entity.start, entity.end, entity.label))
            .collect())
    }

    /// Assign the entities predicted by `oracle`.
    ///
    /// Predictions go through [`Span::new`] and [`Doc::set_entities`], so they are clamped and
    /// validated exactly like hand-made spans.
    ///
    /// # Errors
    /// Propagates oracle failures and any error from span creation or assignment
    pub fn apply_entities(&self, oracle: &dyn Oracle) -> Result<()> {
        let predicted = oracle.predict_entities(self)?;
        let spans = predicted
            .iter()
            .map(|entity| Span::new(self, entity.start, entity.end, Some(&entity.label)))
            .collect::<Result<Vec<_>>>()?;

        self.set_entities(&spans)
    }

    pub(crate) fn lexeme_at(&self, index: usize) -> Lexeme {
        self.tokens[index].lex
    }

    pub(crate) fn whitespace_at(&self, index: usize) -> bool {
        self.tokens[index].whitespace
    }

    /// Resolve a token's text; orths are interned into `vocab` on construction
    pub(crate) fn text_at(&self, index: usize) -> &str {
        self.vocab
            .strings()
            .resolve(self.tokens[index].lex.orth)
            .unwrap_or_default()
    }

    /// `(text, whitespace)` of every token in `[start, end)`
    pub(crate) fn pairs(
        &self,
        start: usize,
        end: usize,
    ) -> impl ExactSizeIterator<Item = (&str, bool)> + '_ {
        (start..end).map(move |i| (self.text_at(i), self.tokens[i].whitespace))
    }
}

impl HasText for Doc {
    fn surface(&self) -> String {
        self.text()
    }

    fn surface_with_ws(&self) -> String {
        self.text()
    }
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doc")
            .field("text", &self.text())
            .field("tokens", &self.tokens.len())
            .finish()
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
