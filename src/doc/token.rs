//! Token view
//!
//! A [`Token`] is a position in a [`Doc`]. It stores nothing but the document reference and its
//! index; text and lexical attributes come from the shared vocabulary.

use std::fmt;

use crate::{
    doc::Doc,
    text::HasText,
    vocab::{self, Attr, Lexeme, StringId},
    Result,
};

/// A single position in a document
#[derive(Clone, Copy)]
pub struct Token<'d> {
    doc: &'d Doc,
    i: usize,
}

impl<'d> Token<'d> {
    pub(crate) fn new(doc: &'d Doc, i: usize) -> Self {
        Token { doc, i }
    }

    /// Position of this token within its document
    #[must_use]
    pub fn i(&self) -> usize {
        self.i
    }

    /// The document this token belongs to
    #[must_use]
    pub fn doc(&self) -> &'d Doc {
        self.doc
    }

    /// Identifier of the verbatim text
    #[must_use]
    pub fn orth(&self) -> StringId {
        self.doc.lexeme_at(self.i).orth
    }

    /// The verbatim text
    #[must_use]
    pub fn text(&self) -> &'d str {
        self.doc.text_at(self.i)
    }

    /// Whether the token is followed by a space
    #[must_use]
    pub fn whitespace(&self) -> bool {
        self.doc.whitespace_at(self.i)
    }

    /// The trailing whitespace as a string (`" "` or `""`)
    #[must_use]
    pub fn whitespace_str(&self) -> &'static str {
        if self.whitespace() {
            " "
        } else {
            ""
        }
    }

    /// The text followed by its trailing whitespace
    #[must_use]
    pub fn text_with_ws(&self) -> String {
        let mut out = String::with_capacity(self.text().len() + 1);
        out.push_str(self.text());
        out.push_str(self.whitespace_str());
        out
    }

    /// The context-independent record of this token's word type
    #[must_use]
    pub fn lexeme(&self) -> Lexeme {
        self.doc.lexeme_at(self.i)
    }

    /// Check a named lexical attribute
    #[must_use]
    pub fn check(&self, attr: Attr) -> bool {
        self.lexeme().check(attr)
    }

    /// See [`Lexeme::is_alpha`]
    #[must_use]
    pub fn is_alpha(&self) -> bool {
        self.lexeme().is_alpha()
    }

    /// See [`Lexeme::is_digit`]
    #[must_use]
    pub fn is_digit(&self) -> bool {
        self.lexeme().is_digit()
    }

    /// See [`Lexeme::is_punct`]
    #[must_use]
    pub fn is_punct(&self) -> bool {
        self.lexeme().is_punct()
    }

    /// See [`Lexeme::like_num`]
    #[must_use]
    pub fn like_num(&self) -> bool {
        self.lexeme().like_num()
    }

    /// The lowercase form
    #[must_use]
    pub fn lower(&self) -> String {
        self.text().to_lowercase()
    }

    /// The word shape (`Xxxxx`, `dd`, ...); runs longer than four collapse
    #[must_use]
    pub fn shape(&self) -> String {
        vocab::word_shape(self.text())
    }

    /// The first character
    #[must_use]
    pub fn prefix(&self) -> &'d str {
        vocab::prefix(self.text())
    }

    /// The last three characters
    #[must_use]
    pub fn suffix(&self) -> &'d str {
        vocab::suffix(self.text())
    }

    /// The token `offset` positions away from this one
    ///
    /// # Errors
    /// Returns [`crate::Error::Index`] if the target lies past the end of the document, or
    /// [`crate::Error::Construction`] if it lies before its start
    pub fn nbor(&self, offset: isize) -> Result<Token<'d>> {
        match self.i.checked_add_signed(offset) {
            Some(index) => self.doc.token_at(index),
            None => Err(construction_error!(
                "Offset {} from token {} lies before the start of the document",
                offset,
                self.i
            )),
        }
    }
}

impl HasText for Token<'_> {
    fn surface(&self) -> String {
        self.text().to_string()
    }

    fn surface_with_ws(&self) -> String {
        self.text_with_ws()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("i", &self.i)
            .field("text", &self.text())
            .field("whitespace", &self.whitespace())
            .finish()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.i == other.i
    }
}

impl Eq for Token<'_> {}

#[cfg(test)]
mod tests {
    use crate::{vocab::Attr, Doc, Error, Vocab};

    #[test]
    fn token_attributes() {
        let vocab = Vocab::default_shared();
        let doc = Doc::new(
            &vocab,
            &["It", "costs", "$", "5", "."],
            &[true, true, false, false, false],
        )
        .unwrap();

        let dollar = doc.token_at(2).unwrap();
        assert!(dollar.check(Attr::IsCurrency));
        assert!(!dollar.whitespace());

        let five = doc.token_at(3).unwrap();
        assert!(five.like_num());
        assert!(five.is_digit());
        assert_eq!(five.i(), 3);

        let dot = doc.token_at(4).unwrap();
        assert!(dot.is_punct());
        assert!(!dot.is_alpha());

        let it = doc.token_at(0).unwrap();
        assert_eq!(it.lower(), "it");
        assert_eq!(it.shape(), "Xx");
        assert_eq!(it.prefix(), "I");
        assert_eq!(it.suffix(), "It");

        let costs = doc.token_at(1).unwrap();
        assert_eq!(costs.suffix(), "sts");
        assert_eq!(costs.shape(), "xxxx");
        assert_eq!(it.text_with_ws(), "It ");
        assert_eq!(it.whitespace_str(), " ");
    }

    #[test]
    fn neighbours() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "one two three").unwrap();
        let two = doc.token_at(1).unwrap();

        assert_eq!(two.nbor(1).unwrap().text(), "three");
        assert_eq!(two.nbor(-1).unwrap().text(), "one");
        assert_eq!(two.nbor(2).unwrap_err(), Error::Index { index: 3, len: 3 });
        assert!(matches!(two.nbor(-2), Err(Error::Construction(_))));
    }

    #[test]
    fn derived_features_are_not_interned() {
        let vocab = Vocab::default_shared();
        let doc = Doc::new(&vocab, &["Hello"], &[false]).unwrap();
        let hello = doc.token_at(0).unwrap();

        assert_eq!(hello.lower(), "hello");
        assert_eq!(hello.shape(), "Xxxxx");
        assert_eq!(hello.prefix(), "H");
        assert_eq!(hello.suffix(), "llo");

        assert_eq!(vocab.strings().len(), 1);
        assert!(!vocab.strings().contains("hello"));
        assert!(!vocab.strings().contains("llo"));
    }

    #[test]
    fn equality_is_positional() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "the cat the").unwrap();

        assert_eq!(doc.token_at(0).unwrap(), doc.token_at(0).unwrap());
        assert_ne!(doc.token_at(0).unwrap(), doc.token_at(2).unwrap());
        assert_eq!(
            doc.token_at(0).unwrap().orth(),
            doc.token_at(2).unwrap().orth()
        );
    }
}
