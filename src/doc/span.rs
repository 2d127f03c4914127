//! Span view
//!
//! A [`Span`] is a half-open range `[start, end)` over a [`Doc`], optionally carrying a label.
//! Like a token it owns no text; printing a span joins the covered tokens on demand.

use std::fmt;

use crate::{
    doc::{Doc, Token},
    oracle::Oracle,
    text::{self, HasText},
    vocab::StringId,
    Error, Result,
};

/// A contiguous, optionally labeled range of tokens
#[derive(Clone, Copy)]
pub struct Span<'d> {
    doc: &'d Doc,
    start: usize,
    end: usize,
    label: Option<StringId>,
}

impl<'d> Span<'d> {
    /// Create a span over `[start, end)` of `doc`.
    ///
    /// An `end` beyond the document is clamped to the document length. A label is interned
    /// into the document's vocabulary.
    ///
    /// # Errors
    /// Returns [`Error::Construction`] if `start > end`, evaluated after clamping
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordscope::{Doc, Span, Vocab};
    ///
    /// let vocab = Vocab::default_shared();
    /// let doc = Doc::from_whitespace(&vocab, "I like tree kangaroos")?;
    ///
    /// let span = Span::new(&doc, 2, 100, None)?;
    /// assert_eq!(span.end(), 4);
    /// assert_eq!(span.text(), "tree kangaroos");
    /// assert!(Span::new(&doc, 3, 1, None).is_err());
    /// # Ok::<(), wordscope::Error>(())
    /// ```
    pub fn new(doc: &'d Doc, start: usize, end: usize, label: Option<&str>) -> Result<Self> {
        let end = end.min(doc.len());
        if start > end {
            return Err(construction_error!(
                "Span start {} lies after its end {} (document has {} tokens)",
                start,
                end,
                doc.len()
            ));
        }

        let label = match label {
            Some(label) => Some(doc.vocab().strings().intern(label)?),
            None => None,
        };

        Ok(Span {
            doc,
            start,
            end,
            label,
        })
    }

    pub(crate) fn from_parts(
        doc: &'d Doc,
        start: usize,
        end: usize,
        label: Option<StringId>,
    ) -> Self {
        Span {
            doc,
            start,
            end,
            label,
        }
    }

    /// The document this span belongs to
    #[must_use]
    pub fn doc(&self) -> &'d Doc {
        self.doc
    }

    /// First covered position
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position after the last covered token
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of covered tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Identifier of the label, if any
    #[must_use]
    pub fn label(&self) -> Option<StringId> {
        self.label
    }

    /// The label text, if any
    #[must_use]
    pub fn label_text(&self) -> Option<&'d str> {
        self.label
            .and_then(|id| self.doc.vocab().strings().resolve(id).ok())
    }

    /// The covered text; whitespace after the final token is never included
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        text::join_tokens(&mut out, self.doc.pairs(self.start, self.end), false);
        out
    }

    /// The covered text including whitespace after the final token
    #[must_use]
    pub fn text_with_ws(&self) -> String {
        let mut out = String::new();
        text::join_tokens(&mut out, self.doc.pairs(self.start, self.end), true);
        out
    }

    /// Iterate over the covered tokens
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = Token<'d>> + 'd {
        let doc = self.doc;
        (self.start..self.end).map(move |i| Token::new(doc, i))
    }

    /// Returns true if both spans cover at least one common position of the same document
    #[must_use]
    pub fn overlaps(&self, other: &Span<'_>) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.start < other.end && other.start < self.end
    }

    /// The syntactic root of the span.
    ///
    /// Documents store no dependency annotation, so the root can not be computed from the
    /// document alone; use [`Span::root_with`] to supply an external parser.
    ///
    /// # Errors
    /// Always returns [`Error::NotAnnotated`]
    pub fn root(&self) -> Result<Token<'d>> {
        Err(Error::NotAnnotated("span root requires dependency heads"))
    }

    /// The syntactic root of the span, using heads predicted by `oracle`.
    ///
    /// The root is the first covered token whose head is itself or lies outside the span.
    ///
    /// # Errors
    /// Returns [`Error::Constraint`] if the span is empty, if the oracle predicts a head for
    /// the wrong number of tokens, or if no covered token qualifies; oracle failures propagate
    pub fn root_with(&self, oracle: &dyn Oracle) -> Result<Token<'d>> {
        if self.is_empty() {
            return Err(constraint_error!("An empty span has no root"));
        }

        let heads = oracle.predict_dependencies(self.doc)?;
        if heads.len() != self.doc.len() {
            return Err(constraint_error!(
                "Oracle returned {} dependencies for {} tokens",
                heads.len(),
                self.doc.len()
            ));
        }

        for i in self.start..self.end {
            let head = heads[i].head;
            if head == i || head < self.start || head >= self.end {
                return Ok(Token::new(self.doc, i));
            }
        }

        Err(constraint_error!(
            "No token in [{}, {}) is headed outside the span",
            self.start,
            self.end
        ))
    }
}

impl HasText for Span<'_> {
    fn surface(&self) -> String {
        self.text()
    }

    fn surface_with_ws(&self) -> String {
        self.text_with_ws()
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("text", &self.text())
            .field("label", &self.label_text())
            .finish()
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc)
            && self.start == other.start
            && self.end == other.end
            && self.label == other.label
    }
}

impl Eq for Span<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        oracle::{Dependency, PredictedEntity},
        Vocab,
    };

    /// Oracle with a fixed parse of "I like tree kangaroos"
    struct FixedParse;

    impl Oracle for FixedParse {
        fn predict_tags(&self, doc: &Doc) -> Result<Vec<String>> {
            Ok(vec!["X".to_string(); doc.len()])
        }

        fn predict_dependencies(&self, _doc: &Doc) -> Result<Vec<Dependency>> {
            // like <- I, like <- kangaroos <- tree
            Ok(vec![
                Dependency::new("nsubj", 1),
                Dependency::new("ROOT", 1),
                Dependency::new("compound", 3),
                Dependency::new("dobj", 1),
            ])
        }

        fn predict_entities(&self, _doc: &Doc) -> Result<Vec<PredictedEntity>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn text_never_ends_with_space() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "I like tree kangaroos").unwrap();
        let span = doc.span(0, 2).unwrap();

        assert_eq!(span.text(), "I like");
        assert_eq!(span.text_with_ws(), "I like ");
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn end_is_clamped() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "a b c").unwrap();
        let span = Span::new(&doc, 1, 10, None).unwrap();

        assert_eq!(span.end(), 3);
        assert_eq!(span, doc.span(1, 3).unwrap());
        assert_eq!(span.text(), "b c");
    }

    #[test]
    fn inverted_bounds_rejected() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "a b c").unwrap();

        assert!(matches!(Span::new(&doc, 2, 1, None), Err(Error::Construction(_))));
        // start past the clamped end
        assert!(matches!(Span::new(&doc, 5, 9, None), Err(Error::Construction(_))));
    }

    #[test]
    fn empty_span() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "a b").unwrap();
        let span = doc.span(1, 1).unwrap();

        assert!(span.is_empty());
        assert_eq!(span.text(), "");
        assert_eq!(span.tokens().count(), 0);
    }

    #[test]
    fn labels() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "Golden Retriever").unwrap();

        let labeled = doc.span_with_label(0, 2, "DOG").unwrap();
        assert_eq!(labeled.label_text(), Some("DOG"));
        assert_eq!(labeled.label(), Some(StringId::of("DOG")));
        assert!(vocab.strings().contains("DOG"));

        let plain = doc.span(0, 2).unwrap();
        assert_eq!(plain.label_text(), None);
        assert_ne!(plain, labeled);
    }

    #[test]
    fn overlap() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "a b c d").unwrap();

        assert!(doc.span(0, 2).unwrap().overlaps(&doc.span(1, 3).unwrap()));
        assert!(!doc.span(0, 2).unwrap().overlaps(&doc.span(2, 4).unwrap()));
        assert!(!doc.span(1, 1).unwrap().overlaps(&doc.span(1, 1).unwrap()));
    }

    #[test]
    fn root_needs_annotation() {
        let vocab = Vocab::default_shared();
        let doc = Doc::from_whitespace(&vocab, "I like tree kangaroos").unwrap();
        let span = doc.span(2, 4).unwrap();

        assert!(matches!(span.root(), Err(Error::NotAnnotated(_))));
        assert_eq!(span.root_with(&FixedParse).unwrap().text(), "kangaroos");
        assert_eq!(doc.span(0, 4).unwrap().root_with(&FixedParse).unwrap().text(), "like");
        assert!(doc.span(1, 1).unwrap().root_with(&FixedParse).is_err());
    }
}
