//! Shared textual surface of tokens, spans and documents
//!
//! Documents, spans and tokens are all views over the same interned strings. [`HasText`] is the
//! one capability they share, so code that only needs "the text of something" can accept any of
//! them.
//!
//! ```rust
//! use wordscope::{Doc, HasText, Vocab};
//!
//! fn shout(item: &dyn HasText) -> String {
//!     item.surface().to_uppercase()
//! }
//!
//! let vocab = Vocab::default_shared();
//! let doc = Doc::new(&vocab, &["Hello", "world", "!"], &[true, false, false])?;
//! assert_eq!(shout(&doc), "HELLO WORLD!");
//! assert_eq!(shout(&doc.span(0, 2)?), "HELLO WORLD");
//! assert_eq!(shout(&doc.token_at(1)?), "WORLD");
//! # Ok::<(), wordscope::Error>(())
//! ```

/// Anything with a textual surface reconstructed from interned tokens
pub trait HasText {
    /// The text as printed.
    ///
    /// Tokens and spans drop the whitespace trailing their final token. A document prints
    /// exactly what [`Doc::text`](crate::Doc::text) returns, so it keeps its final whitespace.
    fn surface(&self) -> String;

    /// The text including whitespace trailing the final token
    fn surface_with_ws(&self) -> String;
}

/// Append the text of each `(text, whitespace)` pair to `out`.
///
/// When `trailing` is false the whitespace of the final pair is dropped.
pub(crate) fn join_tokens<'a, I>(out: &mut String, tokens: I, trailing: bool)
where
    I: ExactSizeIterator<Item = (&'a str, bool)>,
{
    let last = tokens.len().saturating_sub(1);
    for (n, (text, whitespace)) in tokens.enumerate() {
        out.push_str(text);
        if whitespace && (trailing || n != last) {
            out.push(' ');
        }
    }
}
