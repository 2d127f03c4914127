use thiserror::Error;

use crate::vocab::StringId;

macro_rules! construction_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Construction($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Construction(format!($fmt, $($arg)*))
    };
}

macro_rules! constraint_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Constraint($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Constraint(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is local and synchronous: it is returned from the call that caused it, is
/// never retried internally and never swallowed. Repeating a failed call with the same
/// arguments yields the same error.
///
/// # Error Categories
///
/// ## Vocabulary Errors
/// - [`Error::Lookup`] - An identifier was never interned by this vocabulary
/// - [`Error::LookupText`] - A string was never interned by this vocabulary
/// - [`Error::HashCollision`] - Two distinct strings produced the same identifier
///
/// ## Document Errors
/// - [`Error::Index`] - Token position outside of the document
/// - [`Error::Construction`] - Malformed constructor arguments
/// - [`Error::Constraint`] - Document level invariant violated
/// - [`Error::NotAnnotated`] - Operation requires annotations from an external model
///
/// ## Synchronization
/// - [`Error::LockError`] - A poisoned lock was encountered
///
/// # Examples
///
/// ```rust
/// use wordscope::{Error, Vocab, Doc};
///
/// let vocab = Vocab::default_shared();
/// match Doc::new(&vocab, &["Hello", "world"], &[true]) {
///     Err(Error::Construction(message)) => eprintln!("bad input: {}", message),
///     Err(e) => eprintln!("other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The identifier has never been interned by this string store.
    ///
    /// Identifiers are computed from string content, so another vocabulary may well know
    /// the string behind it. Resolution only ever uses this store's own reverse table.
    #[error("Unknown identifier - {0}")]
    Lookup(StringId),

    /// The string has never been interned by this string store.
    #[error("Unknown string - '{0}'")]
    LookupText(String),

    /// A token index lies outside of `[0, len)`.
    #[error("Index {index} is out of bounds for a document of {len} tokens")]
    Index {
        /// The requested position
        index: usize,
        /// The number of tokens in the document
        len: usize,
    },

    /// Constructor arguments were malformed.
    ///
    /// Raised for mismatched word / space sequences and for inverted span bounds.
    #[error("Invalid construction - {0}")]
    Construction(String),

    /// A document invariant would be violated.
    ///
    /// Raised when entity spans overlap each other or belong to a different document.
    #[error("Constraint violated - {0}")]
    Constraint(String),

    /// Two different strings hashed to the same identifier.
    ///
    /// The mapping between strings and identifiers must stay injective, so the second
    /// string is refused instead of silently aliasing the first one.
    #[error("Hash collision on {id} between '{existing}' and '{incoming}'")]
    HashCollision {
        /// The contested identifier
        id: StringId,
        /// The string already stored under `id`
        existing: String,
        /// The string that was refused
        incoming: String,
    },

    /// The operation needs annotations only an external model can provide.
    #[error("Not computable without external annotation - {0}")]
    NotAnnotated(&'static str),

    /// Failed to lock target
    #[error("Failed to lock target")]
    LockError,
}
