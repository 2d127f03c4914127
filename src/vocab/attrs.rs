//! Context-independent lexical attributes
//!
//! [`LexFlags`] is the packed bit set stored in every [`Lexeme`](crate::vocab::Lexeme), and
//! [`Attr`] names each bit so attributes can be queried by their conventional upper-case name
//! (`"IS_ALPHA"`, `"LIKE_NUM"`, ...).
//!
//! Every flag is a pure function of a word's characters; none of them depend on the sentence a
//! word appears in.

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter, EnumString};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Boolean lexical attributes of a word type
    pub struct LexFlags : u32 {
        /// Consists of alphabetic characters only
        const IS_ALPHA = 0x0001;
        /// Consists of ASCII characters only
        const IS_ASCII = 0x0002;
        /// Consists of decimal digits only
        const IS_DIGIT = 0x0004;
        /// Has cased characters, all of them lowercase
        const IS_LOWER = 0x0008;
        /// Has cased characters, all of them uppercase
        const IS_UPPER = 0x0010;
        /// Uppercase first letter, lowercase rest
        const IS_TITLE = 0x0020;
        /// Consists of punctuation characters only
        const IS_PUNCT = 0x0040;
        /// Consists of whitespace only
        const IS_SPACE = 0x0080;
        /// A single bracket character
        const IS_BRACKET = 0x0100;
        /// A single quotation mark
        const IS_QUOTE = 0x0200;
        /// A single currency symbol
        const IS_CURRENCY = 0x0400;
        /// Resembles a number: digits, fractions or a number word
        const LIKE_NUM = 0x0800;
        /// Resembles a URL
        const LIKE_URL = 0x1000;
        /// Resembles an email address
        const LIKE_EMAIL = 0x2000;
    }
}

/// Named lexical attribute.
///
/// Each variant corresponds to exactly one bit in [`LexFlags`]. The string form is the
/// upper-case attribute name.
///
/// ```rust
/// use wordscope::vocab::{Attr, LexFlags};
///
/// let attr: Attr = "LIKE_NUM".parse().unwrap();
/// assert_eq!(attr, Attr::LikeNum);
/// assert_eq!(attr.flag(), LexFlags::LIKE_NUM);
/// assert_eq!(attr.to_string(), "LIKE_NUM");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Attr {
    /// See [`LexFlags::IS_ALPHA`]
    IsAlpha,
    /// See [`LexFlags::IS_ASCII`]
    IsAscii,
    /// See [`LexFlags::IS_DIGIT`]
    IsDigit,
    /// See [`LexFlags::IS_LOWER`]
    IsLower,
    /// See [`LexFlags::IS_UPPER`]
    IsUpper,
    /// See [`LexFlags::IS_TITLE`]
    IsTitle,
    /// See [`LexFlags::IS_PUNCT`]
    IsPunct,
    /// See [`LexFlags::IS_SPACE`]
    IsSpace,
    /// See [`LexFlags::IS_BRACKET`]
    IsBracket,
    /// See [`LexFlags::IS_QUOTE`]
    IsQuote,
    /// See [`LexFlags::IS_CURRENCY`]
    IsCurrency,
    /// See [`LexFlags::LIKE_NUM`]
    LikeNum,
    /// See [`LexFlags::LIKE_URL`]
    LikeUrl,
    /// See [`LexFlags::LIKE_EMAIL`]
    LikeEmail,
}

impl Attr {
    /// The bit this attribute occupies in [`LexFlags`]
    #[must_use]
    pub fn flag(self) -> LexFlags {
        match self {
            Attr::IsAlpha => LexFlags::IS_ALPHA,
            Attr::IsAscii => LexFlags::IS_ASCII,
            Attr::IsDigit => LexFlags::IS_DIGIT,
            Attr::IsLower => LexFlags::IS_LOWER,
            Attr::IsUpper => LexFlags::IS_UPPER,
            Attr::IsTitle => LexFlags::IS_TITLE,
            Attr::IsPunct => LexFlags::IS_PUNCT,
            Attr::IsSpace => LexFlags::IS_SPACE,
            Attr::IsBracket => LexFlags::IS_BRACKET,
            Attr::IsQuote => LexFlags::IS_QUOTE,
            Attr::IsCurrency => LexFlags::IS_CURRENCY,
            Attr::LikeNum => LexFlags::LIKE_NUM,
            Attr::LikeUrl => LexFlags::LIKE_URL,
            Attr::LikeEmail => LexFlags::LIKE_EMAIL,
        }
    }
}

const BRACKETS: &[char] = &['(', ')', '[', ']', '{', '}', '<', '>'];
const QUOTES: &[char] = &[
    '\'', '"', '`', '‘', '’', '‚', '‛', '“', '”', '„', '‟', '«', '»', '‹', '›',
];
const CURRENCY: &[char] = &[
    '$', '¢', '£', '¤', '¥', '֏', '؋', '৳', '฿', '₡', '₦', '₩', '₪', '₫', '€', '₭', '₮', '₱',
    '₲', '₴', '₵', '₸', '₹', '₺', '₼', '₽', '₾', '₿',
];
const URL_PREFIXES: &[&str] = &["http://", "https://", "ftp://", "www."];
const URL_SUFFIXES: &[&str] = &[
    ".com", ".org", ".net", ".edu", ".gov", ".io", ".de", ".uk", ".fr", ".info",
];

/// Compute every flag for `text`.
///
/// `number_words` holds lowercase spelled-out numbers that count as [`LexFlags::LIKE_NUM`].
pub(crate) fn compute_flags(text: &str, number_words: &[String]) -> LexFlags {
    let mut flags = LexFlags::empty();
    if text.is_empty() {
        return flags;
    }

    if text.chars().all(char::is_alphabetic) {
        flags |= LexFlags::IS_ALPHA;
    }
    if text.is_ascii() {
        flags |= LexFlags::IS_ASCII;
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        flags |= LexFlags::IS_DIGIT;
    }

    let has_cased = text.chars().any(|c| c.is_lowercase() || c.is_uppercase());
    if has_cased && !text.chars().any(char::is_uppercase) {
        flags |= LexFlags::IS_LOWER;
    }
    if has_cased && !text.chars().any(char::is_lowercase) {
        flags |= LexFlags::IS_UPPER;
    }
    if is_title(text) {
        flags |= LexFlags::IS_TITLE;
    }

    if text.chars().all(is_punct_char) {
        flags |= LexFlags::IS_PUNCT;
    }
    if text.chars().all(char::is_whitespace) {
        flags |= LexFlags::IS_SPACE;
    }

    let mut chars = text.chars();
    if let (Some(single), None) = (chars.next(), chars.next()) {
        if BRACKETS.contains(&single) {
            flags |= LexFlags::IS_BRACKET;
        }
        if QUOTES.contains(&single) {
            flags |= LexFlags::IS_QUOTE;
        }
        if CURRENCY.contains(&single) {
            flags |= LexFlags::IS_CURRENCY;
        }
    }

    if like_num(text, number_words) {
        flags |= LexFlags::LIKE_NUM;
    }
    if like_url(text) {
        flags |= LexFlags::LIKE_URL;
    }
    if like_email(text) {
        flags |= LexFlags::LIKE_EMAIL;
    }

    flags
}

fn is_punct_char(c: char) -> bool {
    c.is_ascii_punctuation() || QUOTES.contains(&c) || matches!(c, '–' | '—' | '…' | '¡' | '¿')
}

/// Every word starts uppercase and continues lowercase (`Hello`, `New-York`)
fn is_title(text: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

fn like_num(text: &str, number_words: &[String]) -> bool {
    let stripped = text.strip_prefix(['+', '-', '~', '±']).unwrap_or(text);

    let digits: String = stripped.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((numerator, denominator)) = stripped.split_once('/') {
        let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if all_digits(numerator) && all_digits(denominator) {
            return true;
        }
    }

    let lower = text.to_lowercase();
    number_words.iter().any(|word| *word == lower)
}

fn like_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if URL_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return lower.len() > 4;
    }

    if lower.contains('@') || lower.starts_with('.') || lower.ends_with('.') {
        return false;
    }

    let host = lower.split('/').next().unwrap_or("");
    host.contains('.') && URL_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
}

fn like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !text.chars().any(char::is_whitespace)
}

/// Word shape: `X` for uppercase, `x` for lowercase, `d` for digits, other characters kept.
/// Runs of the same class longer than four are truncated to four.
pub(crate) fn word_shape(text: &str) -> String {
    let mut shape = String::with_capacity(text.len());
    let mut last = None;
    let mut run = 0usize;

    for c in text.chars() {
        let class = if c.is_uppercase() {
            'X'
        } else if c.is_lowercase() || c.is_alphabetic() {
            'x'
        } else if c.is_ascii_digit() {
            'd'
        } else {
            c
        };

        if Some(class) == last {
            run += 1;
        } else {
            run = 1;
            last = Some(class);
        }

        if run <= 4 {
            shape.push(class);
        }
    }

    shape
}

/// First character of `text`
pub(crate) fn prefix(text: &str) -> &str {
    match text.char_indices().nth(1) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Last three characters of `text`
pub(crate) fn suffix(text: &str) -> &str {
    let count = text.chars().count();
    if count <= 3 {
        return text;
    }

    match text.char_indices().nth(count - 3) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}
