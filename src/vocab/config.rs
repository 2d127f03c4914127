//! Vocabulary configuration
//!
//! This module provides the knobs a [`Vocab`](crate::Vocab) is created with: pre-allocation,
//! the spelled-out number words recognised by [`LexFlags::LIKE_NUM`](crate::vocab::LexFlags),
//! and when batch interning moves onto the rayon thread pool.

/// English cardinal number words
const CARDINALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "quadrillion", "gajillion",
    "bazillion",
];

/// English ordinal number words
const ORDINALS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
    "seventeenth", "eighteenth", "nineteenth", "twentieth", "thirtieth", "fortieth",
    "fiftieth", "sixtieth", "seventieth", "eightieth", "ninetieth", "hundredth", "thousandth",
    "millionth", "billionth", "trillionth", "quadrillionth", "gajillionth", "bazillionth",
];

/// Configuration for a [`Vocab`](crate::Vocab)
///
/// # Examples
///
/// ```rust
/// use wordscope::{Vocab, VocabConfig};
///
/// let config = VocabConfig::default().with_number_words(["dozen", "score"]);
/// let vocab = Vocab::new(config);
/// assert!(vocab.lexeme("dozen")?.like_num());
/// assert!(!vocab.lexeme("ten")?.like_num());
/// # Ok::<(), wordscope::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    /// Number of strings (and lexemes) to pre-allocate room for
    pub initial_capacity: usize,

    /// Lowercase spelled-out numbers that count as number-like
    pub number_words: Vec<String>,

    /// Batches of at least this many strings are interned in parallel
    pub parallel_threshold: usize,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4096,
            number_words: CARDINALS
                .iter()
                .chain(ORDINALS)
                .map(|word| (*word).to_string())
                .collect(),
            parallel_threshold: 1024,
        }
    }
}

impl VocabConfig {
    /// Creates a minimal configuration: no pre-allocation, no number words, no parallelism
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            initial_capacity: 0,
            number_words: Vec::new(),
            parallel_threshold: usize::MAX,
        }
    }

    /// Replace the number word list; entries are lower-cased
    #[must_use]
    pub fn with_number_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.number_words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Set the number of strings to pre-allocate room for
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the batch size from which interning runs in parallel
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_presets() {
        let default = VocabConfig::default();
        assert!(default.number_words.iter().any(|w| w == "ten"));
        assert!(default.number_words.iter().any(|w| w == "tenth"));
        assert_eq!(default.parallel_threshold, 1024);

        let minimal = VocabConfig::minimal();
        assert!(minimal.number_words.is_empty());
        assert_eq!(minimal.initial_capacity, 0);
        assert_eq!(minimal.parallel_threshold, usize::MAX);
    }

    #[test]
    fn test_builders() {
        let config = VocabConfig::minimal()
            .with_number_words(["Dozen"])
            .with_capacity(16)
            .with_parallel_threshold(8);

        assert_eq!(config.number_words, vec!["dozen".to_string()]);
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.parallel_threshold, 8);
    }
}
