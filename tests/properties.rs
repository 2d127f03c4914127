//! Property tests for interning, document construction and span text.

use proptest::prelude::*;
use wordscope::prelude::*;

fn words_and_spaces() -> impl Strategy<Value = (Vec<String>, Vec<bool>)> {
    prop::collection::vec(("[a-zA-Z0-9.,!?]{1,8}", any::<bool>()), 0..24)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

proptest! {
    // Interning and then resolving returns the original string.
    #[test]
    fn round_trip(s: String) {
        let vocab = Vocab::new(VocabConfig::minimal());
        let id = vocab.strings().intern(&s).unwrap();
        prop_assert_eq!(vocab.strings().resolve(id).unwrap(), s.as_str());
    }

    // Interning the same string twice yields the same identifier.
    #[test]
    fn intern_idempotent(s: String) {
        let vocab = Vocab::new(VocabConfig::minimal());
        let first = vocab.strings().intern(&s).unwrap();
        let second = vocab.strings().intern(&s).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, StringId::of(&s));
    }

    #[test]
    fn token_count_matches_input((words, spaces) in words_and_spaces()) {
        let vocab = Vocab::new(VocabConfig::minimal());
        let doc = Doc::new(&vocab, &words, &spaces).unwrap();

        prop_assert_eq!(doc.token_count(), words.len());
        for (i, word) in words.iter().enumerate() {
            prop_assert_eq!(doc.token_at(i).unwrap().text(), word.as_str());
        }
    }

    #[test]
    fn span_text_has_no_trailing_space(
        (words, spaces) in words_and_spaces(),
        start in 0usize..30,
        len in 0usize..30,
    ) {
        let vocab = Vocab::new(VocabConfig::minimal());
        let doc = Doc::new(&vocab, &words, &spaces).unwrap();

        if let Ok(span) = Span::new(&doc, start, start + len, None) {
            prop_assert!(!span.text().ends_with(' '));
            prop_assert!(span.end() <= doc.token_count());
        } else {
            prop_assert!(start > doc.token_count());
        }
    }

    #[test]
    fn whitespace_split_reproduces_text(text in "[a-z ]{0,40}") {
        let vocab = Vocab::new(VocabConfig::minimal());
        let doc = Doc::from_whitespace(&vocab, &text).unwrap();
        prop_assert_eq!(doc.text(), text);
    }
}
