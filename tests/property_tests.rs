//! Property-based tests for the PhonemaScript engine
//!
//! These tests use proptest to verify the segmentation invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use phonema::lexer::{self, TokenKind};
use proptest::prelude::*;

/// Characters of the phoneme alphabet (letters, whitespace, terminator).
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', ' ', ' ', '\n', '.', '\t',
];

fn phoneme_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(ALPHABET.to_vec()), 0..120)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Property: segmentation is total over the phoneme alphabet.
    #[test]
    fn lexing_valid_alphabet_never_fails(source in phoneme_text()) {
        prop_assert!(lexer::lex(&source).is_ok());
    }

    /// Property: tokens partition the input letters without overlap or gap — concatenating
    /// raw texts reproduces the input with whitespace and terminators removed.
    #[test]
    fn tokens_partition_the_letter_stream(source in phoneme_text()) {
        let tokens = lexer::lex(&source).unwrap();

        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let letters: String = source.chars().filter(|c| c.is_ascii_lowercase()).collect();
        prop_assert_eq!(joined, letters);

        // Spans are strictly ordered and non-overlapping.
        let mut last_end = 0;
        for token in tokens.iter().filter(|t| !t.kind.is_terminator()) {
            prop_assert!(token.span.start >= last_end, "overlap in {:?}", source);
            prop_assert!(token.span.end > token.span.start);
            last_end = token.span.end;
        }
    }

    /// Property: maximal munch — two adjacent tokens never spell a two-letter operator.
    /// If they did, the lexer should have fused them.
    #[test]
    fn adjacent_tokens_never_spell_a_pair(source in phoneme_text()) {
        let tokens = lexer::lex(&source).unwrap();
        for window in tokens.windows(2) {
            let (a, b) = (&window[0], &window[1]);
            // Only adjacent single-vowel tokens could have fused.
            if a.span.end == b.span.start && a.text.len() == 1 && b.text.len() == 1 {
                let pair = format!("{}{}", a.text, b.text);
                let fusable = phonema_core::lang::operators::TWO_LETTER.contains(&pair.as_str());
                let both_vowels = matches!(a.kind, TokenKind::Operation(_) | TokenKind::Control(_))
                    && matches!(b.kind, TokenKind::Operation(_) | TokenKind::Control(_));
                prop_assert!(
                    !(fusable && both_vowels),
                    "{:?} split the pair {:?}",
                    source,
                    pair
                );
            }
        }
    }

    /// Property: an unclassifiable character is a lex error at its exact offset, always.
    #[test]
    fn foreign_character_is_a_lex_error_at_its_offset(
        prefix in phoneme_text(),
        suffix in phoneme_text(),
        bad in proptest::sample::select(vec!['0', '9', '!', '?', 'A', 'Z']),
    ) {
        let source = format!("{prefix}{bad}{suffix}");
        let offset = prefix.len();
        let errors = lexer::lex(&source).unwrap_err();
        prop_assert!(
            errors.iter().any(|e| e.span.start == offset && e.span.end == offset + bad.len_utf8()),
            "no error at offset {} in {:?}: {:?}",
            offset,
            source,
            errors
        );
    }
}
