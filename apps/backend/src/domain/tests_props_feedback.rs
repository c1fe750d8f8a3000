//! Property tests for feedback scoring (pure domain).

use proptest::prelude::*;

use crate::domain::{score, test_gens, test_prelude, LetterMark, WORD_LENGTH};

fn count(bytes: &[u8], letter: u8) -> usize {
    bytes.iter().filter(|&&b| b == letter).count()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a word scored against itself is all green
    #[test]
    fn prop_self_score_is_solved(word in test_gens::word()) {
        let feedback = score(&word, &word);
        prop_assert!(feedback.is_solved());
    }

    /// Property: green exactly where letters agree positionally
    #[test]
    fn prop_green_iff_same_letter(
        guess in test_gens::dense_word(),
        answer in test_gens::dense_word(),
    ) {
        let feedback = score(&guess, &answer);
        for i in 0..WORD_LENGTH {
            let same = guess.as_bytes()[i] == answer.as_bytes()[i];
            prop_assert_eq!(feedback.marks()[i] == LetterMark::Green, same);
        }
    }

    /// Property: non-gray marks for a letter never exceed its count in the
    /// answer, and every occurrence the guess could claim is claimed
    #[test]
    fn prop_marks_capped_by_answer_letter_count(
        guess in test_gens::dense_word(),
        answer in test_gens::dense_word(),
    ) {
        let feedback = score(&guess, &answer);
        for letter in b'a'..=b'c' {
            let marked = (0..WORD_LENGTH)
                .filter(|&i| guess.as_bytes()[i] == letter)
                .filter(|&i| feedback.marks()[i] != LetterMark::Gray)
                .count();
            let in_guess = count(guess.as_bytes(), letter);
            let in_answer = count(answer.as_bytes(), letter);
            prop_assert_eq!(marked, in_guess.min(in_answer),
                "letter {} marked {} times", letter as char, marked);
        }
    }

    /// Property: solved only when guess equals answer
    #[test]
    fn prop_solved_iff_equal(
        guess in test_gens::dense_word(),
        answer in test_gens::dense_word(),
    ) {
        prop_assert_eq!(score(&guess, &answer).is_solved(), guess == answer);
    }
}
