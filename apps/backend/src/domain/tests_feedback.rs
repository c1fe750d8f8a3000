use crate::domain::{score, Feedback, LetterMark, Word};

use LetterMark::{Gray, Green, Yellow};

fn fb(guess: &str, answer: &str) -> Feedback {
    score(&Word::parse(guess).unwrap(), &Word::parse(answer).unwrap())
}

#[test]
fn test_all_correct() {
    let feedback = fb("crane", "crane");
    assert!(feedback.is_solved());
    assert_eq!(feedback.marks(), &[Green; 5]);
}

#[test]
fn test_all_absent() {
    assert_eq!(fb("quick", "dream").marks(), &[Gray; 5]);
}

#[test]
fn test_trace_against_crane() {
    assert_eq!(
        fb("trace", "crane").marks(),
        &[Gray, Green, Green, Yellow, Green]
    );
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(
        fb("crane", "charm").marks(),
        &[Green, Yellow, Green, Gray, Gray]
    );
}

#[test]
fn test_duplicate_letters_capped_by_answer() {
    // answer has one e and two b's; the second guessed e must stay gray
    assert_eq!(
        fb("eebbe", "abbey").marks(),
        &[Yellow, Gray, Green, Yellow, Gray]
    );
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(
        fb("speed", "creep").marks(),
        &[Gray, Yellow, Green, Green, Gray]
    );
}

#[test]
fn test_duplicate_letters_in_answer() {
    assert_eq!(
        fb("arose", "creep").marks(),
        &[Gray, Green, Gray, Gray, Yellow]
    );
}

#[test]
fn test_green_consumes_before_yellow() {
    // creep has two e's: one is green at position 2, the other goes to
    // the first non-green e, and the last e stays gray
    assert_eq!(
        fb("geese", "creep").marks(),
        &[Gray, Yellow, Green, Gray, Gray]
    );
}

#[test]
fn test_repeated_letter_after_answer_consumed() {
    assert_eq!(
        fb("sores", "those").marks(),
        &[Yellow, Yellow, Gray, Yellow, Gray]
    );
}

#[test]
fn test_serializes_as_lowercase_names() {
    let json = serde_json::to_value(fb("trace", "crane")).unwrap();
    assert_eq!(
        json,
        serde_json::json!(["gray", "green", "green", "yellow", "green"])
    );
}

#[test]
fn test_emoji_display() {
    assert_eq!(fb("trace", "crane").to_string(), "⬛🟩🟩🟨🟩");
}
