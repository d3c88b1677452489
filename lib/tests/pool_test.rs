use wordle_elimination::LetterStatus::*;
use wordle_elimination::*;

use std::result::Result;

const WORDS: &[&str] = &[
    "alpha", "allot", "begot", "below", "endow", "ingot", "lunar", "lapse", "lilac", "mural",
    "right", "fight", "night", "light", "tight", "apple", "mango", "fuzzy", "dizzy", "crane",
    "slate", "trace", "crate", "raise",
];

fn start(words: &[&str]) -> Result<(CandidatePoolManager, CandidatePool), WordleError> {
    let mut manager = CandidatePoolManager::new(WordBank::from_iterator(words)?);
    let pool = manager.update(0, "", &[], CandidatePool::default())?;
    Ok((manager, pool))
}

fn words(pool: &CandidatePool) -> Vec<&str> {
    pool.words().iter().map(|word| word.as_ref()).collect()
}

#[test]
fn round_zero_ignores_feedback() -> Result<(), WordleError> {
    let mut manager = CandidatePoolManager::new(WordBank::from_iterator(WORDS)?);

    let pool = manager.update(0, "garbage", &[Absent], CandidatePool::default())?;

    assert_eq!(pool.len(), WORDS.len());
    Ok(())
}

#[test]
fn all_correct_leaves_only_the_guess() -> Result<(), WordleError> {
    let (mut manager, pool) = start(WORDS)?;

    let pool = manager.update(1, "right", &[CorrectPosition; 5], pool)?;

    assert_eq!(words(&pool), vec!["right"]);
    Ok(())
}

#[test]
fn all_correct_for_unknown_word_empties_pool() -> Result<(), WordleError> {
    let (mut manager, pool) = start(&["fight", "night", "light"])?;

    let pool = manager.update(1, "right", &[CorrectPosition; 5], pool)?;

    assert!(pool.is_empty());
    Ok(())
}

#[test]
fn all_absent_removes_words_with_any_guessed_letter() -> Result<(), WordleError> {
    let (mut manager, pool) = start(&["apple", "fuzzy", "mango", "dizzy"])?;

    let pool = manager.update(1, "xyzzy", &[Absent; 5], pool)?;

    assert_eq!(words(&pool), vec!["apple", "mango"]);
    Ok(())
}

#[test]
fn repeated_letter_absent_after_correct_is_ignored() -> Result<(), WordleError> {
    let (mut manager, pool) = start(&["lunar", "lapse", "lilac", "mural", "below"])?;

    // As if the objective were "lunar".
    let pool = manager.update(
        1,
        "llama",
        &[CorrectPosition, Absent, WrongPosition, Absent, Absent],
        pool,
    )?;

    assert_eq!(words(&pool), vec!["lunar", "lapse", "lilac"]);
    assert!(manager.known_letters().correct().contains(&'l'));
    assert!(manager.known_letters().present().contains(&'a'));
    Ok(())
}

#[test]
fn repeated_letter_absent_before_correct_over_deletes() -> Result<(), WordleError> {
    let (mut manager, pool) = start(&["cab", "cat", "tab"])?;

    // The feedback for guessing "bab" when the objective is "cab". The absent 'b' is seen
    // before the correct 'b', so every word with a 'b' is removed, including "cab".
    let result = get_result_for_guess("cab", "bab")?;
    assert_eq!(result.results, vec![Absent, CorrectPosition, CorrectPosition]);

    let pool = manager.update(1, "bab", &result.results, pool)?;

    assert!(!pool.contains("cab"));
    assert!(pool.is_empty());
    Ok(())
}

#[test]
fn correct_position_only_removes_mismatches() -> Result<(), WordleError> {
    let (mut manager, before) = start(WORDS)?;

    // 'q' is in none of the words, so only the first entry removes anything.
    let after = manager.update(
        1,
        "lqqqq",
        &[CorrectPosition, Absent, Absent, Absent, Absent],
        before.clone(),
    )?;

    for word in before.words() {
        let starts_with_l = word.starts_with('l');
        assert_eq!(after.contains(word), starts_with_l, "{}", word);
    }
    Ok(())
}

#[test]
fn pool_never_grows() -> Result<(), WordleError> {
    let (mut manager, mut pool) = start(WORDS)?;

    for (round, guess) in ["crane", "light", "below"].iter().enumerate() {
        let result = get_result_for_guess("night", guess)?;
        let size_before = pool.len();

        pool = manager.update(round + 1, guess, &result.results, pool)?;

        assert!(pool.len() <= size_before);
        assert!(pool.contains("night"));
    }
    Ok(())
}

#[test]
fn applying_the_same_feedback_twice_removes_nothing_more() -> Result<(), WordleError> {
    let (mut manager, pool) = start(WORDS)?;
    let result = get_result_for_guess("slate", "crate")?;

    let once = manager.update(1, "crate", &result.results, pool)?;
    let twice = manager.update(2, "crate", &result.results, once.clone())?;

    assert_eq!(once, twice);
    assert!(once.contains("slate"));
    Ok(())
}

#[test]
fn contradictory_feedback_empties_pool() -> Result<(), WordleError> {
    let (mut manager, pool) = start(WORDS)?;

    let only_first = [CorrectPosition, Absent, Absent, Absent, Absent];
    let pool = manager.update(1, "fqqqq", &only_first, pool)?;
    assert_eq!(words(&pool), vec!["fight", "fuzzy"]);

    let pool = manager.update(2, "nqqqq", &only_first, pool)?;

    assert!(pool.is_empty());
    Ok(())
}
