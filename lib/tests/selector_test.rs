use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_elimination::LetterStatus::*;
use wordle_elimination::*;

use std::result::Result;

#[test]
fn letter_scores_for_small_pool() {
    let alphabet = Alphabet::english();
    let pool = CandidatePool::from_words(["abc", "abd", "xyz"]);

    let scores = compute_letter_scores(&pool, &alphabet);

    assert_eq!(scores.len(), 26);
    assert_eq!(scores[alphabet.index_of('a').unwrap()], 2);
    assert_eq!(scores[alphabet.index_of('b').unwrap()], 2);
    assert_eq!(scores[alphabet.index_of('x').unwrap()], 1);
    assert_eq!(scores[alphabet.index_of('z').unwrap()], 1);
}

#[test]
fn selects_only_remaining_word_after_full_match() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["fight", "right", "night", "light"])?;
    let mut manager = CandidatePoolManager::new(bank);
    let mut selector = GuessSelector::new(StdRng::seed_from_u64(5));
    let pool = manager.update(0, "", &[], CandidatePool::default())?;

    let mut pool = manager.update(1, "right", &[CorrectPosition; 5], pool)?;

    assert_eq!(
        selector.select(&mut pool, &Alphabet::english()).as_deref(),
        Some("right")
    );
    assert!(pool.is_empty());
    assert_eq!(selector.select(&mut pool, &Alphabet::english()), None);
    Ok(())
}

#[test]
fn every_selection_shrinks_the_pool_by_one() {
    let alphabet = Alphabet::english();
    let mut selector = GuessSelector::new(StdRng::seed_from_u64(11));
    let mut pool = CandidatePool::from_words(["crane", "slate", "trace", "crate", "mango"]);

    while !pool.is_empty() {
        let size_before = pool.len();
        let guess = selector.select(&mut pool, &alphabet).unwrap();

        assert_eq!(pool.len(), size_before - 1);
        assert!(!pool.contains(&guess));
    }
}

#[test]
fn selection_favours_most_frequent_letter() {
    let alphabet = Alphabet::english();
    // 'e' is in three words, more than any other letter.
    let words = ["bee", "eel", "ode", "cat", "dog"];

    for seed in 0..20 {
        let mut selector = GuessSelector::new(StdRng::seed_from_u64(seed));
        let mut pool = CandidatePool::from_words(words);

        let guess = selector.select(&mut pool, &alphabet).unwrap();

        assert!(guess.contains('e'), "{}", guess);
    }
}
