use crate::alphabet::Alphabet;
use crate::pool::CandidatePool;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

/// Counts, for each letter of the alphabet, how many words in the pool contain that letter at
/// least once. The result is indexed by alphabet position.
///
/// ```
/// use wordle_elimination::{compute_letter_scores, Alphabet, CandidatePool};
///
/// let pool = CandidatePool::from_words(["abc", "abd", "xyz"]);
/// let scores = compute_letter_scores(&pool, &Alphabet::english());
///
/// assert_eq!(scores[0], 2);
/// assert_eq!(scores[23], 1);
/// ```
pub fn compute_letter_scores(pool: &CandidatePool, alphabet: &Alphabet) -> Vec<u32> {
    let mut scores = vec![0; alphabet.len()];
    for word in pool.words() {
        let unique_letters: HashSet<char> = word.chars().collect();
        for letter in unique_letters {
            // Letters outside the alphabet can't be scored.
            if let Ok(index) = alphabet.index_of(letter) {
                scores[index] += 1;
            }
        }
    }
    scores
}

/// Returns the letter with the highest score, preferring the earliest letter in the alphabet on a
/// tie. Returns `None` if no letter has a positive score.
pub fn most_frequent_letter(scores: &[u32], alphabet: &Alphabet) -> Option<char> {
    let mut best: Option<(usize, u32)> = None;
    for (index, score) in scores.iter().enumerate() {
        if *score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= *score => {}
            _ => best = Some((index, *score)),
        }
    }
    best.and_then(|(index, _)| alphabet.letter(index).ok())
}

/// Picks the next guess from the pool, favouring words with the most common letter.
#[derive(Debug, Clone)]
pub struct GuessSelector<R> {
    rng: R,
}

impl<R: Rng> GuessSelector<R> {
    pub fn new(rng: R) -> GuessSelector<R> {
        GuessSelector { rng }
    }

    /// Chooses a word uniformly at random from the pool words containing the most frequent
    /// letter, or from the whole pool if none do. The chosen word is removed from the pool.
    ///
    /// Returns `None` if the pool is empty.
    pub fn select(&mut self, pool: &mut CandidatePool, alphabet: &Alphabet) -> Option<Arc<str>> {
        if pool.is_empty() {
            return None;
        }
        let scores = compute_letter_scores(pool, alphabet);
        let mut candidates: Vec<usize> = Vec::new();
        if let Some(target) = most_frequent_letter(&scores, alphabet) {
            trace!("Most frequent letter: '{}'", target);
            candidates.extend(
                pool.words()
                    .iter()
                    .enumerate()
                    .filter(|(_, word)| word.contains(target))
                    .map(|(index, _)| index),
            );
        }
        if candidates.is_empty() {
            candidates.extend(0..pool.len());
        }
        let index = *candidates.choose(&mut self.rng)?;
        Some(pool.remove_at(index))
    }
}
