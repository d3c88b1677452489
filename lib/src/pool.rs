use crate::data::WordBank;
use crate::results::{LetterStatus, WordleError};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// The words that are still possible answers, in dictionary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Arc<str>>,
}

impl CandidatePool {
    /// A pool containing every word in the bank.
    pub fn from_bank(bank: &WordBank) -> CandidatePool {
        CandidatePool {
            words: bank.to_vec(),
        }
    }

    /// A pool containing the given words. Later repeats of a word are dropped.
    pub fn from_words<S>(words: impl IntoIterator<Item = S>) -> CandidatePool
    where
        S: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        CandidatePool {
            words: words
                .into_iter()
                .map(|word| Arc::<str>::from(word.as_ref()))
                .filter(|word| seen.insert(Arc::clone(word)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|other| other.as_ref() == word)
    }

    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Removes and returns the word at `index`, keeping the order of the rest.
    pub(crate) fn remove_at(&mut self, index: usize) -> Arc<str> {
        self.words.remove(index)
    }

    fn without(self, removed: &HashSet<Arc<str>>) -> CandidatePool {
        CandidatePool {
            words: self
                .words
                .into_iter()
                .filter(|word| !removed.contains(word))
                .collect(),
        }
    }
}

/// Letters that feedback has shown to be in the objective word.
///
/// Used to avoid removing words that contain a repeated letter when only one copy of that letter
/// was marked absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLetters {
    correct: HashSet<char>,
    present: HashSet<char>,
}

impl KnownLetters {
    /// Letters that have been in the correct position in some guess.
    pub fn correct(&self) -> &HashSet<char> {
        &self.correct
    }

    /// Letters that have been in the word, but in the wrong position, in some guess.
    pub fn present(&self) -> &HashSet<char> {
        &self.present
    }

    /// Returns `true` iff the letter is known to be in the word.
    pub fn contains(&self, letter: char) -> bool {
        self.correct.contains(&letter) || self.present.contains(&letter)
    }

    fn clear(&mut self) {
        self.correct.clear();
        self.present.clear();
    }
}

/// Keeps the candidate pool consistent with the feedback received so far in a game.
///
/// The filter is a heuristic, not an exact solver. An absent letter is only excused by letters
/// already known from earlier positions or earlier rounds. If a guess has an absent `s` followed
/// by a correct `s`, every word containing `s` is removed, including the objective.
#[derive(Debug, Clone)]
pub struct CandidatePoolManager {
    bank: WordBank,
    known: KnownLetters,
}

impl CandidatePoolManager {
    pub fn new(bank: WordBank) -> CandidatePoolManager {
        CandidatePoolManager {
            bank,
            known: KnownLetters::default(),
        }
    }

    /// The letters known to be in the word so far this game.
    pub fn known_letters(&self) -> &KnownLetters {
        &self.known
    }

    /// The dictionary that the pool is reset to on round 0.
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Filters `pool` using the feedback for `current_guess`, returning the words that remain.
    ///
    /// On round 0 the guess and feedback are ignored, and the full dictionary is returned.
    pub fn update(
        &mut self,
        round: usize,
        current_guess: &str,
        feedback: &[LetterStatus],
        pool: CandidatePool,
    ) -> Result<CandidatePool, WordleError> {
        if round == 0 {
            self.known.clear();
            return Ok(CandidatePool::from_bank(&self.bank));
        }

        let word_length = self.bank.word_length();
        let guess: Vec<char> = current_guess.chars().collect();
        if guess.len() != word_length {
            return Err(WordleError::FeedbackLength {
                expected: word_length,
                actual: guess.len(),
            });
        }
        if feedback.len() != word_length {
            return Err(WordleError::FeedbackLength {
                expected: word_length,
                actual: feedback.len(),
            });
        }

        let mut removed: HashSet<Arc<str>> = HashSet::new();
        for (index, (letter, status)) in guess.iter().zip(feedback).enumerate() {
            let letter = *letter;
            match status {
                LetterStatus::CorrectPosition => {
                    self.known.correct.insert(letter);
                    removed.extend(
                        pool.words()
                            .iter()
                            .filter(|word| word.chars().nth(index) != Some(letter))
                            .cloned(),
                    );
                }
                LetterStatus::WrongPosition => {
                    self.known.present.insert(letter);
                    removed.extend(
                        pool.words()
                            .iter()
                            .filter(|word| {
                                !word.contains(letter) || word.chars().nth(index) == Some(letter)
                            })
                            .cloned(),
                    );
                }
                LetterStatus::Absent => {
                    if self.known.contains(letter) {
                        continue;
                    }
                    removed.extend(
                        pool.words()
                            .iter()
                            .filter(|word| word.contains(letter))
                            .cloned(),
                    );
                }
            }
        }

        let size_before = pool.len();
        let pool = pool.without(&removed);
        debug!(
            "Round {}: {} of {} possible words left after \"{}\"",
            round,
            pool.len(),
            size_before,
            current_guess
        );
        Ok(pool)
    }
}
