use crate::alphabet::Alphabet;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback for a given letter at a specific location.
///
/// The discriminants match the raw values used by the game harness.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum LetterStatus {
    /// The letter is in the word, at this location.
    CorrectPosition = 1,
    /// The letter is in the word, but somewhere else.
    WrongPosition = -1,
    /// The letter is not in the word.
    Absent = 0,
}

impl TryFrom<i8> for LetterStatus {
    type Error = WordleError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LetterStatus::CorrectPosition),
            -1 => Ok(LetterStatus::WrongPosition),
            0 => Ok(LetterStatus::Absent),
            other => Err(WordleError::InvalidStatus(other)),
        }
    }
}

impl From<LetterStatus> for i8 {
    fn from(status: LetterStatus) -> i8 {
        status as i8
    }
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// Every candidate word has been eliminated, so no consistent guess remains.
    #[error("no candidate words remain that are consistent with the feedback")]
    EmptyPool,
    /// The feedback (or the guess it refers to) does not have one entry per letter.
    #[error("expected {expected} feedback entries, but got {actual}")]
    FeedbackLength { expected: usize, actual: usize },
    /// A raw feedback status was not one of -1, 0 or 1.
    #[error("feedback status {0} is not one of -1, 0 or 1")]
    InvalidStatus(i8),
    /// A letter index does not refer to a letter in the alphabet.
    #[error("letter index {0} is outside the alphabet")]
    InvalidLetterIndex(usize),
    /// A character is not in the alphabet.
    #[error("the character '{0}' is not in the alphabet")]
    UnsupportedCharacter(char),
    /// The same letter was given twice when building an alphabet.
    #[error("the letter '{0}' appears more than once in the alphabet")]
    DuplicateLetter(char),
    /// Words must all have the given length.
    #[error("all words must have length {0}")]
    WordLength(usize),
    /// The word bank has no words in it.
    #[error("the word bank is empty")]
    EmptyWordBank,
    /// Reading the words failed.
    #[error("could not read words: {0}")]
    Io(String),
}

impl From<std::io::Error> for WordleError {
    fn from(error: std::io::Error) -> Self {
        WordleError::Io(error.to_string())
    }
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The status of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterStatus>,
}

impl<'a> GuessResult<'a> {
    /// Returns `true` iff every letter was in the correct position.
    pub fn is_solved(&self) -> bool {
        self.results
            .iter()
            .all(|status| *status == LetterStatus::CorrectPosition)
    }
}

/// What the game harness tells the guesser at the start of each round.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percept {
    /// Which guess this is, starting from 0 for the first guess of a game.
    pub round: usize,
    /// The previous guess, as indices into the alphabet. Unused on round 0.
    pub letter_indices: Vec<usize>,
    /// The raw feedback for each letter of the previous guess. Unused on round 0.
    pub statuses: Vec<i8>,
}

impl Percept {
    /// The percept for the first guess of a new game.
    pub fn initial() -> Percept {
        Percept {
            round: 0,
            letter_indices: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Encodes the given result as the percept for `round`.
    pub fn from_result(
        round: usize,
        result: &GuessResult,
        alphabet: &Alphabet,
    ) -> Result<Percept, WordleError> {
        Ok(Percept {
            round,
            letter_indices: alphabet.word_to_indices(result.guess)?,
            statuses: result.results.iter().map(|status| i8::from(*status)).collect(),
        })
    }

    /// Parses the raw statuses, checking that there is one per letter.
    pub fn letter_statuses(&self, word_length: usize) -> Result<Vec<LetterStatus>, WordleError> {
        if self.statuses.len() != word_length {
            return Err(WordleError::FeedbackLength {
                expected: word_length,
                actual: self.statuses.len(),
            });
        }
        self.statuses
            .iter()
            .map(|raw| LetterStatus::try_from(*raw))
            .collect()
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Arc<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Arc<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Repeated letters are handled the usual way: letters in the correct position are matched first,
/// then each remaining letter of the objective can mark at most one misplaced letter of the guess.
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective_letters: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective_letters.len() != guess_letters.len() {
        return Err(WordleError::WordLength(objective_letters.len()));
    }
    let mut results = vec![LetterStatus::Absent; guess_letters.len()];
    let mut unmatched: Vec<Option<char>> = Vec::with_capacity(objective_letters.len());
    for (index, (guess_letter, objective_letter)) in
        guess_letters.iter().zip(&objective_letters).enumerate()
    {
        if guess_letter == objective_letter {
            results[index] = LetterStatus::CorrectPosition;
            unmatched.push(None);
        } else {
            unmatched.push(Some(*objective_letter));
        }
    }
    for (index, guess_letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterStatus::CorrectPosition {
            continue;
        }
        if let Some(slot) = unmatched
            .iter_mut()
            .find(|slot| **slot == Some(*guess_letter))
        {
            *slot = None;
            results[index] = LetterStatus::WrongPosition;
        }
    }
    Ok(GuessResult { guess, results })
}
