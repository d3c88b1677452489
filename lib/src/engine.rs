use crate::alphabet::Alphabet;
use crate::data::WordBank;
use crate::pool::{CandidatePool, CandidatePoolManager, KnownLetters};
use crate::results::*;
use crate::selector::GuessSelector;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Guesses words until it finds the objective word.
pub trait Guesser {
    /// Applies the feedback in `percept` and returns the next word to guess.
    fn next_guess(&mut self, percept: &Percept) -> Result<Arc<str>, WordleError>;
}

/// What to do when feedback has eliminated every candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyPoolPolicy {
    /// Return [`WordleError::EmptyPool`].
    #[default]
    Report,
    /// Refill the pool with every dictionary word not yet guessed this game, and keep going.
    Reseed,
}

/// Settings supplied at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuesserConfig {
    /// The maximum number of guesses in a game.
    pub max_guesses: u32,
    pub on_empty_pool: EmptyPoolPolicy,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        GuesserConfig {
            max_guesses: 6,
            on_empty_pool: EmptyPoolPolicy::Report,
        }
    }
}

/// Eliminates words that don't match the feedback, then guesses a remaining word that contains
/// the letter found in the most remaining words.
///
/// ```
/// use wordle_elimination::*;
///
/// let bank = WordBank::from_iterator(&["abc", "abd", "xyz"]).unwrap();
/// let mut guesser =
///     FrequencyGuesser::new(bank, Alphabet::english(), GuesserConfig::default()).unwrap();
///
/// let guess = guesser.next_guess(&Percept::initial()).unwrap();
/// assert!(guess.as_ref() == "abc" || guess.as_ref() == "abd");
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyGuesser<R = StdRng> {
    alphabet: Alphabet,
    config: GuesserConfig,
    manager: CandidatePoolManager,
    selector: GuessSelector<R>,
    pool: CandidatePool,
    guessed: Vec<Arc<str>>,
}

impl FrequencyGuesser<StdRng> {
    /// Constructs a guesser whose random choices are seeded from the operating system.
    pub fn new(
        bank: WordBank,
        alphabet: Alphabet,
        config: GuesserConfig,
    ) -> Result<FrequencyGuesser<StdRng>, WordleError> {
        FrequencyGuesser::with_rng(bank, alphabet, config, StdRng::from_entropy())
    }
}

impl<R: Rng> FrequencyGuesser<R> {
    /// Constructs a guesser that makes its random choices with `rng`.
    ///
    /// Fails if the bank is empty or uses letters outside the alphabet.
    pub fn with_rng(
        bank: WordBank,
        alphabet: Alphabet,
        config: GuesserConfig,
        rng: R,
    ) -> Result<FrequencyGuesser<R>, WordleError> {
        if bank.is_empty() {
            return Err(WordleError::EmptyWordBank);
        }
        bank.check_alphabet(&alphabet)?;
        Ok(FrequencyGuesser {
            pool: CandidatePool::from_bank(&bank),
            alphabet,
            config,
            manager: CandidatePoolManager::new(bank),
            selector: GuessSelector::new(rng),
            guessed: Vec::new(),
        })
    }

    /// The words that are still possible answers.
    pub fn remaining_words(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn known_letters(&self) -> &KnownLetters {
        self.manager.known_letters()
    }

    pub fn config(&self) -> &GuesserConfig {
        &self.config
    }

    /// The words guessed so far this game.
    pub fn guessed(&self) -> &[Arc<str>] {
        &self.guessed
    }

    fn apply_feedback(&mut self, percept: &Percept) -> Result<(), WordleError> {
        let word_length = self.manager.bank().word_length();
        if percept.round == 0 {
            self.guessed.clear();
            self.pool = self
                .manager
                .update(0, "", &[], std::mem::take(&mut self.pool))?;
            return Ok(());
        }
        // Check everything before handing over the pool, so bad feedback leaves it untouched.
        let statuses = percept.letter_statuses(word_length)?;
        if percept.letter_indices.len() != word_length {
            return Err(WordleError::FeedbackLength {
                expected: word_length,
                actual: percept.letter_indices.len(),
            });
        }
        let current_guess = self.alphabet.indices_to_word(&percept.letter_indices)?;
        self.pool = self.manager.update(
            percept.round,
            &current_guess,
            &statuses,
            std::mem::take(&mut self.pool),
        )?;
        Ok(())
    }

    fn handle_empty_pool(&mut self, round: usize) -> Result<(), WordleError> {
        match self.config.on_empty_pool {
            EmptyPoolPolicy::Report => {
                warn!("Round {}: no possible words left", round);
                Err(WordleError::EmptyPool)
            }
            EmptyPoolPolicy::Reseed => {
                let guessed = &self.guessed;
                self.pool = CandidatePool::from_words(
                    self.manager
                        .bank()
                        .iter()
                        .filter(|word| !guessed.contains(word)),
                );
                warn!(
                    "Round {}: no possible words left, reseeded with {} unguessed words",
                    round,
                    self.pool.len()
                );
                if self.pool.is_empty() {
                    return Err(WordleError::EmptyPool);
                }
                Ok(())
            }
        }
    }
}

impl<R: Rng> Guesser for FrequencyGuesser<R> {
    fn next_guess(&mut self, percept: &Percept) -> Result<Arc<str>, WordleError> {
        self.apply_feedback(percept)?;
        if self.pool.is_empty() {
            self.handle_empty_pool(percept.round)?;
        }
        let guess = self
            .selector
            .select(&mut self.pool, &self.alphabet)
            .ok_or(WordleError::EmptyPool)?;
        debug!("Round {}: guessing \"{}\"", percept.round, guess);
        self.guessed.push(Arc::clone(&guess));
        Ok(guess)
    }
}

/// Plays a game against the objective word, acting as the game harness for the given guesser.
///
/// Returns [`GameResult::UnknownWord`] if the objective is not in the bank.
pub fn play_game<G: Guesser>(
    objective: &str,
    max_num_guesses: u32,
    bank: &WordBank,
    alphabet: &Alphabet,
    mut guesser: G,
) -> Result<GameResult, WordleError> {
    if !bank.contains(objective) {
        return Ok(GameResult::UnknownWord);
    }
    let mut guesses: Vec<Arc<str>> = Vec::new();
    let mut percept = Percept::initial();
    for round in 0..max_num_guesses as usize {
        let guess = guesser.next_guess(&percept)?;
        guesses.push(Arc::clone(&guess));
        let result = get_result_for_guess(objective, &guess)?;
        if result.is_solved() {
            return Ok(GameResult::Success(guesses));
        }
        percept = Percept::from_result(round + 1, &result, alphabet)?;
    }
    Ok(GameResult::Failure(guesses))
}
