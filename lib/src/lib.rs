//! A guessing agent for Wordle-style games.
//!
//! Each round the agent removes every word that contradicts the feedback for its previous guess,
//! then guesses one of the remaining words that contains the letter found in the most remaining
//! words.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordle_elimination::*;
//!
//! let bank = WordBank::from_iterator(&["crane", "slate", "below", "endow", "ingot"]).unwrap();
//! let alphabet = Alphabet::english();
//! let guesser = FrequencyGuesser::with_rng(
//!     bank.clone(),
//!     alphabet.clone(),
//!     GuesserConfig::default(),
//!     StdRng::seed_from_u64(0),
//! )
//! .unwrap();
//!
//! let result = play_game("below", 6, &bank, &alphabet, guesser).unwrap();
//! assert!(matches!(result, GameResult::Success(_)));
//! ```

mod alphabet;
mod data;
mod engine;
mod pool;
mod results;
mod selector;

pub use alphabet::Alphabet;
pub use data::WordBank;
pub use engine::*;
pub use pool::{CandidatePool, CandidatePoolManager, KnownLetters};
pub use results::*;
pub use selector::{compute_letter_scores, most_frequent_letter, GuessSelector};
