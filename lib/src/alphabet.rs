use crate::results::WordleError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ordered set of letters that words in a game can be made from.
///
/// Converts between letters and their indices, which is how the game harness describes guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Constructs an alphabet from the given letters, in order. Each letter is converted to lower
    /// case.
    ///
    /// ```
    /// use wordle_elimination::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abc".chars()).unwrap();
    /// assert_eq!(alphabet.index_of('c'), Ok(2));
    /// ```
    pub fn new<I>(letters: I) -> Result<Alphabet, WordleError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut alphabet = Alphabet {
            letters: Vec::new(),
        };
        for letter in letters.into_iter().flat_map(char::to_lowercase) {
            if alphabet.letters.contains(&letter) {
                return Err(WordleError::DuplicateLetter(letter));
            }
            alphabet.letters.push(letter);
        }
        Ok(alphabet)
    }

    /// The letters `a` to `z`.
    pub fn english() -> Alphabet {
        Alphabet {
            letters: ('a'..='z').collect(),
        }
    }

    /// Returns the number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` iff there are no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters, in alphabet order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the position of `letter` in the alphabet.
    pub fn index_of(&self, letter: char) -> Result<usize, WordleError> {
        self.letters
            .iter()
            .position(|other| *other == letter)
            .ok_or(WordleError::UnsupportedCharacter(letter))
    }

    /// Returns the letter at `index`.
    pub fn letter(&self, index: usize) -> Result<char, WordleError> {
        self.letters
            .get(index)
            .copied()
            .ok_or(WordleError::InvalidLetterIndex(index))
    }

    /// Converts a word to the index of each of its letters.
    pub fn word_to_indices(&self, word: &str) -> Result<Vec<usize>, WordleError> {
        word.chars().map(|letter| self.index_of(letter)).collect()
    }

    /// Converts letter indices back into a word.
    pub fn indices_to_word(&self, indices: &[usize]) -> Result<String, WordleError> {
        indices.iter().map(|index| self.letter(*index)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::english()
    }
}
