use crate::alphabet::Alphabet;
use crate::results::WordleError;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// Contains all the possible words for a Wordle game.
///
/// Every word has the same length, and each word appears only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case. Blank lines and repeated words are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let words = word_reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case. Blank words and repeated words are
    /// skipped.
    ///
    /// ```
    /// use wordle_elimination::WordBank;
    ///
    /// let bank = WordBank::from_iterator(&["abc", "DEF", "abc"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank.word_length(), 3);
    /// ```
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
    {
        let mut word_length = 0;
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word: Arc<str> = Arc::from(word.to_lowercase().as_str());
            let length = word.chars().count();
            if word_length == 0 {
                word_length = length;
            } else if length != word_length {
                return Err(WordleError::WordLength(word_length));
            }
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff there are no words in the bank.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the word bank, in letters.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns `true` iff the bank contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.all_words.iter().any(|other| other.as_ref() == word)
    }

    /// Checks that every word only uses letters from the given alphabet.
    pub fn check_alphabet(&self, alphabet: &Alphabet) -> Result<(), WordleError> {
        for word in &self.all_words {
            for letter in word.chars() {
                alphabet.index_of(letter)?;
            }
        }
        Ok(())
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
