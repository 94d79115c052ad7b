use crate::results::WordleError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A five-letter word made of lowercase ASCII letters.
///
/// ```
/// use rs_wordle_narrower::Word;
///
/// let word = Word::new(" Crane ").unwrap();
/// assert_eq!(word.to_string(), "crane");
/// assert_eq!(word.letter(1), 'r');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

impl Word {
    /// Parses a word, trimming whitespace and converting it to lower case.
    pub fn new(text: &str) -> Result<Word, WordleError> {
        let text = text.trim().to_lowercase();
        let num_chars = text.chars().count();
        if num_chars != WORD_LENGTH {
            return Err(WordleError::WordLength(num_chars));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (index, letter) in text.chars().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            letters[index] = letter as u8;
        }
        Ok(Word { letters })
    }

    /// Returns the letter at the given zero-based index.
    ///
    /// Panics if `index >= WORD_LENGTH`.
    pub fn letter(&self, index: usize) -> char {
        self.letters[index] as char
    }

    /// Iterates over the letters of the word, in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|letter| *letter as char)
    }

    /// Returns `true` if the letter occurs anywhere in this word.
    pub fn contains(&self, letter: char) -> bool {
        self.chars().any(|other_letter| other_letter == letter)
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII lowercase letters are ever stored.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// An ordered list of unique words, e.g. as read from a word list file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Blank lines are skipped, each word is
    /// trimmed and converted to lower case, and repeated words are only kept once.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut words = Vec::new();
        for line in word_reader.lines() {
            words.push(line?);
        }
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// ```
    /// use rs_wordle_narrower::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["crane", "", "Slate", "crane"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    /// ```
    pub fn from_iterator<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut unique_words = Vec::new();
        for text in words {
            let text = text.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            let word = Word::new(text)?;
            if seen.insert(word) {
                unique_words.push(word);
            }
        }
        Ok(WordBank {
            words: unique_words,
        })
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// The vocabularies for a game: every acceptable guess, and the words that can be the answer.
///
/// Every solution is also a valid guess. Both lists keep the order in which the words were
/// provided, which makes every ranking over them deterministic.
#[derive(Clone, Debug)]
pub struct Lexicon {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    guess_set: HashSet<Word>,
    solution_set: HashSet<Word>,
}

impl Lexicon {
    /// Creates a lexicon. The guess vocabulary is extended with any solutions it is missing.
    ///
    /// ```
    /// use rs_wordle_narrower::{Lexicon, WordBank};
    ///
    /// let solutions = WordBank::from_iterator(["crane"]).unwrap();
    /// let guesses = WordBank::from_iterator(["slate"]).unwrap();
    /// let lexicon = Lexicon::new(solutions, guesses);
    ///
    /// assert_eq!(lexicon.guess_words().len(), 2);
    /// ```
    pub fn new(solutions: WordBank, guesses: WordBank) -> Lexicon {
        let solution_set: HashSet<Word> = solutions.iter().copied().collect();
        let mut guess_set = solution_set.clone();
        let mut all_guesses = solutions.words.clone();
        for word in guesses.iter() {
            if guess_set.insert(*word) {
                all_guesses.push(*word);
            }
        }
        Lexicon {
            solutions: solutions.words,
            guesses: all_guesses,
            guess_set,
            solution_set,
        }
    }

    /// Creates a lexicon where the same words are both the solutions and the guesses.
    pub fn from_solutions(solutions: WordBank) -> Lexicon {
        Lexicon::new(solutions, WordBank::default())
    }

    /// Reads both vocabularies, one word per line.
    pub fn from_readers<S: BufRead, G: BufRead>(
        solutions: S,
        guesses: G,
    ) -> Result<Lexicon, WordleError> {
        Ok(Lexicon::new(
            WordBank::from_reader(solutions)?,
            WordBank::from_reader(guesses)?,
        ))
    }

    /// The words that can be the answer, in source order.
    pub fn solution_words(&self) -> &[Word] {
        &self.solutions
    }

    /// Every acceptable guess: the solutions first, then the remaining guess words.
    pub fn guess_words(&self) -> &[Word] {
        &self.guesses
    }

    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guess_set.contains(word)
    }

    pub fn is_solution(&self, word: &Word) -> bool {
        self.solution_set.contains(word)
    }
}

/// Relative frequencies of each letter at each location, across a list of words.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionalFrequencies {
    num_words_by_ll: HashMap<LocatedLetter, u32>,
    num_words: u32,
}

impl PositionalFrequencies {
    /// Counts the letters at each location of the given words.
    pub fn new(words: &[Word]) -> PositionalFrequencies {
        let mut num_words_by_ll: HashMap<LocatedLetter, u32> = HashMap::new();
        for word in words {
            for (index, letter) in word.chars().enumerate() {
                *num_words_by_ll
                    .entry(LocatedLetter::new(letter, index as u8))
                    .or_insert(0) += 1;
            }
        }
        PositionalFrequencies {
            num_words_by_ll,
            num_words: words.len() as u32,
        }
    }

    /// Retrieves the count of words with the given letter at the given location.
    pub fn num_words_with_located_letter(&self, ll: &LocatedLetter) -> u32 {
        *self.num_words_by_ll.get(ll).unwrap_or(&0)
    }

    /// The fraction of words with the given letter at the given location.
    ///
    /// This is `0.0` for every letter if there are no words.
    pub fn frequency(&self, ll: &LocatedLetter) -> f64 {
        if self.num_words == 0 {
            return 0.0;
        }
        self.num_words_with_located_letter(ll) as f64 / self.num_words as f64
    }

    /// The number of words these frequencies were computed from.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }
}
