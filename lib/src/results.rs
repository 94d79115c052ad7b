use crate::data::Word;
use crate::data::WORD_LENGTH;
use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is at this location in the objective word.
    Correct,
    /// The letter is somewhere in the objective word, but not here.
    PresentNotHere,
    /// The letter is not in the objective word.
    NotPresent,
}

impl LetterResult {
    /// Parses one character of a feedback pattern: `g` (green), `y` (yellow), or `.`, `-`, `x`
    /// (gray).
    pub fn from_pattern_char(c: char) -> Result<LetterResult> {
        match c.to_ascii_lowercase() {
            'g' => Ok(LetterResult::Correct),
            'y' => Ok(LetterResult::PresentNotHere),
            '.' | '-' | 'x' => Ok(LetterResult::NotPresent),
            other => Err(WordleError::InvalidFeedback(other)),
        }
    }
}

/// Indicates that an error occurred while playing or narrowing a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The guess is not in the guess vocabulary.
    #[error("`{0}` is not a valid guess")]
    InvalidGuess(String),
    /// The requested suggestion method does not exist.
    #[error("unsupported suggestion method `{0}`, expected `random` or `highest_frequency`")]
    UnsupportedMethod(String),
    /// No word is consistent with the feedback received so far.
    #[error("no candidate words remain")]
    EmptyCandidatePool,
    /// The game has already been won or lost.
    #[error("the game is already over")]
    GameOver,
    /// A word or feedback pattern had the wrong number of letters. Holds the length that was
    /// received.
    #[error("expected 5 letters, got {0}")]
    WordLength(usize),
    /// A word contained something other than a lowercase ASCII letter.
    #[error("unsupported character `{0}`")]
    UnsupportedCharacter(char),
    /// A feedback pattern contained a character that is not a known color.
    #[error("unknown feedback character `{0}`, use 'g', 'y' or '.'")]
    InvalidFeedback(char),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WordleError>;

/// The result of a single word guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    pub guess: Word,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: [LetterResult; WORD_LENGTH],
}

impl GuessResult {
    /// Returns `true` if every letter is [`LetterResult::Correct`].
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }

    /// Pairs each letter of the guess with its result, for rendering.
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.guess.chars().zip(self.results.iter().copied())
    }
}

/// Where the feedback for a guess comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSource {
    /// Compute the feedback against a known objective word.
    Known(Word),
    /// Use feedback supplied from outside, e.g. typed in by a person playing a real game.
    Assisted([LetterResult; WORD_LENGTH]),
}

impl FeedbackSource {
    /// Produces the result for the given guess.
    pub fn evaluate(&self, guess: Word) -> GuessResult {
        match self {
            FeedbackSource::Known(objective) => get_result_for_guess(*objective, guess),
            FeedbackSource::Assisted(results) => GuessResult {
                guess,
                results: *results,
            },
        }
    }
}

/// Parses a feedback pattern such as `"g.yy."` into letter results.
///
/// ```
/// use rs_wordle_narrower::{parse_feedback, LetterResult};
///
/// let results = parse_feedback("g.y..").unwrap();
/// assert_eq!(results[0], LetterResult::Correct);
/// assert_eq!(results[2], LetterResult::PresentNotHere);
/// ```
pub fn parse_feedback(pattern: &str) -> Result<[LetterResult; WORD_LENGTH]> {
    let pattern = pattern.trim();
    let num_chars = pattern.chars().count();
    if num_chars != WORD_LENGTH {
        return Err(WordleError::WordLength(num_chars));
    }
    let mut results = [LetterResult::NotPresent; WORD_LENGTH];
    for (index, c) in pattern.chars().enumerate() {
        results[index] = LetterResult::from_pattern_char(c)?;
    }
    Ok(results)
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// A letter that is not at its location is reported as [`LetterResult::PresentNotHere`]
/// whenever it occurs anywhere in the objective. Repeated letters are not counted, so a guess
/// that repeats a letter the objective contains once reports every copy as present.
///
/// ```
/// use rs_wordle_narrower::{get_result_for_guess, LetterResult, Word};
///
/// let objective = Word::new("crane").unwrap();
/// let result = get_result_for_guess(objective, Word::new("plane").unwrap());
///
/// assert_eq!(
///     result.results,
///     [
///         LetterResult::NotPresent,
///         LetterResult::NotPresent,
///         LetterResult::Correct,
///         LetterResult::Correct,
///         LetterResult::Correct,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: Word, guess: Word) -> GuessResult {
    let mut results = [LetterResult::NotPresent; WORD_LENGTH];
    for (index, letter) in guess.chars().enumerate() {
        results[index] = if objective.letter(index) == letter {
            LetterResult::Correct
        } else if objective.contains(letter) {
            LetterResult::PresentNotHere
        } else {
            LetterResult::NotPresent
        };
    }
    GuessResult { guess, results }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Word>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Word>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}
