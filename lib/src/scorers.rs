use crate::data::LocatedLetter;
use crate::data::PositionalFrequencies;
use crate::data::Word;
use crate::data::WORD_LENGTH;
use crate::results::Result;
use crate::results::WordleError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Updates the scorer with the latest list of possible words.
    fn update(&mut self, possible_words: &[Word]);
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Word) -> i64;
}

/// Scores words by summing, over each location, the number of possible words that have the same
/// letter at that location.
///
/// With the possible words `["crane", "crate", "slate"]`, `crate` scores `2 + 2 + 3 + 2 + 3`.
/// Integer counts keep equal scores exactly equal.
#[derive(Clone, Debug, Default)]
pub struct PositionalFrequencyScorer {
    frequencies: PositionalFrequencies,
}

impl PositionalFrequencyScorer {
    /// Constructs a scorer from the given possible words.
    ///
    /// ```
    /// use rs_wordle_narrower::scorers::{PositionalFrequencyScorer, WordScorer};
    /// use rs_wordle_narrower::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["crane", "crate", "slate"]).unwrap();
    /// let scorer = PositionalFrequencyScorer::new(&bank);
    ///
    /// assert_eq!(scorer.score_word(&bank[1]), 12);
    /// assert!(scorer.score_word(&bank[1]) > scorer.score_word(&bank[2]));
    /// ```
    pub fn new(possible_words: &[Word]) -> PositionalFrequencyScorer {
        PositionalFrequencyScorer {
            frequencies: PositionalFrequencies::new(possible_words),
        }
    }

    pub fn frequencies(&self) -> &PositionalFrequencies {
        &self.frequencies
    }

    /// Consumes the scorer, keeping its frequency table.
    pub fn into_frequencies(self) -> PositionalFrequencies {
        self.frequencies
    }

    /// The frequency of each of the word's letters at its location.
    pub fn letter_frequencies(&self, word: &Word) -> [f64; WORD_LENGTH] {
        let mut frequencies = [0.0; WORD_LENGTH];
        for (index, letter) in word.chars().enumerate() {
            frequencies[index] = self
                .frequencies
                .frequency(&LocatedLetter::new(letter, index as u8));
        }
        frequencies
    }

    /// Converts a score from [`WordScorer::score_word`] into the sum of the word's letter
    /// frequencies.
    pub fn normalize(&self, score: i64) -> f64 {
        if self.frequencies.is_empty() {
            return 0.0;
        }
        score as f64 / self.frequencies.num_words() as f64
    }
}

impl WordScorer for PositionalFrequencyScorer {
    fn update(&mut self, possible_words: &[Word]) {
        self.frequencies = PositionalFrequencies::new(possible_words);
    }

    fn score_word(&self, word: &Word) -> i64 {
        word.chars()
            .enumerate()
            .map(|(index, letter)| {
                self.frequencies
                    .num_words_with_located_letter(&LocatedLetter::new(letter, index as u8))
                    as i64
            })
            .sum()
    }
}

/// A word along with its positional letter frequencies and their sum.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub letter_frequencies: [f64; WORD_LENGTH],
    pub score: f64,
}

/// Ranks the given words by positional letter frequency, highest score first.
///
/// Ties keep the order of `possible_words`. An empty input gives an empty ranking.
pub fn rank_words(possible_words: &[Word]) -> Vec<ScoredWord> {
    rank_words_by_frequency(&PositionalFrequencyScorer::new(possible_words), possible_words)
}

/// Ranks the given words with an existing [`PositionalFrequencyScorer`], highest score first.
pub fn rank_words_by_frequency(
    scorer: &PositionalFrequencyScorer,
    words: &[Word],
) -> Vec<ScoredWord> {
    rank_words_with(scorer, words)
        .into_iter()
        .map(|(word, score)| ScoredWord {
            word,
            letter_frequencies: scorer.letter_frequencies(&word),
            score: scorer.normalize(score),
        })
        .collect()
}

/// Ranks words with any [`WordScorer`], highest score first. Ties keep the input order.
pub fn rank_words_with<S: WordScorer>(scorer: &S, words: &[Word]) -> Vec<(Word, i64)> {
    let mut ranked: Vec<(Word, i64)> = words
        .iter()
        .map(|word| (*word, scorer.score_word(word)))
        .collect();
    // `sort_by` is stable, which keeps the tie-break deterministic.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// How to pick the next guess from the possible words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SuggestionMethod {
    /// Any possible word, chosen uniformly at random.
    Random,
    /// The possible word with the highest positional letter frequency score.
    #[default]
    HighestFrequency,
}

impl SuggestionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SuggestionMethod::Random => "random",
            SuggestionMethod::HighestFrequency => "highest_frequency",
        }
    }
}

impl fmt::Display for SuggestionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuggestionMethod {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(SuggestionMethod::Random),
            "highest_frequency" => Ok(SuggestionMethod::HighestFrequency),
            other => Err(WordleError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Picks a guess from the possible words.
///
/// `ranking` is used for [`SuggestionMethod::HighestFrequency`] if given, otherwise the words are
/// ranked here. Fails with [`WordleError::EmptyCandidatePool`] if there are no possible words.
pub fn suggest<R: Rng + ?Sized>(
    method: SuggestionMethod,
    possible_words: &[Word],
    ranking: Option<&[ScoredWord]>,
    rng: &mut R,
) -> Result<Word> {
    let suggestion = match method {
        SuggestionMethod::Random => possible_words.choose(rng).copied(),
        SuggestionMethod::HighestFrequency => match ranking {
            Some(ranking) => ranking.first().map(|scored| scored.word),
            None => rank_words(possible_words).first().map(|scored| scored.word),
        },
    };
    suggestion.ok_or(WordleError::EmptyCandidatePool)
}
