use crate::data::Word;
use crate::data::WORD_LENGTH;
use crate::results::GuessResult;
use crate::results::LetterResult;
use std::collections::BTreeSet;
use tracing::debug;
use tracing::warn;

/// What is known about a single location in the objective word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PositionRestriction {
    required: Option<char>,
    excluded: BTreeSet<char>,
    contradicted: bool,
}

impl PositionRestriction {
    /// The letter known to be at this location, if any.
    pub fn required_letter(&self) -> Option<char> {
        self.required
    }

    /// Letters known not to be at this location.
    pub fn excluded_letters(&self) -> &BTreeSet<char> {
        &self.excluded
    }

    /// Whether two different letters were both reported as correct here.
    ///
    /// No word satisfies a contradicted location.
    pub fn is_contradicted(&self) -> bool {
        self.contradicted
    }

    fn set_required(&mut self, letter: char) {
        match self.required {
            None => self.required = Some(letter),
            Some(existing) if existing == letter => {}
            Some(existing) => {
                warn!(
                    "Conflicting feedback: `{}` and `{}` both reported as correct at the same location",
                    existing, letter
                );
                self.contradicted = true;
            }
        }
    }

    fn is_satisfied_by(&self, letter: char) -> bool {
        if self.contradicted {
            return false;
        }
        if let Some(required) = self.required {
            if required != letter {
                return false;
            }
        }
        !self.excluded.contains(&letter)
    }
}

/// Defines letter restrictions that a word must adhere to, accumulated from every guess so far.
///
/// A letter is never in both [`must_contain`](Self::must_contain) and
/// [`must_not_contain`](Self::must_not_contain), and no letter required at some location is in
/// `must_not_contain`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordRestrictions {
    positions: [PositionRestriction; WORD_LENGTH],
    must_contain: BTreeSet<char>,
    must_not_contain: BTreeSet<char>,
    guesses: Vec<Word>,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object with all letters unknown.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(result: &GuessResult) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new();
        restrictions.update(result);
        restrictions
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// A letter reported as [`LetterResult::NotPresent`] is only ruled out of the whole word if
    /// it is not known to be present, either from an earlier guess or from another location in
    /// this one. Otherwise it is only ruled out of this location.
    pub fn update(&mut self, result: &GuessResult) {
        self.guesses.push(result.guess);
        for (index, (letter, letter_result)) in result.letters().enumerate() {
            match letter_result {
                LetterResult::Correct => {
                    self.positions[index].set_required(letter);
                    self.must_not_contain.remove(&letter);
                }
                LetterResult::PresentNotHere => {
                    self.must_contain.insert(letter);
                    self.positions[index].excluded.insert(letter);
                    self.must_not_contain.remove(&letter);
                }
                LetterResult::NotPresent => {
                    self.positions[index].excluded.insert(letter);
                    if is_present_elsewhere_in_guess(result, index, letter)
                        || self.is_known_present(letter)
                    {
                        debug!(
                            "`{}` is present elsewhere, only excluding it at location {}",
                            letter, index
                        );
                        continue;
                    }
                    self.must_not_contain.insert(letter);
                }
            }
        }
        debug!(
            "Restrictions after `{}`: contain {:?}, don't contain {:?}",
            result.guess, self.must_contain, self.must_not_contain
        );
    }

    /// Rules out every letter of the given word, except letters already known to be present.
    pub fn exclude_letters_of(&mut self, word: &Word) {
        for letter in word.chars() {
            if !self.is_known_present(letter) {
                self.must_not_contain.insert(letter);
            }
        }
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.must_contain.iter().all(|letter| word.contains(*letter))
            && !word
                .chars()
                .any(|letter| self.must_not_contain.contains(&letter))
            && word
                .chars()
                .zip(self.positions.iter())
                .all(|(letter, position)| position.is_satisfied_by(letter))
    }

    /// Letters that must be somewhere in the word.
    pub fn must_contain(&self) -> &BTreeSet<char> {
        &self.must_contain
    }

    /// Letters that must not be anywhere in the word.
    pub fn must_not_contain(&self) -> &BTreeSet<char> {
        &self.must_not_contain
    }

    /// The restriction for each location, in order.
    pub fn positions(&self) -> &[PositionRestriction; WORD_LENGTH] {
        &self.positions
    }

    /// Every guess applied so far, in order.
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    fn is_known_present(&self, letter: char) -> bool {
        self.must_contain.contains(&letter)
            || self
                .positions
                .iter()
                .any(|position| position.required == Some(letter))
    }
}

fn is_present_elsewhere_in_guess(result: &GuessResult, index: usize, letter: char) -> bool {
    result
        .letters()
        .enumerate()
        .any(|(other_index, (other_letter, other_result))| {
            other_index != index
                && other_letter == letter
                && other_result != LetterResult::NotPresent
        })
}

/// Gets the words that meet the given restrictions, keeping their order.
pub fn filter_words(words: &[Word], restrictions: &WordRestrictions) -> Vec<Word> {
    let possible_words: Vec<Word> = words
        .iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .copied()
        .collect();
    debug!(
        "Filtered {} words down to {}",
        words.len(),
        possible_words.len()
    );
    possible_words
}
