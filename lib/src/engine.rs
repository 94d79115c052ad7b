use crate::data::*;
use crate::restrictions::filter_words;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use crate::scorers::rank_words;
use crate::scorers::rank_words_by_frequency;
use crate::scorers::suggest;
use crate::scorers::PositionalFrequencyScorer;
use crate::scorers::ScoredWord;
use crate::scorers::SuggestionMethod;
use rand::seq::SliceRandom;
use rand::Rng;
use std::borrow::Cow;
use tracing::debug;
use tracing::info;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which vocabulary the possible words are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PoolSource {
    /// Only words that can be the answer.
    #[default]
    Solutions,
    /// Every acceptable guess.
    Guesses,
}

/// Options for a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// The objective word. A random solution is chosen if this is `None`.
    pub answer: Option<Word>,
    /// Skips ranking the possible words after every guess. Rankings are then computed only when
    /// a suggestion is requested.
    pub quick_game: bool,
    /// Whether the caller should render each guess. The game itself never prints.
    pub print_enabled: bool,
    /// The game is lost once this many guesses have been made without finding the answer.
    /// Unlimited if `None`.
    pub max_guesses: Option<u32>,
    pub pool_source: PoolSource,
}

/// The state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// A single game: the feedback received so far, and the words that are still possible.
///
/// ```
/// use rs_wordle_narrower::*;
///
/// let lexicon = Lexicon::from_solutions(
///     WordBank::from_iterator(["train", "crane", "plane", "slate", "crate"]).unwrap());
/// let config = GameConfig {
///     answer: Some(Word::new("crane").unwrap()),
///     ..GameConfig::default()
/// };
/// let mut game = Game::new(&lexicon, config).unwrap();
///
/// while game.state() == GameState::InProgress {
///     let guess = game.suggest(SuggestionMethod::HighestFrequency).unwrap();
///     game.guess(guess).unwrap();
/// }
/// assert_eq!(game.state(), GameState::Won);
/// ```
#[derive(Clone, Debug)]
pub struct Game<'a> {
    lexicon: &'a Lexicon,
    config: GameConfig,
    answer: Word,
    restrictions: WordRestrictions,
    possible_words: Vec<Word>,
    ranking: Option<Vec<ScoredWord>>,
    frequencies: Option<PositionalFrequencies>,
    history: Vec<GuessResult>,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Starts a game, choosing a random answer with the thread-local generator if the config
    /// has none.
    pub fn new(lexicon: &'a Lexicon, config: GameConfig) -> Result<Game<'a>> {
        Game::with_rng(lexicon, config, &mut rand::thread_rng())
    }

    /// Starts a game, choosing a random answer with `rng` if the config has none.
    ///
    /// Fails with [`WordleError::EmptyCandidatePool`] if an answer must be chosen but there are
    /// no solutions.
    pub fn with_rng<R: Rng + ?Sized>(
        lexicon: &'a Lexicon,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Game<'a>> {
        let answer = match config.answer {
            Some(answer) => answer,
            None => *lexicon
                .solution_words()
                .choose(rng)
                .ok_or(WordleError::EmptyCandidatePool)?,
        };
        if !lexicon.is_solution(&answer) {
            warn!("Answer `{}` is not in the solution vocabulary", answer);
        }
        let possible_words = match config.pool_source {
            PoolSource::Solutions => lexicon.solution_words().to_vec(),
            PoolSource::Guesses => lexicon.guess_words().to_vec(),
        };
        let mut game = Game {
            lexicon,
            config,
            answer,
            restrictions: WordRestrictions::new(),
            possible_words,
            ranking: None,
            frequencies: None,
            history: Vec::new(),
            state: GameState::InProgress,
        };
        game.refresh_ranking();
        Ok(game)
    }

    /// Guesses the given word, computing the feedback against the answer.
    pub fn guess(&mut self, word: Word) -> Result<GuessResult> {
        self.apply_guess(word, FeedbackSource::Known(self.answer))
    }

    /// Guesses the given word with externally supplied feedback, e.g. from a person playing a
    /// real game. The answer is ignored.
    pub fn guess_with_feedback(
        &mut self,
        word: Word,
        results: [LetterResult; WORD_LENGTH],
    ) -> Result<GuessResult> {
        self.apply_guess(word, FeedbackSource::Assisted(results))
    }

    /// Applies one guess: validates it, evaluates the feedback, narrows the possible words and
    /// updates the state.
    ///
    /// On error the game is left unchanged.
    pub fn apply_guess(&mut self, word: Word, source: FeedbackSource) -> Result<GuessResult> {
        if self.state != GameState::InProgress {
            return Err(WordleError::GameOver);
        }
        if !self.lexicon.is_valid_guess(&word) {
            return Err(WordleError::InvalidGuess(word.to_string()));
        }
        let result = source.evaluate(word);
        self.history.push(result);
        self.restrictions.update(&result);
        self.narrow_possible_words();

        if result.is_correct() {
            info!(
                "Guessed `{}` in {} tries",
                result.guess,
                self.num_guesses()
            );
            self.state = GameState::Won;
        } else if let Some(max_guesses) = self.config.max_guesses {
            if self.num_guesses() >= max_guesses {
                info!("Out of guesses after {} tries", self.num_guesses());
                self.state = GameState::Lost;
            }
        }
        Ok(result)
    }

    /// Rules out every letter of the given word that is not already known to be present, then
    /// narrows the possible words.
    pub fn exclude_letters_of(&mut self, word: Word) {
        self.restrictions.exclude_letters_of(&word);
        self.narrow_possible_words();
    }

    /// Suggests the next guess, using the thread-local generator for
    /// [`SuggestionMethod::Random`].
    pub fn suggest(&self, method: SuggestionMethod) -> Result<Word> {
        self.suggest_with_rng(method, &mut rand::thread_rng())
    }

    /// Suggests the next guess. Only `rng` is modified.
    ///
    /// Fails with [`WordleError::EmptyCandidatePool`] if no word is still possible.
    pub fn suggest_with_rng<R: Rng + ?Sized>(
        &self,
        method: SuggestionMethod,
        rng: &mut R,
    ) -> Result<Word> {
        suggest(
            method,
            &self.possible_words,
            self.ranking.as_deref(),
            rng,
        )
    }

    /// Returns the `n` best-scoring possible words, best first.
    pub fn top_guesses(&self, n: usize) -> Vec<ScoredWord> {
        match &self.ranking {
            Some(ranking) => ranking.iter().take(n).cloned().collect(),
            None => rank_words(&self.possible_words)
                .into_iter()
                .take(n)
                .collect(),
        }
    }

    pub fn answer(&self) -> Word {
        self.answer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn num_guesses(&self) -> u32 {
        self.history.len() as u32
    }

    /// The words guessed so far, in order.
    pub fn guesses(&self) -> &[Word] {
        self.restrictions.guesses()
    }

    /// The result of each guess so far, in order.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// The words that are consistent with all feedback so far, in vocabulary order.
    pub fn possible_words(&self) -> &[Word] {
        &self.possible_words
    }

    pub fn restrictions(&self) -> &WordRestrictions {
        &self.restrictions
    }

    /// The current ranking of the possible words, unless this is a quick game.
    pub fn ranking(&self) -> Option<&[ScoredWord]> {
        self.ranking.as_deref()
    }

    /// The positional letter frequencies across the possible words.
    ///
    /// These are kept up to date after every guess, except in a quick game where they are
    /// computed on each call.
    pub fn frequencies(&self) -> Cow<'_, PositionalFrequencies> {
        match &self.frequencies {
            Some(frequencies) => Cow::Borrowed(frequencies),
            None => Cow::Owned(PositionalFrequencies::new(&self.possible_words)),
        }
    }

    fn narrow_possible_words(&mut self) {
        self.possible_words = filter_words(&self.possible_words, &self.restrictions);
        if self.possible_words.is_empty() {
            warn!("No possible words remain after {} guesses", self.num_guesses());
        } else {
            debug!("{} possible words remain", self.possible_words.len());
        }
        self.refresh_ranking();
    }

    fn refresh_ranking(&mut self) {
        if self.config.quick_game {
            self.ranking = None;
            self.frequencies = None;
            return;
        }
        let scorer = PositionalFrequencyScorer::new(&self.possible_words);
        self.ranking = Some(rank_words_by_frequency(&scorer, &self.possible_words));
        self.frequencies = Some(scorer.into_frequencies());
    }
}

/// Plays a game against the given answer, suggesting every guess with `method`.
///
/// Stops when the answer is found, the configured guess limit is hit, or no possible words remain.
/// The config's answer is replaced by `answer`.
pub fn play_game<R: Rng + ?Sized>(
    answer: Word,
    method: SuggestionMethod,
    lexicon: &Lexicon,
    config: GameConfig,
    rng: &mut R,
) -> Result<GameResult> {
    let config = GameConfig {
        answer: Some(answer),
        ..config
    };
    let mut game = Game::with_rng(lexicon, config, rng)?;
    while game.state() == GameState::InProgress {
        let guess = match game.suggest_with_rng(method, rng) {
            Ok(guess) => guess,
            Err(WordleError::EmptyCandidatePool) if !lexicon.is_solution(&answer) => {
                return Ok(GameResult::UnknownWord);
            }
            Err(e) => return Err(e),
        };
        game.guess(guess)?;
    }
    let guesses = game.guesses().to_vec();
    match game.state() {
        GameState::Won => Ok(GameResult::Success(guesses)),
        _ => Ok(GameResult::Failure(guesses)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn fixture_lexicon() -> Lexicon {
        Lexicon::from_solutions(
            WordBank::from_iterator(["train", "crane", "plane", "slate", "crate"]).unwrap(),
        )
    }

    fn config_with_answer(answer: &str) -> GameConfig {
        GameConfig {
            answer: Some(word(answer)),
            ..GameConfig::default()
        }
    }

    #[test]
    fn new_game_ranks_all_solutions() -> Result<()> {
        let lexicon = fixture_lexicon();
        let game = Game::new(&lexicon, config_with_answer("crane"))?;

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.possible_words(), lexicon.solution_words());
        assert_eq!(game.ranking().map(|ranking| ranking.len()), Some(5));
        Ok(())
    }

    #[test]
    fn frequencies_follow_possible_words() -> Result<()> {
        let lexicon = fixture_lexicon();
        let mut game = Game::new(&lexicon, config_with_answer("crane"))?;

        assert_matches!(game.frequencies(), Cow::Borrowed(f) if f.num_words() == 5);

        game.guess(word("plane"))?;

        let frequencies = game.frequencies();
        assert_matches!(frequencies, Cow::Borrowed(_));
        assert_eq!(frequencies.num_words(), 1);
        assert_eq!(frequencies.frequency(&LocatedLetter::new('c', 0)), 1.0);
        Ok(())
    }

    #[test]
    fn quick_game_computes_frequencies_on_demand() -> Result<()> {
        let lexicon = fixture_lexicon();
        let config = GameConfig {
            quick_game: true,
            ..config_with_answer("crane")
        };
        let game = Game::new(&lexicon, config)?;

        let frequencies = game.frequencies();
        assert_matches!(frequencies, Cow::Owned(_));
        assert_eq!(*frequencies, PositionalFrequencies::new(lexicon.solution_words()));
        Ok(())
    }

    #[test]
    fn new_game_picks_answer_from_solutions() -> Result<()> {
        let lexicon = fixture_lexicon();
        let mut rng = StdRng::seed_from_u64(3);

        let game = Game::with_rng(&lexicon, GameConfig::default(), &mut rng)?;

        assert!(lexicon.is_solution(&game.answer()));
        Ok(())
    }

    #[test]
    fn new_game_without_solutions_fails() {
        let lexicon = Lexicon::from_solutions(WordBank::default());

        assert_matches!(
            Game::new(&lexicon, GameConfig::default()),
            Err(WordleError::EmptyCandidatePool)
        );
    }

    #[test]
    fn quick_game_ranks_on_demand() -> Result<()> {
        let lexicon = fixture_lexicon();
        let config = GameConfig {
            quick_game: true,
            ..config_with_answer("crane")
        };
        let game = Game::new(&lexicon, config)?;

        assert!(game.ranking().is_none());
        // "crane" and "crate" tie; "crane" comes first in the word list.
        assert_eq!(game.top_guesses(1)[0].word, word("crane"));
        assert_eq!(game.suggest(SuggestionMethod::HighestFrequency)?, word("crane"));
        Ok(())
    }

    #[test]
    fn max_guesses_loses_game() -> Result<()> {
        let lexicon = fixture_lexicon();
        let config = GameConfig {
            max_guesses: Some(1),
            ..config_with_answer("crane")
        };
        let mut game = Game::new(&lexicon, config)?;

        game.guess(word("plane"))?;

        assert_eq!(game.state(), GameState::Lost);
        assert_matches!(game.guess(word("crane")), Err(WordleError::GameOver));
        Ok(())
    }

    #[test]
    fn play_game_unknown_word() -> Result<()> {
        let lexicon = fixture_lexicon();
        let mut rng = StdRng::seed_from_u64(3);

        let result = play_game(
            word("other"),
            SuggestionMethod::HighestFrequency,
            &lexicon,
            GameConfig::default(),
            &mut rng,
        )?;

        assert_eq!(result, GameResult::UnknownWord);
        Ok(())
    }
}
