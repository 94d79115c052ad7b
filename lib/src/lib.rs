//! Narrows down the answer to a Wordle-style puzzle.
//!
//! Every guess produces feedback for each letter. The feedback is accumulated into
//! [`WordRestrictions`](restrictions::WordRestrictions), which filter the words that are still
//! possible. The next guess can then be suggested by positional letter frequency, see
//! [`scorers`].
//!
//! ```
//! use rs_wordle_narrower::*;
//!
//! let lexicon = Lexicon::from_solutions(
//!     WordBank::from_iterator(["train", "crane", "plane", "slate", "crate"]).unwrap());
//! let config = GameConfig {
//!     answer: Some(Word::new("slate").unwrap()),
//!     ..GameConfig::default()
//! };
//! let mut game = Game::new(&lexicon, config).unwrap();
//!
//! game.guess(Word::new("plane").unwrap()).unwrap();
//! assert_eq!(game.possible_words(), &[Word::new("slate").unwrap()]);
//! ```

mod data;
mod engine;
pub mod restrictions;
mod results;
pub mod scorers;

pub use data::*;
pub use engine::*;
pub use results::*;
pub use scorers::SuggestionMethod;
