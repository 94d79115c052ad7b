#![cfg(feature = "serde")]

#[macro_use]
extern crate assert_matches;

use rs_wordle_narrower::*;

#[test]
fn word_serializes_as_string() {
    let word = Word::new("crane").unwrap();

    assert_eq!(ron::to_string(&word).unwrap(), "\"crane\"");
    assert_matches!(ron::from_str::<Word>("\"crane\""), Ok(w) if w == word);
    assert_matches!(ron::from_str::<Word>("\"cranes\""), Err(_));
}

#[test]
fn game_config_serde() {
    let config = GameConfig {
        answer: Some(Word::new("slate").unwrap()),
        quick_game: true,
        print_enabled: false,
        max_guesses: Some(6),
        pool_source: PoolSource::Guesses,
    };

    let ser = ron::to_string(&config);
    assert_matches!(ser, Ok(_));

    let deser = ron::from_str::<GameConfig>(&ser.unwrap());
    assert_matches!(deser, Ok(c) if c == config);
}

#[test]
fn game_result_serde() {
    let lexicon = Lexicon::from_solutions(
        WordBank::from_iterator(["train", "crane", "plane", "slate", "crate"]).unwrap(),
    );
    let mut game = Game::new(
        &lexicon,
        GameConfig {
            answer: Some(Word::new("crane").unwrap()),
            ..GameConfig::default()
        },
    )
    .unwrap();
    let result = game.guess(Word::new("plane").unwrap()).unwrap();

    let deser = ron::from_str::<GuessResult>(&ron::to_string(&result).unwrap());
    assert_matches!(deser, Ok(r) if r == result);

    let game_result = GameResult::Success(game.guesses().to_vec());
    let deser = ron::from_str::<GameResult>(&ron::to_string(&game_result).unwrap());
    assert_matches!(deser, Ok(r) if r == game_result);
}
