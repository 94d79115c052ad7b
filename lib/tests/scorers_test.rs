use rs_wordle_narrower::scorers::*;
use rs_wordle_narrower::*;

const FIXTURE_WORDS: [&str; 5] = ["train", "crane", "plane", "slate", "crate"];

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|text| Word::new(text).unwrap()).collect()
}

fn ranked_words(ranking: &[ScoredWord]) -> Vec<Word> {
    ranking.iter().map(|scored| scored.word).collect()
}

#[test]
fn rank_words_fixture() {
    let ranking = rank_words(&words(&FIXTURE_WORDS));

    // Scores: train 2.2, crane 3.2, plane 2.8, slate 2.8, crate 3.2.
    assert_eq!(
        ranked_words(&ranking),
        words(&["crane", "crate", "plane", "slate", "train"])
    );
    assert!((ranking[0].score - 3.2).abs() < 1e-9);
    assert!((ranking[4].score - 2.2).abs() < 1e-9);
    assert_eq!(ranking[0].letter_frequencies[2], 1.0);
}

#[test]
fn rank_words_is_deterministic() {
    let pool = words(&[
        "train", "crane", "plane", "slate", "crate", "stare", "trace", "react",
    ]);

    let first = ranked_words(&rank_words(&pool));
    for _ in 0..10 {
        assert_eq!(ranked_words(&rank_words(&pool)), first);
    }
}

#[test]
fn rank_words_tie_break_follows_input_order() {
    let forward = ranked_words(&rank_words(&words(&["crane", "crate"])));
    let backward = ranked_words(&rank_words(&words(&["crate", "crane"])));

    assert_eq!(forward, words(&["crane", "crate"]));
    assert_eq!(backward, words(&["crate", "crane"]));
}

#[test]
fn rank_words_tie_break_uses_exact_scores() {
    // `abcxv` and `defzw` both have positional counts summing to 6, but their frequencies
    // (1/3 + 1/3 + 1/3 + 2/3 + 1/3 vs 1/3 + 1/3 + 1/3 + 1/3 + 2/3) round differently as floats.
    let pool = words(&["abcxv", "defzw", "ghixw"]);

    let ranking = rank_words(&pool);

    assert_eq!(
        ranked_words(&ranking),
        words(&["ghixw", "abcxv", "defzw"])
    );
    assert_eq!(ranking[1].score, ranking[2].score);
    assert_eq!(
        ranked_words(&rank_words(&words(&["defzw", "abcxv", "ghixw"]))),
        words(&["ghixw", "defzw", "abcxv"])
    );
}

#[test]
fn rank_words_with_keeps_exact_ties_in_input_order() {
    let pool = words(&["abcxv", "defzw", "ghixw"]);
    let scorer = PositionalFrequencyScorer::new(&pool);

    assert_eq!(
        rank_words_with(&scorer, &pool),
        vec![(pool[2], 7), (pool[0], 6), (pool[1], 6)]
    );
}

#[test]
fn scorer_update_tracks_new_pool() {
    let mut scorer = PositionalFrequencyScorer::new(&words(&FIXTURE_WORDS));
    let crane = Word::new("crane").unwrap();
    let before = scorer.score_word(&crane);

    scorer.update(&words(&["crane"]));

    assert_eq!(before, 16);
    assert_eq!(scorer.score_word(&crane), 5);
    assert_eq!(scorer.frequencies().num_words(), 1);
}

#[test]
fn game_top_guesses_follow_ranking() -> Result<()> {
    let lexicon = Lexicon::from_solutions(WordBank::from_iterator(FIXTURE_WORDS)?);
    let game = Game::new(&lexicon, GameConfig::default())?;

    let top = game.top_guesses(2);

    assert_eq!(ranked_words(&top), words(&["crane", "crate"]));
    assert_eq!(
        game.suggest(SuggestionMethod::HighestFrequency)?,
        top[0].word
    );
    Ok(())
}
