#[macro_use]
extern crate assert_matches;

use rs_wordle_narrower::*;

use std::io::Cursor;

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|text| Word::new(text).unwrap()).collect()
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<()> {
    let cursor = Cursor::new(String::from("\n\ncrane\n Slate\n"));

    let word_bank = WordBank::from_reader(cursor)?;

    assert_eq!(word_bank.len(), 2);
    assert_eq!(&*word_bank, &words(&["crane", "slate"])[..]);
    Ok(())
}

#[test]
fn word_bank_from_string_iterator_succeeds() -> Result<()> {
    let word_bank = WordBank::from_iterator(vec![
        "".to_string(),
        "crane".to_string(),
        "Slate ".to_string(),
    ])?;

    assert_eq!(&*word_bank, &words(&["crane", "slate"])[..]);
    Ok(())
}

#[test]
fn word_bank_from_reader_mismatched_word_length_fails() {
    let cursor = Cursor::new(String::from("\nlongword\n   short\n"));

    assert_matches!(
        WordBank::from_reader(cursor),
        Err(WordleError::WordLength(8))
    );
}

#[test]
fn lexicon_from_readers_unions_vocabularies() -> Result<()> {
    let solutions = Cursor::new("crane\nslate\n");
    let guesses = Cursor::new("adieu\nroate\n");

    let lexicon = Lexicon::from_readers(solutions, guesses)?;

    assert_eq!(lexicon.solution_words(), &words(&["crane", "slate"])[..]);
    assert_eq!(
        lexicon.guess_words(),
        &words(&["crane", "slate", "adieu", "roate"])[..]
    );
    for solution in lexicon.solution_words() {
        assert!(lexicon.is_valid_guess(solution));
    }
    Ok(())
}

#[test]
fn word_parse_and_display() -> Result<()> {
    let word: Word = "PLANE".parse()?;

    assert_eq!(word.to_string(), "plane");
    assert_eq!(word.as_str(), "plane");
    assert_eq!(word.chars().collect::<String>(), "plane");
    Ok(())
}
