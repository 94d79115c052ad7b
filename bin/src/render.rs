use colored::ColoredString;
use colored::Colorize;
use rs_wordle_narrower::GuessResult;
use rs_wordle_narrower::LetterResult;

fn tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Correct => text.black().on_green().bold(),
        LetterResult::PresentNotHere => text.black().on_yellow().bold(),
        LetterResult::NotPresent => text.normal(),
    }
}

/// Formats a guess as a row of colored letter tiles.
pub fn format_guess(result: &GuessResult) -> String {
    result
        .letters()
        .map(|(letter, letter_result)| tile(letter, letter_result).to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn print_guess(result: &GuessResult) {
    println!("{}", format_guess(result));
}

/// Prints every guess of a game, one row per guess.
pub fn print_board(history: &[GuessResult]) {
    let border = "-".repeat(21);
    println!("{}", border.dimmed());
    for result in history {
        println!("|{}|", format_guess(result));
    }
    println!("{}", border.dimmed());
}
