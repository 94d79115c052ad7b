mod experiment;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use experiment::ExperimentConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_narrower::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Plays Wordle by narrowing the possible words after every guess.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file with the words that can be the answer, one word per line.
    #[arg(short, long)]
    solutions: PathBuf,

    /// Path to a file with additional words that are accepted as guesses, one word per line.
    #[arg(short, long)]
    guesses: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Let the solver play against a known answer.
    Play {
        /// The word to guess. A random solution is chosen if not given.
        #[arg(short, long)]
        answer: Option<Word>,

        /// How to pick each guess: `random` or `highest_frequency`.
        #[arg(short, long, default_value_t = SuggestionMethod::HighestFrequency)]
        method: SuggestionMethod,

        /// Give up after this many guesses.
        #[arg(long)]
        max_guesses: Option<u32>,

        /// Only print the final board.
        #[arg(short, long)]
        quiet: bool,

        /// Draw the possible words from every acceptable guess rather than only the solutions.
        #[arg(long)]
        from_guesses: bool,

        /// Seed for the random answer and random suggestions.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Get suggestions for a game you are playing elsewhere.
    Assist {
        /// How to pick each suggestion: `random` or `highest_frequency`.
        #[arg(short, long, default_value_t = SuggestionMethod::HighestFrequency)]
        method: SuggestionMethod,
    },
    /// Play every solution word and report how many guesses were needed.
    Experiment {
        /// Number of games to play for each solution word.
        #[arg(short = 'n', long, default_value_t = 1)]
        trials: usize,

        /// How to pick each guess: `random` or `highest_frequency`.
        #[arg(short, long, default_value_t = SuggestionMethod::HighestFrequency)]
        method: SuggestionMethod,

        /// Only play the first `limit` solution words.
        #[arg(long)]
        limit: Option<usize>,

        /// Seed for random suggestions.
        #[arg(long)]
        seed: Option<u64>,

        /// Directory where results are saved.
        #[arg(short, long, default_value = "data")]
        output: PathBuf,

        /// Re-run the experiment even if saved results exist.
        #[arg(long)]
        overwrite: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let start_time = Instant::now();
    let args = Args::parse();

    let lexicon = load_lexicon(&args.solutions, args.guesses.as_deref())?;
    println!(
        "There are {} solutions and {} acceptable guesses.",
        lexicon.solution_words().len(),
        lexicon.guess_words().len()
    );

    match args.command {
        Command::Play {
            answer,
            method,
            max_guesses,
            quiet,
            from_guesses,
            seed,
        } => {
            let config = GameConfig {
                answer,
                quick_game: method == SuggestionMethod::Random,
                print_enabled: !quiet,
                max_guesses,
                pool_source: if from_guesses {
                    PoolSource::Guesses
                } else {
                    PoolSource::Solutions
                },
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            play(&lexicon, config, method, &mut rng)?;
        }
        Command::Assist { method } => assist(&lexicon, method)?,
        Command::Experiment {
            trials,
            method,
            limit,
            seed,
            output,
            overwrite,
        } => {
            let config = ExperimentConfig {
                method,
                trials,
                limit,
                seed,
                output_dir: output,
                overwrite,
            };
            let results = experiment::load_or_run(&lexicon, &config)?;
            experiment::print_distribution(&results);
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_lexicon(solutions: &Path, guesses: Option<&Path>) -> Result<Lexicon> {
    let solutions = load_word_bank(solutions)?;
    let guesses = match guesses {
        Some(path) => load_word_bank(path)?,
        None => WordBank::default(),
    };
    Ok(Lexicon::new(solutions, guesses))
}

fn load_word_bank(path: &Path) -> Result<WordBank> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    WordBank::from_reader(BufReader::new(file))
        .with_context(|| format!("reading words from {}", path.display()))
}

fn play(
    lexicon: &Lexicon,
    config: GameConfig,
    method: SuggestionMethod,
    rng: &mut StdRng,
) -> Result<()> {
    let mut game = Game::with_rng(lexicon, config, rng)?;
    while game.state() == GameState::InProgress {
        let guess = match game.suggest_with_rng(method, rng) {
            Ok(guess) => guess,
            Err(WordleError::EmptyCandidatePool) => {
                println!(
                    "No possible words are left. Is `{}` in the solutions list?",
                    game.answer()
                );
                break;
            }
            Err(e) => return Err(e.into()),
        };
        let result = game.guess(guess)?;
        if game.config().print_enabled {
            render::print_guess(&result);
        }
    }

    render::print_board(game.history());
    match game.state() {
        GameState::Won => println!("Solved it! It took me {} guesses.", game.num_guesses()),
        _ => println!(
            "I still couldn't solve it after {} guesses :( The answer was `{}`.",
            game.num_guesses(),
            game.answer()
        ),
    }
    Ok(())
}

fn assist(lexicon: &Lexicon, method: SuggestionMethod) -> Result<()> {
    let config = GameConfig {
        quick_game: method == SuggestionMethod::Random,
        print_enabled: true,
        ..GameConfig::default()
    };
    let mut game = Game::new(lexicon, config)?;

    println!(
        "I will suggest a word for each round. Type the word you played, or press enter to play \
         my suggestion. Then enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if the word was \"spade\" and you played \"soapy\", you would enter \"g.gy.\""
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.state() == GameState::InProgress {
        let suggestion = match game.suggest(method) {
            Ok(suggestion) => suggestion,
            Err(WordleError::EmptyCandidatePool) => {
                println!("No words match that feedback. Was a color entered incorrectly?");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        println!(
            "\n{} words are possible. I suggest: {}",
            game.possible_words().len(),
            suggestion
        );

        let guess = read_guess(&mut lines, lexicon, suggestion)?;
        let feedback = read_feedback(&mut lines)?;
        let result = game.guess_with_feedback(guess, feedback)?;
        render::print_guess(&result);
    }

    println!("Solved it! It took {} guesses.", game.num_guesses());
    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => bail!("input closed before the game finished"),
    }
}

fn read_guess<B: BufRead>(
    lines: &mut io::Lines<B>,
    lexicon: &Lexicon,
    suggestion: Word,
) -> Result<Word> {
    loop {
        let input = prompt(lines, "Word played: ")?;
        if input.is_empty() {
            return Ok(suggestion);
        }
        match Word::new(&input) {
            Ok(word) if lexicon.is_valid_guess(&word) => return Ok(word),
            Ok(word) => println!("`{}` is not in the word list. Try again.", word),
            Err(e) => println!("{}. Try again.", e),
        }
    }
}

fn read_feedback<B: BufRead>(lines: &mut io::Lines<B>) -> Result<[LetterResult; WORD_LENGTH]> {
    loop {
        let input = prompt(lines, "Colors: ")?;
        match parse_feedback(&input) {
            Ok(feedback) => return Ok(feedback),
            Err(e) => println!("{}. Try again.", e),
        }
    }
}
