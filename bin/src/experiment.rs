use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rs_wordle_narrower::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for running many games against every solution word.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub method: SuggestionMethod,
    /// Number of games played per solution word.
    pub trials: usize,
    /// Only play against the first `limit` solution words.
    pub limit: Option<usize>,
    /// Makes the random suggestions repeatable.
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    /// Re-run the experiment even if results were saved before.
    pub overwrite: bool,
}

/// The number of guesses each game took, per answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResults {
    pub method: SuggestionMethod,
    pub trials: usize,
    pub guesses_per_answer: BTreeMap<Word, Vec<u32>>,
}

impl ExperimentConfig {
    fn results_path(&self) -> PathBuf {
        let mut file_name = format!("{}_method_n{}", self.method, self.trials);
        if let Some(limit) = self.limit {
            file_name.push_str(&format!("_limit{}", limit));
        }
        file_name.push_str(".ron");
        self.output_dir.join(file_name)
    }
}

/// Loads previously saved results for this config, or runs the experiment and saves them.
pub fn load_or_run(lexicon: &Lexicon, config: &ExperimentConfig) -> Result<ExperimentResults> {
    let path = config.results_path();
    if !config.overwrite && path.exists() {
        info!("Loading saved results from {}", path.display());
        return load_results(&path);
    }
    let results = run_experiment(lexicon, config)?;
    save_results(&path, &results)?;
    println!("Saved results to {}", path.display());
    Ok(results)
}

/// Plays `config.trials` games against each solution word, in parallel across answers.
pub fn run_experiment(lexicon: &Lexicon, config: &ExperimentConfig) -> Result<ExperimentResults> {
    let answers: Vec<Word> = lexicon
        .solution_words()
        .iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .copied()
        .collect();
    println!(
        "Playing {} games for each of {} words with the `{}` method.",
        config.trials,
        answers.len(),
        config.method
    );

    let progress = ProgressBar::new(answers.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed_precise}",
        )?
        .progress_chars("#>-"),
    );

    let game_config = GameConfig {
        quick_game: config.method == SuggestionMethod::Random,
        ..GameConfig::default()
    };
    let guesses_per_answer = answers
        .par_iter()
        .enumerate()
        .map(|(index, answer)| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_entropy(),
            };
            let mut num_guesses = Vec::with_capacity(config.trials);
            for _ in 0..config.trials {
                let result = play_game(
                    *answer,
                    config.method,
                    lexicon,
                    game_config.clone(),
                    &mut rng,
                )
                .with_context(|| format!("playing against `{}`", answer))?;
                match result {
                    GameResult::Success(guesses) => num_guesses.push(guesses.len() as u32),
                    other => bail!("could not solve `{}`: {:?}", answer, other),
                }
            }
            progress.inc(1);
            Ok((*answer, num_guesses))
        })
        .collect::<Result<BTreeMap<Word, Vec<u32>>>>()?;
    progress.finish_and_clear();

    Ok(ExperimentResults {
        method: config.method,
        trials: config.trials,
        guesses_per_answer,
    })
}

fn load_results(path: &Path) -> Result<ExperimentResults> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn save_results(path: &Path, results: &ExperimentResults) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = ron::ser::to_string_pretty(results, ron::ser::PrettyConfig::default())?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Prints how many games needed each number of guesses, plus the mean and standard deviation.
pub fn print_distribution(results: &ExperimentResults) {
    let num_guesses_per_game: Vec<u32> = results
        .guesses_per_answer
        .values()
        .flatten()
        .copied()
        .collect();
    if num_guesses_per_game.is_empty() {
        println!("No games were played.");
        return;
    }

    let mut num_games_per_round: BTreeMap<u32, u32> = BTreeMap::new();
    for num_guesses in &num_guesses_per_game {
        *num_games_per_round.entry(*num_guesses).or_insert(0) += 1;
    }

    println!(
        "Played {} games with the `{}` method. Results:",
        num_guesses_per_game.len(),
        results.method
    );
    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_guesses, num_games) in &num_games_per_round {
        println!("|{}|{}|", num_guesses, num_games);
    }

    let (average, std_dev) = mean_and_std_dev(&num_guesses_per_game);
    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
}

fn mean_and_std_dev(values: &[u32]) -> (f64, f64) {
    let count = values.len() as f64;
    let average = values.iter().map(|value| *value as f64).sum::<f64>() / count;
    let std_dev = (values
        .iter()
        .map(|value| (*value as f64 - average).powi(2))
        .sum::<f64>()
        / count)
        .sqrt();
    (average, std_dev)
}
