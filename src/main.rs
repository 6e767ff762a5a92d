use std::process::ExitCode;
use std::time::Duration;
use clap::Parser;
use instant::Instant;

use trigram::dictionary::Dictionary;
use trigram::parser;
use trigram::solver::{self, SolveOptions, SolveStatus};

/// A solver for trigram puzzles: fragments of letters that must be reassembled
/// into words of given lengths.
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The letter fragments (typically in triples), separated by the delimiter. Ex: abc,def,ghi
    #[arg(short, long)]
    letter_list: String,

    /// The word lengths, separated by the delimiter. Punctuation inside a word is kept.
    /// Ex: "2'1,10,4" for "it's clobbering time"
    #[arg(short, long)]
    word_lengths: String,

    /// The delimiter between fragments and between word lengths
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Path to the dictionary file (one word per line)
    #[arg(short = 'D', long, default_value = "/usr/share/dict/words")]
    dictionary: String,

    /// Log any failed partial solution with fewer than N letters remaining
    /// (to spot answers that need a word missing from the dictionary)
    #[arg(short = 'p', long, default_value_t = 10)]
    print_if_less_than: usize,

    /// Give up after this many seconds
    #[arg(short, long)]
    time_limit: Option<u64>,

    /// Stop after finding this many solutions (at least 1)
    #[arg(short = 'n', long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    max_solutions: Option<usize>,
}

/// Entry point of the trigram CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("TRIGRAM_DEBUG").is_ok();
    trigram::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else if let Some(parse_err) = e.downcast_ref::<trigram::errors::ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the trigram CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Split and clean the letter list and word lengths.
/// 3. Load the dictionary from disk.
/// 4. Solve, printing each solution on stdout.
/// 5. Print status and timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    log::info!("Running with delimiter '{}'", cli.delimiter);
    log::info!("Running with dictionary '{}'", cli.dictionary);

    let fragments = parser::split_letter_list(&cli.letter_list, &cli.delimiter).map_err(|e| *e)?;
    log::info!("Running with letter list {fragments:?}");
    let word_lengths = parser::split_word_lengths(&cli.word_lengths, &cli.delimiter).map_err(|e| *e)?;
    log::info!("Running with word lengths {word_lengths:?}");

    // Validate the shapes before paying for the dictionary load
    let targets = parser::parse_targets(&word_lengths).map_err(solver::SolverError::from)?;

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary).map_err(|source| {
        solver::SolverError::DictionaryUnavailable { path: cli.dictionary.clone(), source }
    })?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let options = SolveOptions {
        diagnostic_threshold: cli.print_if_less_than,
        time_limit: cli.time_limit.map(Duration::from_secs),
        max_solutions: cli.max_solutions,
    };

    let t_solve = Instant::now();
    let result = solver::solve_with_dictionary(&dictionary, &fragments, &targets, &options)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for solution in &result.solutions {
        println!("{}", solver::solution_to_string(solution));
    }

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!("⚠️  Timed out after {:.1}s; some solutions may not have been returned", elapsed.as_secs_f64());
        }
        SolveStatus::FoundEnough => {
            eprintln!("✓ Stopped after finding {} solutions", result.solutions.len());
        }
        SolveStatus::SearchExhausted => {
            eprintln!("✓ Search exhausted");
        }
    }

    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s ({} solutions).",
        dictionary.len(),
        load_secs,
        solve_secs,
        result.solutions.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        let args = ["trigram", "--letter-list", "tim,e", "--word-lengths", "4"];
        Cli::try_parse_from(args.iter().chain(extra).copied())
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(",", cli.delimiter);
        assert_eq!("/usr/share/dict/words", cli.dictionary);
        assert_eq!(10, cli.print_if_less_than);
        assert_eq!(None, cli.max_solutions);
    }

    #[test]
    fn test_max_solutions_must_be_positive() {
        assert!(parse(&["-n", "0"]).is_err());
        assert_eq!(Some(2), parse(&["-n", "2"]).unwrap().max_solutions);
    }
}
