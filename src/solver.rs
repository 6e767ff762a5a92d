//! The backtracking solver for trigram puzzles.
//!
//! Given a pool of letter fragments and an ordered list of target shapes, the
//! solver assigns every fragment to exactly one target word so that each word,
//! read as its fragments laid end to end, is a dictionary word of that shape.
//! Every distinct solution is returned.
//!
//! Targets are filled from the last one to the first. For the current target the
//! solver asks the [`Dictionary`] for all words of that shape, asks
//! [`subsets_of_length`] for every group of unused fragments of the right total
//! length, and keeps each (group, word) pair where some ordering of the group
//! spells the word ([`can_spell`]). Each pair is then explored with its fragments removed from a
//! private copy of the pool, so sibling branches never see each other's choices.
//!
//! The search is exponential in the number of fragments. Callers that need
//! bounded latency can set [`SolveOptions::time_limit`] or
//! [`SolveOptions::max_solutions`]. The time limit is checked between fragment
//! groups as well as between branches, and solutions completed before it ran
//! out are always kept.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with four variants:
//!
//! - S001: `ParseFailure` (A target shape could not be parsed (wraps [`ParseError`]))
//! - S002: `DictionaryUnavailable` (The word list could not be read)
//! - S003: `NoTargets` (No target shapes were given)
//! - S004: `Bookkeeping` (Internal error while tracking used letters)
//!
//! Finding no solution is not an error: the solution list is simply empty.
//!
//! # Examples
//!
//! ```
//! use trigram::dictionary::Dictionary;
//! use trigram::parser::parse_targets;
//! use trigram::solver::{self, SolveOptions, SolveStatus};
//!
//! let dictionary = Dictionary::parse_from_str("it's\nclobbering\ntime");
//! let targets = parse_targets(&["2'1", "10", "4"])?;
//! let fragments = ["it's", "clo", "bbe", "rin", "g", "tim", "e"];
//!
//! let result = solver::solve_with_dictionary(&dictionary, &fragments, &targets, &SolveOptions::default())?;
//!
//! assert_eq!(result.status, SolveStatus::SearchExhausted);
//! assert_eq!(result.solutions, vec![vec!["it's", "clobbering", "time"]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::errors::{BagError, ParseError};
use crate::letter_bag::LetterBag;
use crate::parser::{parse_targets, TargetShape};
use crate::partition::{can_spell, subsets_of_length};
use instant::Instant;
use log::{debug, info, trace, warn};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every branch of the search was explored.
    SearchExhausted,

    /// Solver stopped early because the requested number of solutions was found.
    FoundEnough,

    /// Solver stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Knobs for a solver run. The default is an exhaustive, silent search.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Log any dead end that leaves fewer than this many letters unassigned
    /// (0 disables). Helps spot answers that need a word missing from the dictionary.
    pub diagnostic_threshold: usize,
    /// Stop searching once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
    /// Stop searching once this many solutions have been found.
    pub max_solutions: Option<usize>,
}

/// Successful solver run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solutions discovered, each one word per target in target order.
    pub solutions: Vec<Vec<String>>,
    /// Status indicating whether the search finished or stopped early.
    pub status: SolveStatus,
}

impl SolveResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl IntoIterator for SolveResult {
    type Item = Vec<String>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// A target shape could not be parsed. Raised before any search happens.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    /// The dictionary file could not be read. No partial dictionary is used.
    ///
    /// `source` already names the file; `path` is kept for callers.
    #[error("dictionary unavailable: {source}")]
    DictionaryUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// There was nothing to solve.
    #[error("no target shapes to solve")]
    NoTargets,

    /// The solver tried to remove letters it had not reserved.
    ///
    /// Fragments are only ever removed after being chosen from the pool, so this
    /// indicates a bug in the solver's bookkeeping.
    #[error("bookkeeping error: {context}: {source}")]
    Bookkeeping {
        context: String,
        #[source]
        source: BagError,
    },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
            SolverError::DictionaryUnavailable { .. } => "S002",
            SolverError::NoTargets => "S003",
            SolverError::Bookkeeping { .. } => "S004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Target shape parsing failed",
            SolverError::DictionaryUnavailable { .. } => "Dictionary could not be read",
            SolverError::NoTargets => "No target shapes given",
            SolverError::Bookkeeping { .. } => "Internal error while tracking used letters",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "One of the word lengths could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            SolverError::DictionaryUnavailable { .. } => "The word list file does not exist or cannot be read as UTF-8 text. The solver never runs against a partial dictionary.",
            SolverError::NoTargets => "The word-length list was empty, so there are no words to fill.",
            SolverError::Bookkeeping { .. } => "The solver removed letters from its pool that it had not reserved. This is a bug in the solver logic.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::DictionaryUnavailable { .. } => Some("Check the dictionary path, e.g. '--dictionary /usr/share/dict/words'"),
            SolverError::NoTargets => Some("Give at least one word length. Example: '--word-lengths 2'1,10,4'"),
            SolverError::Bookkeeping { .. } => Some("This is an internal error. Please report the fragments and word lengths that triggered it."),
            SolverError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Render a solution as its words separated by spaces.
#[must_use]
pub fn solution_to_string(solution: &[String]) -> String {
    solution.join(" ")
}

/// Simple helper to enforce an optional wall-clock time limit.
///
/// A budget without a limit never expires.
struct TimeBudget {
    start: Instant,           // when the budget began
    limit: Option<Duration>,  // maximum allowed elapsed time
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    /// How long this budget has been running.
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns true if there is a limit and it has fully elapsed.
    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

macro_rules! timed_stop {
    ($budget:expr) => {
        if $budget.expired() {
            return Ok(());
        }
    };
}

/// Context shared by every level of the search
struct SearchCtx<'a> {
    dictionary: &'a Dictionary,
    options: &'a SolveOptions,
    budget: &'a TimeBudget,
}

impl SearchCtx<'_> {
    fn found_enough(&self, results: &[Vec<String>]) -> bool {
        self.options.max_solutions.is_some_and(|max| results.len() >= max)
    }
}

/// One way to fill the current target: which fragments, which word.
struct WordMatch {
    /// Indices into the current pool
    subset: Vec<usize>,
    /// Letters of the chosen fragments
    bag: LetterBag,
    /// Lowercase dictionary word spelled by the fragments
    word: String,
}

/// Every (fragment subset, dictionary word) pair that can fill a target of
/// `required_length` characters, in pool order then dictionary order.
///
/// If `budget` runs out, the matches found so far are returned.
fn find_matches(
    pool: &[LetterBag],
    required_length: usize,
    candidates: &[DictionaryEntry],
    budget: &TimeBudget,
) -> Result<Vec<WordMatch>, SolverError> {
    let mut matches = Vec::new();

    for subset in subsets_of_length(pool, required_length) {
        let fragments: Vec<&LetterBag> = subset.iter().map(|&i| &pool[i]).collect();
        let bag = LetterBag::sum(fragments.iter().copied()).map_err(|source| SolverError::Bookkeeping {
            context: format!("combining fragment subset {subset:?}"),
            source,
        })?;

        // Cheap anagram check before walking the word
        let mut matched: HashSet<&str> = HashSet::new();
        for entry in candidates.iter().filter(|entry| entry.bag == bag) {
            let word = entry.word_lower();
            // duplicate dictionary lines must not produce duplicate branches
            if !matched.contains(word) && can_spell(word, &fragments) {
                matched.insert(word);
                matches.push(WordMatch { subset: subset.clone(), bag: bag.clone(), word: word.to_string() });
            }
        }

        if budget.expired() {
            debug!("Out of time after {} matches for {required_length} letters", matches.len());
            break;
        }
    }

    Ok(matches)
}

/// Describe a dead end that left fewer than `threshold` letters unassigned.
///
/// `selected` is last target first; the report lists the words in target order.
/// A threshold of 0 never reports.
fn dead_end_report(
    threshold: usize,
    selected: &[String],
    pool: &[LetterBag],
    remaining: &LetterBag,
    reason: &str,
) -> Option<String> {
    if threshold == 0 || remaining.len() >= threshold {
        return None;
    }
    let partial: Vec<&str> = selected.iter().rev().map(String::as_str).collect();
    let fragments: Vec<&str> = pool.iter().map(LetterBag::underlying_lower).collect();
    Some(format!(
        "Partial solution {partial:?} ({reason}); {} letters unassigned in fragments {fragments:?}",
        remaining.len()
    ))
}

/// Log a dead end if few enough letters are left over to make it interesting.
fn report_dead_end(ctx: &SearchCtx, selected: &[String], pool: &[LetterBag], remaining: &LetterBag, reason: &str) {
    if let Some(report) = dead_end_report(ctx.options.diagnostic_threshold, selected, pool, remaining, reason) {
        info!("{report}");
    }
}

/// Depth-first search over target shapes, last target first.
///
/// Parameters:
/// - `pool`: fragments not yet assigned; owned by this branch.
/// - `remaining`: the letters of `pool`, as one bag.
/// - `targets`: targets not yet filled; the last one is filled next.
/// - `selected`: words chosen so far, last target first.
/// - `results`: completed solutions, in target order.
/// - `seen`: completed solutions already in `results`.
fn search(
    pool: &[LetterBag],
    remaining: &LetterBag,
    targets: &[TargetShape],
    selected: &mut Vec<String>,
    results: &mut Vec<Vec<String>>,
    seen: &mut HashSet<Vec<String>>,
    ctx: &SearchCtx,
) -> Result<(), SolverError> {
    debug_assert_eq!(
        remaining.len(),
        pool.iter().map(LetterBag::len).sum::<usize>(),
        "remaining letters must match the pool"
    );

    if ctx.found_enough(results) {
        return Ok(());
    }

    let Some((target, earlier_targets)) = targets.split_last() else {
        // Base case: every target has a word. It only counts if every fragment was used.
        if pool.is_empty() {
            let solution: Vec<String> = selected.iter().rev().cloned().collect();
            if seen.insert(solution.clone()) {
                results.push(solution);
            }
        } else {
            report_dead_end(ctx, selected, pool, remaining, "fragments left over");
        }
        return Ok(());
    };

    // A finished solution is recorded above even when time is up
    timed_stop!(ctx.budget);

    if pool.is_empty() {
        report_dead_end(ctx, selected, pool, remaining, "out of fragments");
        return Ok(());
    }

    let candidates = ctx.dictionary.candidates_for(target.key());
    if candidates.is_empty() {
        trace!("No dictionary word has shape '{target}'");
        report_dead_end(ctx, selected, pool, remaining, "no word of this shape");
        return Ok(());
    }

    let required_length = target.required_length();
    if remaining.len() < required_length {
        report_dead_end(ctx, selected, pool, remaining, "too few letters left");
        return Ok(());
    }

    let matches = find_matches(pool, required_length, candidates, ctx.budget)?;
    if matches.is_empty() {
        trace!("No fragments spell a '{target}' word from {} fragments", pool.len());
        report_dead_end(ctx, selected, pool, remaining, "no fragments spell a word of this shape");
        return Ok(());
    }

    for word_match in matches {
        if ctx.found_enough(results) {
            break;
        }

        let next_remaining = remaining.subtract(&word_match.bag).map_err(|source| SolverError::Bookkeeping {
            context: format!("removing '{}' for target '{target}'", word_match.word),
            source,
        })?;
        let next_pool: Vec<LetterBag> = pool
            .iter()
            .enumerate()
            .filter(|(i, _)| !word_match.subset.contains(i))
            .map(|(_, fragment)| fragment.clone())
            .collect();

        selected.push(word_match.word);
        search(&next_pool, &next_remaining, earlier_targets, selected, results, seen, ctx)?;
        selected.pop();
    }

    Ok(())
}

/// True if `solution` has one word per target and each word has its target's length.
fn fits_targets(solution: &[String], targets: &[TargetShape]) -> bool {
    solution.len() == targets.len()
        && solution
            .iter()
            .zip(targets)
            .all(|(word, target)| word.chars().count() == target.required_length())
}

/// Solve a puzzle against an already-loaded dictionary.
///
/// # Arguments
/// - `dictionary`: word list indexed by shape.
/// - `fragments`: the letter fragments; every one must be used exactly once.
/// - `targets`: the shapes of the answer words, in answer order.
/// - `options`: diagnostics and optional limits.
///
/// # Returns
/// Every distinct solution (one lowercase word per target, in target order) and
/// the [`SolveStatus`]. Solutions come out in a deterministic order, driven by
/// fragment order and dictionary order.
///
/// # Errors
/// Returns [`SolverError::NoTargets`] if `targets` is empty, or
/// [`SolverError::Bookkeeping`] on an internal error.
pub fn solve_with_dictionary<S: AsRef<str>>(
    dictionary: &Dictionary,
    fragments: &[S],
    targets: &[TargetShape],
    options: &SolveOptions,
) -> Result<SolveResult, SolverError> {
    if targets.is_empty() {
        return Err(SolverError::NoTargets);
    }

    let pool: Vec<LetterBag> = fragments.iter().map(|f| LetterBag::new(f.as_ref())).collect();
    // only an empty pool has no sum
    let all_letters = LetterBag::sum(&pool).unwrap_or_default();
    let budget = TimeBudget::new(options.time_limit);

    debug!(
        "Solving {} targets with {} fragments ({} letters) against {} dictionary entries",
        targets.len(),
        pool.len(),
        all_letters.len(),
        dictionary.len()
    );

    let mut results: Vec<Vec<String>> = Vec::new();

    // Every word has exactly its required length and every letter is used, so
    // the totals must agree for any solution to exist.
    let letters_needed: usize = targets.iter().map(TargetShape::required_length).sum();
    if letters_needed == all_letters.len() {
        let ctx = SearchCtx { dictionary, options, budget: &budget };
        let mut selected: Vec<String> = Vec::with_capacity(targets.len());
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        search(&pool, &all_letters, targets, &mut selected, &mut results, &mut seen, &ctx)?;
    } else {
        debug!(
            "Targets need {letters_needed} letters but fragments hold {}; no solution possible",
            all_letters.len()
        );
    }

    let found = results.len();
    results.retain(|solution| fits_targets(solution, targets));
    if results.len() != found {
        warn!("Dropped {} malformed solutions", found - results.len());
    }

    let status = if budget.expired() {
        SolveStatus::TimedOut { elapsed: budget.elapsed() }
    } else if options.max_solutions.is_some_and(|max| results.len() >= max) {
        SolveStatus::FoundEnough
    } else {
        SolveStatus::SearchExhausted
    };

    debug!("Found {} solutions in {:.3}s ({status:?})", results.len(), budget.elapsed().as_secs_f64());

    Ok(SolveResult { solutions: results, status })
}

/// Load the dictionary at `dictionary_path` and return every solution.
///
/// `targets` are shape strings such as `"2'1"` or `"10"`; they are validated
/// before the dictionary is read.
///
/// # Errors
/// Returns a [`SolverError`] if:
/// - a target shape cannot be parsed (`ParseFailure`),
/// - the dictionary cannot be read (`DictionaryUnavailable`),
/// - there are no targets (`NoTargets`).
pub fn solve<P, S, T>(dictionary_path: P, fragments: &[S], targets: &[T]) -> Result<Vec<Vec<String>>, SolverError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let targets = parse_targets(targets)?;

    let path = dictionary_path.as_ref();
    let dictionary = Dictionary::load_from_path(path).map_err(|source| SolverError::DictionaryUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    let result = solve_with_dictionary(&dictionary, fragments, &targets, &SolveOptions::default())?;
    Ok(result.solutions)
}
