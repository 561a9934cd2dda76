//! Self-play - the engine against itself
//!
//! Plays games from every opening letter and tallies which side ends up completing a word.

use crate::core::Decision;
use crate::solver::{GhostEngine, RngTieBreaker, SelectionError, TieBreaker};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a self-play run
pub struct SelfPlayConfig {
    pub games_per_opening: usize,
    /// Seed for reproducible runs; each game derives its own generator from it
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SelfPlayConfig {
    #[must_use]
    pub const fn new(games_per_opening: usize) -> Self {
        Self {
            games_per_opening,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result from a single self-play game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub opening: char,
    /// The completed word that ended the game
    pub word: String,
}

impl GameRecord {
    /// The opening player plays the odd-numbered letters, so odd words are theirs
    #[must_use]
    pub fn opener_lost(&self) -> bool {
        self.word.chars().count() % 2 == 1
    }
}

/// Tally for one opening letter
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpeningTally {
    pub games: usize,
    pub opener_losses: usize,
}

/// Statistics from a self-play run
#[derive(Debug)]
pub struct SelfPlayStatistics {
    pub total_games: usize,
    pub opener_losses: usize,
    pub by_opening: FxHashMap<char, OpeningTally>,
    /// Openings in trie order
    pub openings: Vec<char>,
    pub average_length: f64,
    pub longest_word: Option<String>,
    pub words_seen: FxHashMap<String, usize>,
    pub total_time: Duration,
}

/// Play `games_per_opening` games from each first letter of the dictionary
///
/// Games run in parallel against the one shared engine.
///
/// # Errors
///
/// Returns the first [`SelectionError`] hit by any game.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_selfplay(
    engine: &GhostEngine,
    config: &SelfPlayConfig,
) -> Result<SelfPlayStatistics, SelectionError> {
    let openings: Vec<char> = engine.trie().root().letters().to_vec();
    let jobs: Vec<(usize, char)> = openings
        .iter()
        .flat_map(|&opening| std::iter::repeat_n(opening, config.games_per_opening))
        .enumerate()
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(jobs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("playing");

    let start = Instant::now();
    let records: Vec<GameRecord> = jobs
        .par_iter()
        .map(|&(index, opening)| {
            let record = match config.seed {
                Some(seed) => play_game(
                    engine,
                    opening,
                    &mut RngTieBreaker::seeded(seed.wrapping_add(index as u64)),
                ),
                None => play_game(engine, opening, &mut RngTieBreaker::thread()),
            };
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&records, openings, start.elapsed()))
}

/// Play one game that starts with `opening`, the engine making every later move
///
/// # Errors
///
/// Returns [`SelectionError`] if the engine cannot choose a letter.
pub fn play_game<T: TieBreaker + ?Sized>(
    engine: &GhostEngine,
    opening: char,
    tie_breaker: &mut T,
) -> Result<GameRecord, SelectionError> {
    let mut word = opening.to_string();

    loop {
        match engine.next_move_with(&word, tie_breaker)? {
            Decision::Continue(letter) => word.push(letter),
            Decision::HumanWins(letter) => {
                word.push(letter);
                break;
            }
            Decision::ComputerWins(_) => break,
        }
    }

    Ok(GameRecord { opening, word })
}

fn summarize(
    records: &[GameRecord],
    openings: Vec<char>,
    total_time: Duration,
) -> SelfPlayStatistics {
    let mut by_opening: FxHashMap<char, OpeningTally> = FxHashMap::default();
    let mut words_seen: FxHashMap<String, usize> = FxHashMap::default();
    let mut opener_losses = 0;
    let mut total_length = 0;

    for record in records {
        let lost = record.opener_lost();
        let tally = by_opening.entry(record.opening).or_default();
        tally.games += 1;
        tally.opener_losses += usize::from(lost);
        opener_losses += usize::from(lost);
        total_length += record.word.chars().count();
        *words_seen.entry(record.word.clone()).or_insert(0) += 1;
    }

    let average_length = if records.is_empty() {
        0.0
    } else {
        total_length as f64 / records.len() as f64
    };

    let longest_word = records
        .iter()
        .max_by_key(|record| record.word.chars().count())
        .map(|record| record.word.clone());

    SelfPlayStatistics {
        total_games: records.len(),
        opener_losses,
        by_opening,
        openings,
        average_length,
        longest_word,
        words_seen,
        total_time,
    }
}
