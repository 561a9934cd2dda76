//! Ghost Solver - CLI
//!
//! Play Ghost against a dictionary-backed engine, or query its decisions directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghost_solver::{
    commands::{SelfPlayConfig, analyze_fragment, next_letter, run_selfplay, run_simple},
    logging::init_logging,
    output::{
        print_analysis_result, print_move, print_move_json, print_selfplay_statistics,
        print_trie_summary,
    },
    solver::{DEFAULT_MIN_LENGTH, EngineConfig, GhostEngine, RngTieBreaker, TieBreaker},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ghost_solver",
    about = "Ghost word game engine using a pruned dictionary trie and parity search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Shortest word that counts as completed
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (line-based, without TUI)
    Simple,

    /// Print the computer's next letter for a fragment
    Next {
        /// Letters played so far (empty for the opening move)
        #[arg(default_value = "")]
        fragment: String,

        /// Print the JSON response instead of a summary
        #[arg(long)]
        json: bool,

        /// Seed for the tie-break among equally good letters
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how every next letter of a fragment is classified
    Analyze {
        /// Letters played so far
        fragment: String,
    },

    /// Let the engine play itself from every opening letter
    Selfplay {
        /// Games per opening letter
        #[arg(short = 'n', long, default_value = "20")]
        games: usize,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("reading word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logging = init_logging(&cli.log_level, cli.log_file.as_deref())?;

    // Build the engine once; the word list is dropped afterwards
    let engine = {
        let words = load_words(&cli.wordlist)?;
        GhostEngine::with_config(
            &words,
            EngineConfig {
                min_length: cli.min_length,
            },
        )
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&engine),
        Commands::Simple => run_simple(&engine).map_err(|e| anyhow::anyhow!(e)),
        Commands::Next {
            fragment,
            json,
            seed,
        } => match seed {
            Some(seed) => {
                run_next_command(&engine, &fragment, json, &mut RngTieBreaker::seeded(seed))
            }
            None => run_next_command(&engine, &fragment, json, &mut RngTieBreaker::thread()),
        },
        Commands::Analyze { fragment } => run_analyze_command(&engine, &fragment),
        Commands::Selfplay { games, seed } => run_selfplay_command(&engine, games, seed),
    }
}

fn run_next_command<T: TieBreaker>(
    engine: &GhostEngine,
    fragment: &str,
    json: bool,
    tie_breaker: &mut T,
) -> Result<()> {
    let report = next_letter(engine, fragment, tie_breaker).map_err(|e| anyhow::anyhow!(e))?;

    if json {
        print_move_json(&report)?;
    } else {
        print_move(&report);
    }
    Ok(())
}

fn run_analyze_command(engine: &GhostEngine, fragment: &str) -> Result<()> {
    let result = analyze_fragment(engine, fragment).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_selfplay_command(engine: &GhostEngine, games: usize, seed: Option<u64>) -> Result<()> {
    print_trie_summary(engine.trie());
    println!(
        "Running {games} self-play games from each of {} openings...",
        engine.trie().root().letters().len()
    );

    let config = SelfPlayConfig {
        seed,
        ..SelfPlayConfig::new(games)
    };
    let stats = run_selfplay(engine, &config)?;
    print_selfplay_statistics(&stats);
    Ok(())
}

fn run_play_command(engine: &GhostEngine) -> Result<()> {
    use ghost_solver::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
