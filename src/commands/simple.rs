//! Simple interactive CLI mode
//!
//! Text-based Ghost game against the engine, without the TUI.

use crate::core::{Decision, Fragment};
use crate::solver::GhostEngine;
use colored::Colorize;
use std::io::{self, Write};

/// How a finished game went
enum GameEnd {
    HumanWon(String),
    ComputerWon(String),
}

/// Run the simple interactive CLI mode
///
/// The human always plays the first letter.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the engine fails to
/// choose a letter.
pub fn run_simple(engine: &GhostEngine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Ghost - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Take turns adding a letter to the word fragment.");
    println!(
        "Whoever completes a word of {}+ letters, or makes a fragment no word starts with, loses.\n",
        engine.trie().min_length()
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to take back your last letter\n");

    let mut fragment = Fragment::default();
    let mut human_wins = 0;
    let mut computer_wins = 0;

    loop {
        println!("────────────────────────────────────────────────────────────");
        if fragment.is_empty() {
            println!("Fragment: (empty) - you start");
        } else {
            println!("Fragment: {}", fragment.as_str().to_uppercase().bold());
        }

        let input = get_user_input("Your letter")?.to_lowercase();
        match input.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing! You {human_wins} - {computer_wins} Computer\n");
                return Ok(());
            }
            "new" => {
                fragment.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "undo" => {
                // Take back the computer's reply and the letter before it
                if fragment.len() >= 2 {
                    fragment.pop();
                    fragment.pop();
                    println!("✓ Undone!\n");
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            _ => {}
        }

        let mut letters = input.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => letter,
            _ => {
                println!("❌ Enter exactly one letter\n");
                continue;
            }
        };

        fragment.push(letter).map_err(|e| e.to_string())?;

        let decision = engine
            .next_move(fragment.as_str())
            .map_err(|e| format!("Engine failure: {e}"))?;

        if let Some(reply) = decision.letter()
            && let Err(e) = fragment.push(reply)
        {
            fragment.pop();
            println!("❌ Engine replied with an unplayable letter: {e}\n");
            continue;
        }

        let end = match decision {
            Decision::Continue(reply) => {
                println!(
                    "🤖 I play {} → {}\n",
                    reply.to_ascii_uppercase().to_string().bright_yellow().bold(),
                    fragment.as_str().to_uppercase()
                );
                None
            }
            Decision::HumanWins(reply) => {
                Some(GameEnd::HumanWon(format!(
                    "I had to play {} and complete {}",
                    reply.to_ascii_uppercase(),
                    fragment.as_str().to_uppercase()
                )))
            }
            Decision::ComputerWins(reason) => Some(GameEnd::ComputerWon(reason.to_string())),
        };

        let Some(end) = end else { continue };

        match end {
            GameEnd::HumanWon(detail) => {
                human_wins += 1;
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!("{}", "    🎉  Y O U   W I N !  🎉    ".bright_green().bold());
                println!("  {detail}");
            }
            GameEnd::ComputerWon(detail) => {
                computer_wins += 1;
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!("{}", "    👻  G H O S T  -  I   W I N  👻    ".red().bold());
                println!("  {}: {detail}", fragment.as_str().to_uppercase());
            }
        }
        println!("  Score: You {human_wins} - {computer_wins} Computer");
        println!("{}\n", "═".repeat(60).bright_cyan());

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                fragment.clear();
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
