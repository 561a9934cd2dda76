//! Display functions for command results

use super::formatters::{describe_decision, spaced_fragment, stall_bar};
use crate::commands::{AnalysisResult, MoveReport, SelfPlayStatistics};
use crate::core::Decision;
use crate::solver::Resolution;
use crate::trie::DictionaryTrie;
use colored::Colorize;

/// Print a short summary of the loaded dictionary
pub fn print_trie_summary(trie: &DictionaryTrie) {
    println!(
        "{} {} words accepted (min length {}), {} word ends, {} nodes",
        "📖".bright_cyan(),
        trie.accepted_words(),
        trie.min_length(),
        trie.word_count(),
        trie.node_count()
    );
}

/// Print the engine's move for one fragment
pub fn print_move(report: &MoveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Fragment: {}",
        spaced_fragment(report.fragment.as_str())
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let summary = describe_decision(report.decision);
    match report.decision {
        Decision::Continue(_) => {
            println!("\n🤖 {}", summary.green().bold());
            println!("   Word so far: {}", report.resulting_word().to_uppercase());
        }
        Decision::HumanWins(_) => {
            println!("\n🎉 {}", summary.bright_green().bold());
            println!("   Completed:   {}", report.resulting_word().to_uppercase());
        }
        Decision::ComputerWins(_) => {
            println!("\n👻 {}", summary.red().bold());
        }
    }
}

/// Print the engine's move in its JSON wire shape
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_move_json(report: &MoveReport) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(&report.decision.to_response())?);
    Ok(())
}

/// Print the classification of every next letter
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FRAGMENT ANALYSIS:".bright_cyan().bold(),
        spaced_fragment(result.fragment.as_str())
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n📚 Reachable words: {}", result.reachable_words);

    let candidates = match &result.resolution {
        Resolution::Terminal(reason) => {
            println!("\n👻 {}", format!("Game over - {reason}").red().bold());
            return;
        }
        Resolution::Candidates(candidates) => candidates,
    };

    println!(
        "\n✅ {} ({})",
        "Winning letters".green().bold(),
        candidates.winners.len()
    );
    if candidates.winners.is_empty() {
        println!("   none");
    } else {
        let letters: Vec<String> = candidates
            .winners
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect();
        println!("   {}", letters.join(" ").green());
    }

    println!(
        "\n⏳ {} ({})",
        "Losing letters".yellow().bold(),
        candidates.losers.len()
    );
    let longest = candidates.longest_loss().unwrap_or(0);
    let mut losers = candidates.losers.clone();
    losers.sort_by_key(|loser| std::cmp::Reverse(loser.length));
    for loser in &losers {
        let bar = stall_bar(loser.length, longest, 24);
        let line = format!(
            "   {}  [{}] word length {}",
            loser.letter.to_ascii_uppercase(),
            bar,
            loser.length
        );
        if loser.length == longest {
            println!("{}", line.bright_white());
        } else {
            println!("{}", line.bright_black());
        }
    }
}

/// Print self-play statistics
pub fn print_selfplay_statistics(stats: &SelfPlayStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Self-Play Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games);
    if stats.total_games == 0 {
        return;
    }

    let opener_pct = stats.opener_losses as f64 / stats.total_games as f64 * 100.0;
    println!(
        "  Opener lost:         {} {}",
        stats.opener_losses,
        format!("({opener_pct:.1}%)").yellow()
    );
    println!(
        "  Responder lost:      {} {}",
        stats.total_games - stats.opener_losses,
        format!("({:.1}%)", 100.0 - opener_pct).yellow()
    );
    println!(
        "  Average word length: {}",
        format!("{:.2}", stats.average_length).bright_yellow().bold()
    );
    if let Some(word) = &stats.longest_word {
        println!("  Longest word:        {}", word.to_uppercase());
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Opener losses by first letter".bright_cyan().bold());
    for opening in &stats.openings {
        let Some(tally) = stats.by_opening.get(opening) else {
            continue;
        };
        if tally.games == 0 {
            continue;
        }
        let pct = tally.opener_losses as f64 / tally.games as f64 * 100.0;
        let bar_len = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).red(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!(
            "  {}: {bar} {:4}/{:<4} ({pct:5.1}%)",
            opening.to_ascii_uppercase(),
            tally.opener_losses,
            tally.games
        );
    }

    println!("\n🎯 Most Common Endings");
    let mut endings: Vec<(&String, &usize)> = stats.words_seen.iter().collect();
    endings.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (word, count) in endings.iter().take(5) {
        let percentage = **count as f64 / stats.total_games as f64 * 100.0;
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            percentage
        );
    }
}
