//! Move selection
//!
//! Turns classified candidates into a single decision, breaking ties through a [`TieBreaker`].

use super::candidates::{Candidates, Resolution};
use crate::core::Decision;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::error;

/// Source of the uniform draw among equally good letters
pub trait TieBreaker {
    /// Pick an index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Tie breaker backed by any `rand` generator
pub struct RngTieBreaker<R: Rng> {
    rng: R,
}

impl<R: Rng> RngTieBreaker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngTieBreaker<ThreadRng> {
    /// Draw from the thread-local generator
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngTieBreaker<StdRng> {
    /// Reproducible draws for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TieBreaker for RngTieBreaker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// A non-terminal position produced no candidate letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionError {
    pub fragment_len: usize,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no winning or losing letters after a live fragment of length {}",
            self.fragment_len
        )
    }
}

impl std::error::Error for SelectionError {}

/// Choose the engine's move
///
/// Terminal resolutions pass straight through. Otherwise a random winner is played; failing
/// that, a random letter among those that stall longest. If that letter itself completes a
/// word, the human wins.
///
/// # Errors
/// Returns [`SelectionError`] when a live fragment has neither winners nor losers. That can
/// only come from a malformed trie and is never turned into a move.
pub fn choose<T: TieBreaker + ?Sized>(
    resolution: &Resolution,
    fragment_len: usize,
    tie_breaker: &mut T,
) -> Result<Decision, SelectionError> {
    let candidates = match resolution {
        Resolution::Terminal(reason) => return Ok(Decision::ComputerWins(*reason)),
        Resolution::Candidates(candidates) => candidates,
    };

    if !candidates.winners.is_empty() {
        let index = tie_breaker.pick(candidates.winners.len());
        return Ok(Decision::Continue(candidates.winners[index]));
    }

    choose_loser(candidates, fragment_len, tie_breaker)
}

fn choose_loser<T: TieBreaker + ?Sized>(
    candidates: &Candidates,
    fragment_len: usize,
    tie_breaker: &mut T,
) -> Result<Decision, SelectionError> {
    let longest = candidates.longest_losers();
    if longest.is_empty() {
        error!(fragment_len, "live fragment resolved to no candidates");
        return Err(SelectionError { fragment_len });
    }

    let loser = longest[tie_breaker.pick(longest.len())];
    if loser.length == fragment_len + 1 {
        Ok(Decision::HumanWins(loser.letter))
    } else {
        Ok(Decision::Continue(loser.letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TerminalReason;
    use crate::solver::candidates::Loser;

    /// Always takes the last option
    struct LastPick;

    impl TieBreaker for LastPick {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    fn loser(letter: char, length: usize) -> Loser {
        Loser { letter, length }
    }

    fn live(winners: Vec<char>, losers: Vec<Loser>) -> Resolution {
        Resolution::Candidates(Candidates { winners, losers })
    }

    #[test]
    fn terminal_passes_through() {
        let resolution = Resolution::Terminal(TerminalReason::CompletedWord);
        let decision = choose(&resolution, 3, &mut LastPick).unwrap();
        assert_eq!(
            decision,
            Decision::ComputerWins(TerminalReason::CompletedWord)
        );
    }

    #[test]
    fn winners_beat_losers() {
        let resolution = live(vec!['g', 'k'], vec![loser('d', 9)]);
        assert_eq!(
            choose(&resolution, 2, &mut LastPick).unwrap(),
            Decision::Continue('k')
        );
    }

    #[test]
    fn random_winner_is_one_of_the_winners() {
        let resolution = live(vec!['g', 'k', 'p'], Vec::new());
        let mut tie_breaker = RngTieBreaker::thread();
        for _ in 0..20 {
            let letter = choose(&resolution, 2, &mut tie_breaker)
                .unwrap()
                .letter()
                .unwrap();
            assert!(['g', 'k', 'p'].contains(&letter));
        }
    }

    #[test]
    fn longest_loser_is_played() {
        let resolution = live(Vec::new(), vec![loser('s', 6), loser('d', 4)]);
        assert_eq!(
            choose(&resolution, 1, &mut LastPick).unwrap(),
            Decision::Continue('s')
        );
    }

    #[test]
    fn ties_among_longest_losers_use_the_tie_breaker() {
        let resolution = live(
            Vec::new(),
            vec![loser('a', 5), loser('b', 3), loser('c', 5)],
        );
        assert_eq!(
            choose(&resolution, 1, &mut LastPick).unwrap(),
            Decision::Continue('c')
        );
    }

    #[test]
    fn loser_completing_a_word_hands_the_win_over() {
        let resolution = live(Vec::new(), vec![loser('h', 6)]);
        assert_eq!(
            choose(&resolution, 5, &mut LastPick).unwrap(),
            Decision::HumanWins('h')
        );
    }

    #[test]
    fn no_candidates_is_an_error() {
        let resolution = live(Vec::new(), Vec::new());
        assert_eq!(
            choose(&resolution, 4, &mut LastPick),
            Err(SelectionError { fragment_len: 4 })
        );
    }

    #[test]
    fn seeded_tie_breaker_is_reproducible() {
        let mut first = RngTieBreaker::seeded(7);
        let mut second = RngTieBreaker::seeded(7);
        let a: Vec<usize> = (0..16).map(|_| first.pick(26)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.pick(26)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|&i| i < 26));
    }
}
