//! Exhaustive outcome scoring for one candidate move
//!
//! The simulated board (candidate already placed) is completed in every
//! distinct way the remaining turns could be assigned: `ceil(m/2)` marks for
//! the side due next and `floor(m/2)` for the other, across the `m` empty
//! cells. Each completion that contains a line counts as a win for the
//! computer, a loss, or both.
//!
//! This is a single-ply evaluation, not a game-tree search: completions
//! ignore the order in which cells would actually be played.

use tracing::debug;

use crate::board::{Board, Mark};
use crate::error::{EngineError, Result};
use crate::rules::{has_line, LineFilter};

use super::control::CancelToken;
use super::permutation::{distinct_permutation_count, next_permutation};

/// Completions between two cancellation checks
const CANCEL_CHECK_INTERVAL: u64 = 1024;

/// Counts of classified completions for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    /// Completions containing a computer line
    pub wins: u64,
    /// Completions containing a player line
    pub losses: u64,
    /// Completions examined
    pub completions: u64,
}

impl OutcomeTally {
    #[inline]
    pub fn score(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }
}

/// Alternating seed starting with the side due to move on `board`
pub fn seed_for(board: &Board, remaining: usize) -> Vec<Mark> {
    let first = board.next_to_move();
    (0..remaining)
        .map(|i| if i % 2 == 0 { first } else { first.opponent() })
        .collect()
}

/// Scores simulated boards by enumerating their completions
#[derive(Debug, Clone, Default)]
pub struct OutcomeScorer {
    cancel: CancelToken,
}

impl OutcomeScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer that stops early when `cancel` fires
    pub fn with_cancel(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    /// `wins - losses` over every completion of `simulated`
    pub fn score(&self, simulated: &Board) -> Result<i64> {
        self.tally(simulated).map(|t| t.score())
    }

    /// Classify every completion of `simulated`.
    ///
    /// Completions are written into one scratch copy: every permutation
    /// rewrites all of the originally empty cells, so each filled board is
    /// identical to a fresh clone filled the same way.
    pub fn tally(&self, simulated: &Board) -> Result<OutcomeTally> {
        let k = simulated.required_in_a_row();
        let empties = simulated.empty_cells();
        let mut seq = seed_for(simulated, empties.len());
        seq.sort();

        debug!(
            empty = empties.len(),
            completions = ?distinct_permutation_count(
                empties.len().div_ceil(2),
                empties.len() / 2
            ),
            "scoring simulation"
        );

        let mut filled = simulated.clone();
        let mut tally = OutcomeTally::default();

        loop {
            if tally.completions % CANCEL_CHECK_INTERVAL == 0 && self.cancel.is_cancelled() {
                return Err(EngineError::Cancelled);
            }

            for (&pos, &mark) in empties.iter().zip(&seq) {
                filled.fill(pos, mark);
            }
            tally.completions += 1;

            if has_line(&filled, k, LineFilter::Either) {
                if has_line(&filled, k, LineFilter::OnlyComputer) {
                    tally.wins += 1;
                }
                if has_line(&filled, k, LineFilter::OnlyPlayer) {
                    tally.losses += 1;
                }
            }

            if !next_permutation(&mut seq) {
                break;
            }
        }

        Ok(tally)
    }
}
