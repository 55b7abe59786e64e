//! Move selector integrating the scanner and the outcome scorer
//!
//! The selector picks the computer's move with the following priority:
//!
//! 1. **Immediate win**: the first candidate that completes a line
//! 2. **Quick open**: the central cell on an empty board (when enabled)
//! 3. **Exhaustive**: every candidate scored by enumerating all completions,
//!    perimeter cells discounted by 10%, first maximum wins
//!
//! # Example
//!
//! ```
//! use mnk::{Board, EngineConfig, Mark, MoveSelector, Pos};
//!
//! let mut board = Board::new(3, 3, 3).unwrap();
//! board.set(Pos::new(1, 1), Mark::Computer).unwrap();
//! board.set(Pos::new(0, 0), Mark::Player).unwrap();
//!
//! let selector = MoveSelector::new(EngineConfig::default());
//! let result = selector.select_move_with_stats(&board).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Selection: {:?}", result.selection);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::board::{Board, Mark, Pos};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::rules::{has_line, LineFilter};
use crate::search::{CancelToken, OutcomeScorer, OutcomeTally, Progress, ProgressListener};

/// Fraction removed from the score of a perimeter candidate
const PERIMETER_PENALTY: f64 = 0.1;

/// Which phase of the selector produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Candidate completes a line on its own
    ImmediateWin,
    /// Central cell played on an empty board without scoring
    QuickOpen,
    /// Highest adjusted score over all candidates
    Exhaustive,
}

/// Score of one candidate after exhaustive evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub pos: Pos,
    pub tally: OutcomeTally,
    /// `wins - losses`
    pub raw: i64,
    /// Raw score after the perimeter adjustment
    pub adjusted: f64,
}

/// Result of a move selection with statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Pos,
    pub selection: Selection,
    /// Per-candidate scores in candidate order (empty for fast paths)
    pub scores: Vec<CandidateScore>,
    /// Completions examined across all candidates
    pub completions: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            selection: Selection::ImmediateWin,
            scores: Vec::new(),
            completions: 0,
            time_ms,
        }
    }

    #[inline]
    fn quick_open(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            selection: Selection::QuickOpen,
            scores: Vec::new(),
            completions: 0,
            time_ms,
        }
    }

    /// Score of the chosen candidate, if it was scored
    pub fn best_score(&self) -> Option<&CandidateScore> {
        self.scores.iter().find(|s| s.pos == self.best_move)
    }
}

/// Chooses the computer's move on an m,n,k board.
///
/// Holds the configuration plus the progress and cancellation handles. The
/// handles are shared: clone them out with [`progress`](Self::progress) and
/// [`cancel_token`](Self::cancel_token) before handing the selector to a
/// worker thread.
#[derive(Clone)]
pub struct MoveSelector {
    config: EngineConfig,
    progress: Progress,
    cancel: CancelToken,
    listener: Option<ProgressListener>,
}

impl std::fmt::Debug for MoveSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveSelector")
            .field("config", &self.config)
            .field("progress", &self.progress)
            .field("cancel", &self.cancel)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MoveSelector {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            progress: Progress::new(),
            cancel: CancelToken::new(),
            listener: None,
        }
    }

    /// Attach a listener called with the percentage of candidates scored.
    ///
    /// With parallel scoring the listener runs on worker threads and may see
    /// percentages out of order.
    #[must_use]
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.listener = Some(std::sync::Arc::new(listener));
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn set_quick_open(&mut self, quick_open: bool) {
        self.config.quick_open = quick_open;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// Shared progress handle
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }

    /// Shared cancellation handle
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Best move for the computer.
    ///
    /// Convenience wrapper around [`select_move_with_stats`](Self::select_move_with_stats).
    pub fn select_move(&self, board: &Board) -> Result<Pos> {
        self.select_move_with_stats(board).map(|r| r.best_move)
    }

    /// Best move for the computer with per-candidate scores.
    ///
    /// # Errors
    ///
    /// * `NoLegalMove` if the board is full
    /// * `Cancelled` if the cancel token fires during scoring
    pub fn select_move_with_stats(&self, board: &Board) -> Result<MoveResult> {
        let start = Instant::now();
        let k = board.required_in_a_row();

        let candidates = board.empty_cells();
        if candidates.is_empty() {
            return Err(EngineError::NoLegalMove);
        }
        self.progress.begin(candidates.len());

        // 1. One-step simulations; any line ends the search immediately
        let mut simulations = Vec::with_capacity(candidates.len());
        for &pos in &candidates {
            let mut simulated = board.clone();
            simulated.set(pos, Mark::Computer)?;
            if has_line(&simulated, k, LineFilter::Either) {
                self.progress.finish();
                let result = MoveResult::immediate_win(pos, elapsed_ms(start));
                info!(best = %pos, "immediate win");
                return Ok(result);
            }
            simulations.push((pos, simulated));
        }

        // 2. Opening shortcut: the first move would cost a full-board enumeration
        if self.config.quick_open && board.is_empty_board() {
            let center = board.center();
            self.progress.finish();
            trace!(best = %center, "quick open");
            return Ok(MoveResult::quick_open(center, elapsed_ms(start)));
        }

        // 3. Exhaustive scoring in candidate order
        let scorer = OutcomeScorer::with_cancel(self.cancel.clone());
        let evaluate = |(pos, simulated): &(Pos, Board)| -> Result<CandidateScore> {
            let tally = scorer.tally(simulated)?;
            let raw = tally.score();
            let adjusted = adjust_for_perimeter(board, *pos, raw);
            let percent = self.progress.advance();
            if let Some(listener) = &self.listener {
                listener(percent);
            }
            debug!(candidate = %pos, raw, adjusted, completions = tally.completions, "candidate scored");
            Ok(CandidateScore {
                pos: *pos,
                tally,
                raw,
                adjusted,
            })
        };

        let scores: Vec<CandidateScore> = if self.config.parallel {
            simulations
                .par_iter()
                .map(evaluate)
                .collect::<Result<_>>()?
        } else {
            simulations.iter().map(evaluate).collect::<Result<_>>()?
        };

        // 4. First maximum in candidate order
        let best = pick_best(&scores).ok_or(EngineError::NoLegalMove)?;
        let completions = scores.iter().map(|s| s.tally.completions).sum();
        let result = MoveResult {
            best_move: best.pos,
            selection: Selection::Exhaustive,
            completions,
            time_ms: elapsed_ms(start),
            scores,
        };

        info!(
            best = %result.best_move,
            completions = result.completions,
            time_ms = result.time_ms,
            "move selected"
        );
        Ok(result)
    }
}

/// Discount perimeter candidates by 10% of their own score.
///
/// Negative scores move towards zero, so a losing perimeter cell ranks above
/// an equally losing interior one.
#[inline]
pub fn adjust_for_perimeter(board: &Board, pos: Pos, raw: i64) -> f64 {
    let score = raw as f64;
    if board.is_perimeter(pos) {
        score - PERIMETER_PENALTY * score
    } else {
        score
    }
}

/// First candidate with the maximum adjusted score
fn pick_best(scores: &[CandidateScore]) -> Option<&CandidateScore> {
    let mut best: Option<&CandidateScore> = None;
    for score in scores {
        match best {
            Some(b) if score.adjusted <= b.adjusted => {}
            _ => best = Some(score),
        }
    }
    best
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Best move for the computer using a one-off selector
pub fn select_move(board: &Board, config: EngineConfig) -> Result<Pos> {
    MoveSelector::new(config).select_move(board)
}
