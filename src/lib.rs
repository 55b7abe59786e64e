//! m,n,k tic-tac-toe move-evaluation engine
//!
//! A move selector for generalised tic-tac-toe: `rows x cols` boards where
//! `k` marks in a row (horizontal, vertical or diagonal) win. The computer
//! (`o`) plays against a human (`x`) and the computer always moves first.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: k-in-a-row detection and draw checks
//! - [`search`]: Permutation enumeration, outcome scoring, progress and cancellation
//! - [`engine`]: Move selection integrating all components
//! - [`session`]: Turn order, undo and game outcome for a whole game
//! - [`console`] and [`ui`]: Terminal and egui front ends
//!
//! # Quick Start
//!
//! ```
//! use mnk::{Board, EngineConfig, GameSession, GameSettings, Mark, MoveSelector, Pos};
//!
//! let settings = GameSettings::default();
//! let mut session = GameSession::new(settings).unwrap();
//! let selector = MoveSelector::new(EngineConfig::default());
//!
//! // The computer opens in the centre of an empty 3x3 board
//! let result = session.play_computer(&selector).unwrap();
//! assert_eq!(result.best_move, Pos::new(1, 1));
//!
//! let board: &Board = session.board();
//! assert_eq!(board.mark_count(Mark::Computer), 1);
//! assert_eq!(board.empty_count(), 8);
//! ```
//!
//! # Move Selection
//!
//! The selector follows this priority:
//! 1. Immediate win: the first empty cell (row-major) where the computer's
//!    own mark completes a line
//! 2. Quick opening: the centre cell of an empty board
//! 3. Exhaustive scoring of every empty cell over all completions of the board
//!
//! Exhaustive scores are wins minus losses over the distinct arrangements of
//! the remaining marks, reduced by 10% on perimeter cells. Ties go to the
//! first candidate in row-major order.

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos};
pub use config::{EngineConfig, GameSettings, MAX_BOARD_CELLS};
pub use engine::{select_move, CandidateScore, MoveResult, MoveSelector, Selection};
pub use error::{EngineError, Result};
pub use rules::{find_line, has_line, is_draw, winner, LineFilter};
pub use search::{CancelToken, OutcomeScorer, OutcomeTally, Permutations, Progress};
pub use session::{GameSession, Outcome};
