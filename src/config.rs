//! Engine and game configuration

use crate::board::Board;
use crate::error::Result;

/// Largest board the interactive shells offer, matching the exhaustive
/// scorer's practical limit.
pub const MAX_BOARD_CELLS: usize = 20;

/// Smallest value the settings cycles wrap back to
const MIN_CYCLE: usize = 3;

/// Options recognized by the move selector.
///
/// The run length `k` is not here: it belongs to the [`Board`] being
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Play the central cell on an empty board instead of scoring it
    pub quick_open: bool,
    /// Score candidates on the rayon thread pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quick_open: true,
            parallel: true,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_quick_open(mut self, quick_open: bool) -> Self {
        self.quick_open = quick_open;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Board shape, win condition and opening shortcut chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    pub required_in_a_row: usize,
    pub quick_open: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            required_in_a_row: 3,
            quick_open: true,
        }
    }
}

impl GameSettings {
    /// Build the empty board these settings describe
    pub fn new_board(&self) -> Result<Board> {
        Board::new(self.rows, self.cols, self.required_in_a_row)
    }

    /// Engine configuration matching these settings
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_quick_open(self.quick_open)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Add a row, wrapping to 3 once the board would exceed
    /// [`MAX_BOARD_CELLS`].
    pub fn cycle_rows(&mut self) {
        if (self.rows + 1) * self.cols > MAX_BOARD_CELLS {
            self.rows = MIN_CYCLE;
        } else {
            self.rows += 1;
        }
        self.clamp_to_win();
    }

    /// Add a column, wrapping to 3 once the board would exceed
    /// [`MAX_BOARD_CELLS`].
    pub fn cycle_cols(&mut self) {
        if (self.cols + 1) * self.rows > MAX_BOARD_CELLS {
            self.cols = MIN_CYCLE;
        } else {
            self.cols += 1;
        }
        self.clamp_to_win();
    }

    /// Raise the run length, wrapping once it would exceed the longer side
    pub fn cycle_to_win(&mut self) {
        let max = self.rows.max(self.cols);
        if self.required_in_a_row + 1 > max {
            self.required_in_a_row = MIN_CYCLE.min(max);
        } else {
            self.required_in_a_row += 1;
        }
    }

    pub fn toggle_quick_open(&mut self) {
        self.quick_open = !self.quick_open;
    }

    fn clamp_to_win(&mut self) {
        self.required_in_a_row = self.required_in_a_row.min(self.rows.max(self.cols));
    }
}
