//! Fixed-shape grid with its mutation primitives

use super::{Cell, Mark, Pos};
use crate::error::{EngineError, Result};

/// Game board of `rows x cols` cells with a `k`-in-a-row win condition.
///
/// Cells are stored row-major. `Clone` is a deep copy, so every simulated
/// future owns its grid outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    required_in_a_row: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with `InvalidDimensions` for a zero-sized grid and with
    /// `InvalidRunLength` unless `1 <= k <= max(rows, cols)`.
    pub fn new(rows: usize, cols: usize, required_in_a_row: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        let max = rows.max(cols);
        if required_in_a_row == 0 || required_in_a_row > max {
            return Err(EngineError::InvalidRunLength {
                k: required_in_a_row,
                max,
            });
        }
        Ok(Self {
            rows,
            cols,
            required_in_a_row,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of aligned marks needed to win (`k`)
    #[inline]
    pub fn required_in_a_row(&self) -> usize {
        self.required_in_a_row
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn check_bounds(&self, pos: Pos) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.to_index(self.cols))
        } else {
            Err(EngineError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Pos) -> Result<Cell> {
        let idx = self.check_bounds(pos)?;
        Ok(self.cells[idx])
    }

    /// Unchecked cell read. Callers test bounds before indexing.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Place a mark on an empty cell
    pub fn set(&mut self, pos: Pos, mark: Mark) -> Result<()> {
        let idx = self.check_bounds(pos)?;
        if !self.cells[idx].is_empty() {
            return Err(EngineError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[idx] = Cell::Marked(mark);
        Ok(())
    }

    /// Overwrite a cell without the occupancy check.
    ///
    /// The scorer reuses one scratch board and rewrites the same empty
    /// positions for every completion.
    #[inline]
    pub(crate) fn fill(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.contains(pos));
        self.cells[pos.to_index(self.cols)] = Cell::Marked(mark);
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// True when no mark has been placed yet
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Empty positions in row-major order.
    ///
    /// The order is stable: it maps permutation positions onto coordinates.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(idx, _)| Pos::from_index(idx, self.cols))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Marked(mark))
            .count()
    }

    /// Side due to move: Computer when both sides have placed the same
    /// number of marks, Player otherwise.
    pub fn next_to_move(&self) -> Mark {
        if self.mark_count(Mark::Computer) == self.mark_count(Mark::Player) {
            Mark::Computer
        } else {
            Mark::Player
        }
    }

    /// True for cells in the first/last row or first/last column
    #[inline]
    pub fn is_perimeter(&self, pos: Pos) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row + 1 == self.rows || pos.col + 1 == self.cols
    }

    /// Most central cell, rounding towards the top-left
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new((self.rows - 1) / 2, (self.cols - 1) / 2)
    }

    /// Iterate over every `(Pos, Cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &c)| (Pos::from_index(idx, self.cols), c))
    }
}

impl std::fmt::Display for Board {
    /// Text rendering with 1-based row and column headers
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, " {:>2}", col + 1)?;
        }
        writeln!(f)?;
        for row in 0..self.rows {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..self.cols {
                let symbol = match self.cell(row, col) {
                    Cell::Empty => '_',
                    Cell::Marked(mark) => mark.symbol(),
                };
                write!(f, "  {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
