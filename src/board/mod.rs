//! Board representation for m,n,k games

pub mod board;


// Re-exports
pub use board::Board;

/// Side that owns a mark.
///
/// The derived ordering (`Computer < Player`) fixes the lexicographic order
/// used when enumerating completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Computer,
    Player,
}

impl Mark {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Computer => Mark::Player,
            Mark::Player => Mark::Computer,
        }
    }

    /// Single-character symbol used by the text renderers
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::Computer => 'o',
            Mark::Player => 'x',
        }
    }
}

/// Content of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// Position on the board (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with `cols` columns
    #[inline]
    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, cols: usize) -> Self {
        Self {
            row: idx / cols,
            col: idx % cols,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
