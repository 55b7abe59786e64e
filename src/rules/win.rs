//! Win detection for m,n,k boards
//!
//! A line is `k` consecutive same-mark cells horizontally, vertically or
//! diagonally. Every anchor is scanned in four directions only (East, South,
//! South-East, South-West): because anchors are visited top-to-bottom and
//! left-to-right, each run is found from its starting cell and the opposite
//! directions never need checking.

use crate::board::{Board, Cell, Mark, Pos};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // East
    (1, 0),  // South
    (1, 1),  // South-East
    (1, -1), // South-West
];

/// Restricts which mark may count towards a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    Either,
    OnlyComputer,
    OnlyPlayer,
}

impl LineFilter {
    #[inline]
    fn accepts(self, mark: Mark) -> bool {
        match self {
            LineFilter::Either => true,
            LineFilter::OnlyComputer => mark == Mark::Computer,
            LineFilter::OnlyPlayer => mark == Mark::Player,
        }
    }
}

impl From<Mark> for LineFilter {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Computer => LineFilter::OnlyComputer,
            Mark::Player => LineFilter::OnlyPlayer,
        }
    }
}

/// Far end of a `k`-cell run, or `None` if it leaves the grid
#[inline]
fn run_end(board: &Board, row: usize, col: usize, dir: (isize, isize), k: usize) -> Option<Pos> {
    let span = k as isize - 1;
    let end_row = row as isize + dir.0 * span;
    let end_col = col as isize + dir.1 * span;
    if end_row < 0 || end_col < 0 {
        return None;
    }
    let end = Pos::new(end_row as usize, end_col as usize);
    board.contains(end).then_some(end)
}

/// Check a single anchor/direction pair. Bounds are tested before indexing.
#[inline]
fn run_matches(board: &Board, row: usize, col: usize, dir: (isize, isize), k: usize, anchor: Cell) -> bool {
    if run_end(board, row, col, dir, k).is_none() {
        return false;
    }
    (1..k).all(|step| {
        let r = (row as isize + dir.0 * step as isize) as usize;
        let c = (col as isize + dir.1 * step as isize) as usize;
        board.cell(r, c) == anchor
    })
}

/// First run of `k` matching cells, as `(anchor, direction)`
fn first_run(board: &Board, k: usize, filter: LineFilter) -> Option<(Pos, (isize, isize))> {
    if k == 0 {
        return None;
    }
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let anchor = board.cell(row, col);
            let Cell::Marked(mark) = anchor else {
                continue;
            };
            if !filter.accepts(mark) {
                continue;
            }
            for dir in DIRECTIONS {
                if run_matches(board, row, col, dir, k, anchor) {
                    return Some((Pos::new(row, col), dir));
                }
            }
        }
    }
    None
}

/// Check if there are `k` aligned marks accepted by `filter`.
///
/// Pure and allocation-free; this is the inner loop of the outcome scorer.
#[inline]
pub fn has_line(board: &Board, k: usize, filter: LineFilter) -> bool {
    first_run(board, k, filter).is_some()
}

/// Find the cells of the first line found, in scan order
pub fn find_line(board: &Board, k: usize, filter: LineFilter) -> Option<Vec<Pos>> {
    let (anchor, (dr, dc)) = first_run(board, k, filter)?;
    let line = (0..k as isize)
        .map(|step| {
            Pos::new(
                (anchor.row as isize + dr * step) as usize,
                (anchor.col as isize + dc * step) as usize,
            )
        })
        .collect();
    Some(line)
}

/// Side owning a line, if any. The computer is checked first.
pub fn winner(board: &Board) -> Option<Mark> {
    let k = board.required_in_a_row();
    [Mark::Computer, Mark::Player]
        .into_iter()
        .find(|&mark| has_line(board, k, mark.into()))
}

/// Full board without any line
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_line(board, board.required_in_a_row(), LineFilter::Either)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str], k: usize) -> Board {
        let mut board = Board::new(rows.len(), rows[0].len(), k).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    'o' => board.set(Pos::new(r, c), Mark::Computer).unwrap(),
                    'x' => board.set(Pos::new(r, c), Mark::Player).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_horizontal_line() {
        let board = board_from(&["ooo", "x_x", "___"], 3);
        assert!(has_line(&board, 3, LineFilter::Either));
        assert!(has_line(&board, 3, LineFilter::OnlyComputer));
        assert!(!has_line(&board, 3, LineFilter::OnlyPlayer));
    }

    #[test]
    fn test_vertical_line() {
        let board = board_from(&["x_o", "x_o", "x__"], 3);
        assert!(has_line(&board, 3, LineFilter::OnlyPlayer));
        assert!(!has_line(&board, 3, LineFilter::OnlyComputer));
    }

    #[test]
    fn test_diagonal_se_line() {
        let board = board_from(&["o_x", "_ox", "__o"], 3);
        assert!(has_line(&board, 3, LineFilter::OnlyComputer));
    }

    #[test]
    fn test_diagonal_sw_line() {
        let board = board_from(&["__x", "_x_", "x__"], 3);
        assert!(has_line(&board, 3, LineFilter::OnlyPlayer));
        assert_eq!(
            find_line(&board, 3, LineFilter::Either),
            Some(vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)])
        );
    }

    #[test]
    fn test_broken_run_is_not_line() {
        let board = board_from(&["oxo", "___", "___"], 3);
        assert!(!has_line(&board, 3, LineFilter::Either));
        let board = board_from(&["oo_o"], 3);
        assert!(!has_line(&board, 3, LineFilter::Either));
    }

    #[test]
    fn test_run_must_not_wrap_rows() {
        // Last cell of row 0 and first two of row 1 are adjacent in memory only
        let board = board_from(&["__o", "oo_", "___"], 3);
        assert!(!has_line(&board, 3, LineFilter::Either));
    }

    #[test]
    fn test_sw_run_at_left_edge() {
        // Anchor in column 1 would walk off the left edge for k=3
        let board = board_from(&["_o_", "o__", "___"], 3);
        assert!(!has_line(&board, 3, LineFilter::Either));
        assert!(has_line(&board, 2, LineFilter::Either));
    }

    #[test]
    fn test_longer_run_counts() {
        let board = board_from(&["xxxx_"], 3);
        assert!(has_line(&board, 3, LineFilter::OnlyPlayer));
        assert!(has_line(&board, 4, LineFilter::OnlyPlayer));
        assert!(!has_line(&board, 5, LineFilter::OnlyPlayer));
    }

    #[test]
    fn test_rectangular_board() {
        let board = board_from(&["_o", "_o", "_o", "__"], 3);
        assert!(has_line(&board, 3, LineFilter::OnlyComputer));
        let board = board_from(&["x___x", "_x_x_"], 2);
        assert!(has_line(&board, 2, LineFilter::OnlyPlayer));
    }

    #[test]
    fn test_k_one() {
        let board = board_from(&["___", "_x_"], 1);
        assert!(has_line(&board, 1, LineFilter::OnlyPlayer));
        assert!(!has_line(&board, 1, LineFilter::OnlyComputer));
    }

    #[test]
    fn test_k_zero_never_matches() {
        let board = board_from(&["oo"], 2);
        assert!(!has_line(&board, 0, LineFilter::Either));
    }

    #[test]
    fn test_k_beyond_board() {
        let board = board_from(&["ooo"], 3);
        assert!(!has_line(&board, 4, LineFilter::Either));
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let board = Board::new(4, 4, 3).unwrap();
        assert!(!has_line(&board, 3, LineFilter::Either));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_both_sides_have_lines() {
        let board = board_from(&["ooo", "xxx", "___"], 3);
        assert!(has_line(&board, 3, LineFilter::OnlyComputer));
        assert!(has_line(&board, 3, LineFilter::OnlyPlayer));
        assert_eq!(winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_winner_player() {
        let board = board_from(&["o_x", "o_x", "__x"], 3);
        assert_eq!(winner(&board), Some(Mark::Player));
    }

    #[test]
    fn test_draw() {
        let board = board_from(&["oxo", "oxx", "xoo"], 3);
        assert!(board.is_full());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from(&["ooo", "xxo", "xox"], 3);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let board = board_from(&["ox_", "___", "___"], 3);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_find_line_cells() {
        let board = board_from(&["____", "_ooo", "____"], 3);
        assert_eq!(
            find_line(&board, 3, LineFilter::OnlyComputer),
            Some(vec![Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)])
        );
        assert_eq!(find_line(&board, 3, LineFilter::OnlyPlayer), None);
    }
}
