//! End-to-end behaviour of the move selector and line scanner

use mnk::search::{distinct_permutation_count, seed_for};
use mnk::{
    has_line, is_draw, select_move, Board, EngineConfig, EngineError, LineFilter, Mark,
    MoveSelector, OutcomeScorer, Permutations, Pos, Selection,
};
use proptest::prelude::*;

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

/// Strategy for small boards with arbitrary (not necessarily reachable) contents
fn arbitrary_board() -> impl Strategy<Value = Board> {
    (1usize..=5, 1usize..=5)
        .prop_flat_map(|(rows, cols)| {
            (Just(rows), Just(cols), prop::collection::vec(0u8..3, rows * cols))
        })
        .prop_map(|(rows, cols, cells)| {
            let mut board = Board::new(rows, cols, 1).unwrap();
            for (idx, cell) in cells.into_iter().enumerate() {
                let pos = Pos::from_index(idx, cols);
                match cell {
                    1 => board.set(pos, Mark::Computer).unwrap(),
                    2 => board.set(pos, Mark::Player).unwrap(),
                    _ => {}
                }
            }
            board
        })
}

fn rotate_180(board: &Board) -> Board {
    let (rows, cols) = (board.rows(), board.cols());
    let mut rotated = Board::new(rows, cols, board.required_in_a_row()).unwrap();
    for (pos, cell) in board.iter() {
        if let Some(mark) = cell.mark() {
            let target = Pos::new(rows - 1 - pos.row, cols - 1 - pos.col);
            rotated.set(target, mark).unwrap();
        }
    }
    rotated
}

proptest! {
    #[test]
    fn prop_line_symmetric_under_rotation(board in arbitrary_board(), k in 1usize..=6) {
        let rotated = rotate_180(&board);
        for filter in [LineFilter::Either, LineFilter::OnlyComputer, LineFilter::OnlyPlayer] {
            prop_assert_eq!(has_line(&board, k, filter), has_line(&rotated, k, filter));
        }
    }

    #[test]
    fn prop_either_is_union_of_sides(board in arbitrary_board(), k in 1usize..=6) {
        let either = has_line(&board, k, LineFilter::Either);
        let sides = has_line(&board, k, LineFilter::OnlyComputer)
            || has_line(&board, k, LineFilter::OnlyPlayer);
        prop_assert_eq!(either, sides);
    }

    #[test]
    fn prop_permutation_count(m in 0usize..=9, split in 0usize..=9) {
        let first = split.min(m);
        let mut seed = vec![Mark::Computer; first];
        seed.extend(std::iter::repeat(Mark::Player).take(m - first));

        let perms: Vec<Vec<Mark>> = Permutations::new(seed.clone()).collect();
        let expected = distinct_permutation_count(first, m - first).unwrap();
        prop_assert_eq!(perms.len() as u128, expected);

        let mut sorted = seed.clone();
        sorted.sort();
        prop_assert_eq!(perms.first(), Some(&sorted));
        sorted.reverse();
        prop_assert_eq!(perms.last(), Some(&sorted));
    }
}

/// Win minus loss count over completions, assigning marks to the empty
/// cells in reverse row-major order
fn score_with_reversed_cells(board: &Board) -> i64 {
    let k = board.required_in_a_row();
    let mut empties = board.empty_cells();
    empties.reverse();
    let seed = seed_for(board, empties.len());

    let mut score = 0;
    for perm in Permutations::new(seed) {
        let mut filled = board.clone();
        for (&pos, &mark) in empties.iter().zip(&perm) {
            filled.set(pos, mark).unwrap();
        }
        if has_line(&filled, k, LineFilter::Either) {
            if has_line(&filled, k, LineFilter::OnlyComputer) {
                score += 1;
            }
            if has_line(&filled, k, LineFilter::OnlyPlayer) {
                score -= 1;
            }
        }
    }
    score
}

#[test]
fn test_score_invariant_to_cell_order() {
    let positions = [
        board_from(&["o__", "_x_", "___"], 3),
        board_from(&["ox_", "_o_", "x__"], 3),
        board_from(&["o___", "_x__", "____"], 3),
        board_from(&["_x", "o_", "__"], 2),
    ];
    let scorer = OutcomeScorer::new();
    for board in &positions {
        assert_eq!(scorer.score(board).unwrap(), score_with_reversed_cells(board));
    }
}

#[test]
fn test_empty_board_quick_open_plays_center() {
    let board = Board::new(3, 3, 3).unwrap();
    assert_eq!(select_move(&board, EngineConfig::default()).unwrap(), Pos::new(1, 1));
}

#[test]
fn test_instant_win_without_quick_open() {
    let board = board_from(&["oo_", "x__", "__x"], 3);
    let config = EngineConfig::default().with_quick_open(false);
    let result = MoveSelector::new(config).select_move_with_stats(&board).unwrap();
    assert_eq!(result.best_move, Pos::new(0, 2));
    assert_eq!(result.selection, Selection::ImmediateWin);
    assert_eq!(result.completions, 0);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from(&["oxo", "oxx", "xoo"], 3);
    assert!(board.is_full());
    assert!(is_draw(&board));
}

#[test]
fn test_full_board_has_no_legal_move() {
    let board = board_from(&["oxo", "oxx", "xoo"], 3);
    assert_eq!(
        select_move(&board, EngineConfig::default()),
        Err(EngineError::NoLegalMove)
    );
}
