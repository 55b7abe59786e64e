//! Game flow shared by the console and GUI front ends
//!
//! The computer always moves first. After every half-move the board is
//! checked for a line or a draw.

use tracing::{info, warn};

use crate::board::{Board, Mark, Pos};
use crate::config::GameSettings;
use crate::engine::{MoveResult, MoveSelector};
use crate::error::{EngineError, Result};
use crate::rules::{find_line, is_draw, winner, LineFilter};

/// State of the game after the last half-move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    ComputerWon,
    PlayerWon,
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Why a player move was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    NotYourTurn,
    Illegal(EngineError),
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "Game is over"),
            MoveRejection::NotYourTurn => write!(f, "Not your turn"),
            MoveRejection::Illegal(EngineError::CellOccupied { .. }) => write!(f, "Place taken"),
            MoveRejection::Illegal(err) => write!(f, "{}", err),
        }
    }
}

/// One game between the computer and a human
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    settings: GameSettings,
    outcome: Outcome,
    history: Vec<(Pos, Mark)>,
}

impl GameSession {
    pub fn new(settings: GameSettings) -> Result<Self> {
        Ok(Self {
            board: settings.new_board()?,
            settings,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Side due to move, `None` once the game is over
    pub fn to_move(&self) -> Option<Mark> {
        (!self.outcome.is_over()).then(|| self.board.next_to_move())
    }

    pub fn is_player_turn(&self) -> bool {
        self.to_move() == Some(Mark::Player)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.to_move() == Some(Mark::Computer)
    }

    /// Cells of the winning line, if the game was won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let filter = match self.outcome {
            Outcome::ComputerWon => LineFilter::OnlyComputer,
            Outcome::PlayerWon => LineFilter::OnlyPlayer,
            _ => return None,
        };
        find_line(&self.board, self.board.required_in_a_row(), filter)
    }

    /// Apply the human's move
    pub fn play_player(&mut self, pos: Pos) -> std::result::Result<Outcome, MoveRejection> {
        if self.outcome.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if !self.is_player_turn() {
            return Err(MoveRejection::NotYourTurn);
        }
        self.apply(pos, Mark::Player).map_err(MoveRejection::Illegal)
    }

    /// Let the engine choose and apply the computer's move
    pub fn play_computer(&mut self, selector: &MoveSelector) -> Result<MoveResult> {
        let result = selector.select_move_with_stats(&self.board)?;
        self.apply_computer(result.best_move)?;
        Ok(result)
    }

    /// Apply a computer move chosen elsewhere (e.g. on a worker thread)
    pub fn apply_computer(&mut self, pos: Pos) -> Result<Outcome> {
        self.apply(pos, Mark::Computer)
    }

    fn apply(&mut self, pos: Pos, mark: Mark) -> Result<Outcome> {
        self.board.set(pos, mark)?;
        self.history.push((pos, mark));
        self.outcome = evaluate(&self.board);
        if self.outcome.is_over() {
            info!(outcome = ?self.outcome, moves = self.history.len(), "game over");
        }
        Ok(self.outcome)
    }

    /// Take back the last player move and the computer reply that preceded it
    pub fn undo(&mut self) {
        let undo_count = match self.history.last() {
            Some((_, Mark::Computer)) if self.history.len() >= 2 => 2,
            Some(_) => 1,
            None => return,
        };
        let keep = self.history.len() - undo_count;

        // Replay from an empty board; every replayed move was legal before
        let mut session = match Self::new(self.settings) {
            Ok(session) => session,
            Err(err) => {
                warn!(%err, "undo could not rebuild the board");
                return;
            }
        };
        for &(pos, mark) in &self.history[..keep] {
            if let Err(err) = session.apply(pos, mark) {
                warn!(%err, %pos, "undo replay stopped");
                return;
            }
        }
        *self = session;
    }
}

/// Outcome of a board position
pub fn evaluate(board: &Board) -> Outcome {
    match winner(board) {
        Some(Mark::Computer) => Outcome::ComputerWon,
        Some(Mark::Player) => Outcome::PlayerWon,
        None if is_draw(board) => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn selector() -> MoveSelector {
        MoveSelector::new(EngineConfig::default().with_parallel(false))
    }

    #[test]
    fn test_computer_moves_first() {
        let session = GameSession::new(GameSettings::default()).unwrap();
        assert!(session.is_computer_turn());
        assert!(!session.is_player_turn());
    }

    #[test]
    fn test_player_cannot_move_first() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        assert_eq!(
            session.play_player(Pos::new(0, 0)),
            Err(MoveRejection::NotYourTurn)
        );
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        let result = session.play_computer(&selector()).unwrap();
        assert_eq!(result.best_move, Pos::new(1, 1));
        assert!(session.is_player_turn());

        assert_eq!(session.play_player(Pos::new(0, 0)), Ok(Outcome::Ongoing));
        assert!(session.is_computer_turn());
        assert_eq!(session.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        session.apply_computer(Pos::new(1, 1)).unwrap();
        let err = session.play_player(Pos::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            MoveRejection::Illegal(EngineError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(err.to_string(), "Place taken");
    }

    #[test]
    fn test_computer_win_detected() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        session.apply_computer(Pos::new(0, 0)).unwrap();
        session.play_player(Pos::new(1, 0)).unwrap();
        session.apply_computer(Pos::new(0, 1)).unwrap();
        session.play_player(Pos::new(2, 2)).unwrap();

        let result = session.play_computer(&selector()).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 2));
        assert_eq!(session.outcome(), Outcome::ComputerWon);
        assert_eq!(
            session.winning_line(),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert_eq!(session.to_move(), None);
        assert_eq!(
            session.play_player(Pos::new(2, 0)),
            Err(MoveRejection::GameOver)
        );
    }

    #[test]
    fn test_draw_detected() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        // o x o / o x x / x o o
        let moves = [
            (Mark::Computer, (0, 0)),
            (Mark::Player, (0, 1)),
            (Mark::Computer, (0, 2)),
            (Mark::Player, (1, 1)),
            (Mark::Computer, (1, 0)),
            (Mark::Player, (2, 0)),
            (Mark::Computer, (2, 1)),
            (Mark::Player, (1, 2)),
        ];
        for (mark, (r, c)) in moves {
            let outcome = match mark {
                Mark::Computer => session.apply_computer(Pos::new(r, c)).unwrap(),
                Mark::Player => session.play_player(Pos::new(r, c)).unwrap(),
            };
            assert_eq!(outcome, Outcome::Ongoing);
        }
        assert_eq!(session.apply_computer(Pos::new(2, 2)), Ok(Outcome::Draw));
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_undo_pair() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        session.apply_computer(Pos::new(1, 1)).unwrap();
        session.play_player(Pos::new(0, 0)).unwrap();
        session.apply_computer(Pos::new(0, 1)).unwrap();

        session.undo();
        assert_eq!(session.history(), &[(Pos::new(1, 1), Mark::Computer)]);
        assert!(session.is_player_turn());
    }

    #[test]
    fn test_undo_single_player_move() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        session.apply_computer(Pos::new(1, 1)).unwrap();
        session.play_player(Pos::new(0, 0)).unwrap();

        session.undo();
        assert_eq!(session.history().len(), 1);
        assert!(session.is_player_turn());
    }

    #[test]
    fn test_undo_keeps_state_when_rebuild_fails() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        session.apply_computer(Pos::new(1, 1)).unwrap();
        session.play_player(Pos::new(0, 0)).unwrap();
        session.settings.rows = 0;

        session.undo();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.board().empty_count(), 7);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut session = GameSession::new(GameSettings::default()).unwrap();
        session.apply_computer(Pos::new(0, 0)).unwrap();
        session.play_player(Pos::new(1, 0)).unwrap();
        session.apply_computer(Pos::new(0, 1)).unwrap();
        session.play_player(Pos::new(1, 1)).unwrap();
        session.apply_computer(Pos::new(0, 2)).unwrap();
        assert_eq!(session.outcome(), Outcome::ComputerWon);

        session.undo();
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert_eq!(session.history().len(), 3);
        assert!(session.is_player_turn());
    }

    #[test]
    fn test_evaluate() {
        let board = Board::new(3, 3, 3).unwrap();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }
}
