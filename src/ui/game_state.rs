//! Game state management for the m,n,k GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, warn};

use crate::config::GameSettings;
use crate::engine::{MoveResult, MoveSelector};
use crate::error::{EngineError, Result};
use crate::search::Progress;
use crate::session::{GameSession, Outcome};
use crate::Pos;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult>>,
        progress: Progress,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    /// Settings edited in the side panel, applied on the next new game
    pub pending_settings: GameSettings,
    pub last_ai_result: Option<MoveResult>,
    pub last_ai_time: Option<Duration>,
    pub ai_state: AiState,
    pub message: Option<String>,
    selector: MoveSelector,
    parallel: bool,
}

impl GameState {
    pub fn new(settings: GameSettings, parallel: bool) -> Result<Self> {
        Ok(Self {
            session: GameSession::new(settings)?,
            pending_settings: settings,
            last_ai_result: None,
            last_ai_time: None,
            ai_state: AiState::Idle,
            message: None,
            selector: Self::selector_for(settings, parallel),
            parallel,
        })
    }

    fn selector_for(settings: GameSettings, parallel: bool) -> MoveSelector {
        MoveSelector::new(settings.engine_config().with_parallel(parallel))
    }

    /// Start over with the pending settings, abandoning any running search
    pub fn reset(&mut self) {
        if self.is_ai_thinking() {
            self.selector.cancel_token().cancel();
        }
        let settings = self.pending_settings;
        match GameSession::new(settings) {
            Ok(session) => {
                self.session = session;
                self.selector = Self::selector_for(settings, self.parallel);
                self.last_ai_result = None;
                self.last_ai_time = None;
                self.ai_state = AiState::Idle;
                self.message = None;
            }
            Err(err) => {
                warn!(%err, "rejected game settings");
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_game_over(&self) -> bool {
        self.session.outcome().is_over()
    }

    /// Human input is accepted only on the player's turn while the AI is idle
    pub fn accepts_input(&self) -> bool {
        self.session.is_player_turn() && !self.is_ai_thinking()
    }

    /// Attempt to place the player's mark at the given position
    pub fn try_place(&mut self, pos: Pos) -> std::result::Result<(), String> {
        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }
        self.session.play_player(pos).map(|_| ()).map_err(|e| e.to_string())?;
        self.message = None;
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.session.is_computer_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.session.board().clone();
        let selector = self.selector.clone();
        let progress = selector.progress();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = selector.select_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            progress,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                ..
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.last_ai_time = Some(elapsed);

        match result {
            Ok(move_result) => {
                if let Err(err) = self.session.apply_computer(move_result.best_move) {
                    error!(%err, "engine returned an illegal move");
                    self.message = Some(err.to_string());
                }
                self.last_ai_result = Some(move_result);
            }
            Err(EngineError::Cancelled) => {}
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Percentage of candidates scored by the running search
    pub fn ai_progress(&self) -> Option<u8> {
        match &self.ai_state {
            AiState::Thinking { progress, .. } => Some(progress.percent()),
            AiState::Idle => None,
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo the last player move (and the computer reply after it)
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        self.session.undo();
        self.message = None;
    }

    pub fn outcome_text(&self) -> Option<&'static str> {
        match self.session.outcome() {
            Outcome::Ongoing => None,
            Outcome::ComputerWon => Some("The computer won!"),
            Outcome::PlayerWon => Some("You won!"),
            Outcome::Draw => Some("It's a draw!"),
        }
    }
}
