//! Terminal front end
//!
//! Moves are typed as `row, column` (both starting at 1). The computer
//! moves first and reports its progress while it thinks.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::board::{Board, Pos};
use crate::config::GameSettings;
use crate::engine::MoveSelector;
use crate::error::EngineError;
use crate::session::{GameSession, MoveRejection, Outcome};

const HELP_MESSAGE: &str = "
Moves should be in the form \"row, column\".
So if you wanted to go to the first row, first column,
you'd type \"1, 1\"
";

/// Parse `"row, column"` (1-based) into a zero-based position
pub fn parse_move(input: &str, board: &Board) -> Option<Pos> {
    let (row, col) = input.trim().split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    let pos = Pos::new(row.checked_sub(1)?, col.checked_sub(1)?);
    board.contains(pos).then_some(pos)
}

/// Play one game on stdin/stdout
pub fn run(settings: GameSettings, parallel: bool) -> Result<Outcome, EngineError> {
    let mut session = GameSession::new(settings)?;
    let selector = MoveSelector::new(settings.engine_config().with_parallel(parallel))
        .with_listener(|percent| {
            print!("\rComputer processing... {}%", percent);
            let _ = io::stdout().flush();
        });

    println!("During your turn, type \"help\" for help.");
    println!("Computer goes first!\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let result = session.play_computer(&selector)?;
        if !result.scores.is_empty() {
            println!();
        }
        println!("Computer takes turn:");
        println!("{}", session.board());

        match session.outcome() {
            Outcome::ComputerWon => {
                println!("The computer won!!!");
                return Ok(Outcome::ComputerWon);
            }
            Outcome::Draw => {
                println!("It's a draw!!!");
                return Ok(Outcome::Draw);
            }
            _ => {}
        }

        loop {
            print!("Enter your move: ");
            let _ = io::stdout().flush();

            let Some(Ok(line)) = lines.next() else {
                warn!("input closed before the game finished");
                return Ok(session.outcome());
            };
            if line.trim() == "help" {
                println!("{}", HELP_MESSAGE);
                continue;
            }
            let Some(pos) = parse_move(&line, session.board()) else {
                println!("Invalid entry! Invalid formatting. Try again.\n");
                continue;
            };
            match session.play_player(pos) {
                Ok(_) => break,
                Err(MoveRejection::Illegal(EngineError::CellOccupied { .. })) => {
                    println!("Invalid entry! Place taken. Try again.\n");
                }
                Err(err) => {
                    println!("Invalid entry! {}. Try again.\n", err);
                }
            }
        }
        println!("{}", session.board());

        match session.outcome() {
            Outcome::PlayerWon => {
                println!("You won!!!");
                return Ok(Outcome::PlayerWon);
            }
            Outcome::Draw => {
                println!("It's a draw!!!");
                return Ok(Outcome::Draw);
            }
            _ => {}
        }
    }
}
