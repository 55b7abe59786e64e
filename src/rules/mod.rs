//! Game rules for m,n,k tic-tac-toe
//!
//! The only rule is alignment: `k` same-mark cells in a row, column or
//! diagonal win. A full board without such a line is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{find_line, has_line, is_draw, winner, LineFilter};
