//! Checkers on the standard 8×8 board.
//!
//! - Pawns step diagonally forward; kings step in all four diagonals
//! - Captures are mandatory across the whole board
//! - A piece that captured keeps capturing while it can; the turn only
//!   passes when its chain is exhausted
//! - A pawn reaching the far row is crowned
//! - The side to move with no legal move loses

mod board;
mod game;
mod moves;

pub use board::{Board, BoardParseError, Piece, Position, Rank, Side, Square, BOARD_SIZE};
pub use game::{Checkers, CheckersSignal, CheckersState};
pub use moves::{
    apply_move, legal_jumps_for, legal_moves_for, legal_moves_for_player, AppliedMove, Move,
    PieceMoves,
};
