//! Move generation and application.
//!
//! Captures dominate twice over: a piece with a jump offers no simple
//! moves, and a side with any jump anywhere offers only jumps.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Illegal, RuleError};

use super::board::{Board, Piece, Position, Rank, Side};

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A single step or a single jump. Multi-jumps are a chain of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub is_jump: bool,
}

impl Move {
    #[must_use]
    pub const fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            is_jump: false,
        }
    }

    #[must_use]
    pub const fn jump(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            is_jump: true,
        }
    }

    /// Square of the piece this move captures.
    #[must_use]
    pub fn captured(&self) -> Option<Position> {
        self.is_jump.then(|| self.from.midpoint(self.to))
    }
}

/// Per-piece moves; a king has at most four.
pub type PieceMoves = SmallVec<[Move; 4]>;

fn directions(piece: Piece) -> SmallVec<[(i8, i8); 4]> {
    match piece.rank() {
        Rank::King => SmallVec::from_slice(&DIAGONALS),
        Rank::Pawn => {
            let forward = piece.owner().forward();
            DIAGONALS.iter().copied().filter(|(dr, _)| *dr == forward).collect()
        }
    }
}

/// Moves for `piece` standing on `at`. If it can jump, only its jumps.
pub fn legal_moves_for(piece: Piece, at: Position, board: &Board) -> PieceMoves {
    let mut steps = PieceMoves::new();
    let mut jumps = PieceMoves::new();

    for dir in directions(piece) {
        let Some(adjacent) = at.step(dir, 1) else {
            continue;
        };
        match board.get(adjacent) {
            None => steps.push(Move::step(at, adjacent)),
            Some(other) if other.owner() != piece.owner() => {
                if let Some(landing) = at.step(dir, 2).filter(|sq| board.is_empty(*sq)) {
                    jumps.push(Move::jump(at, landing));
                }
            }
            Some(_) => {}
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}

/// Jumps only, for chain continuation.
pub fn legal_jumps_for(piece: Piece, at: Position, board: &Board) -> PieceMoves {
    let mut moves = legal_moves_for(piece, at, board);
    moves.retain(|mv| mv.is_jump);
    moves
}

/// Every legal move for `side`, filtered to jumps when any exist.
///
/// Empty means `side` is stuck and loses.
pub fn legal_moves_for_player(board: &Board, side: Side) -> Vec<Move> {
    let mut moves: Vec<Move> = board
        .pieces(side)
        .flat_map(|(pos, piece)| legal_moves_for(piece, pos, board))
        .collect();

    if moves.iter().any(|mv| mv.is_jump) {
        moves.retain(|mv| mv.is_jump);
    }
    moves
}

/// Board after a move, and what the move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    /// The moved piece in its final state.
    pub piece: Piece,
    pub was_jump: bool,
    pub promoted: bool,
}

/// Relocate the piece, remove the captured one, crown on the far row.
///
/// No legality check beyond the geometry of the move itself; the engine
/// validates against the legal set first.
pub fn apply_move(board: &Board, mv: &Move) -> Result<AppliedMove, RuleError> {
    let mut next = *board;
    let piece = next
        .remove(mv.from)
        .ok_or(RuleError::IllegalAction(Illegal::NotLegal))?;

    if let Some(captured) = mv.captured() {
        if next.remove(captured).is_none() {
            return Err(Illegal::NotLegal.into());
        }
    }

    let promoted = !piece.is_king() && mv.to.row() == piece.owner().promotion_row();
    let piece = if promoted { piece.promoted() } else { piece };
    next.place(mv.to, piece);

    Ok(AppliedMove {
        board: next,
        piece,
        was_jump: mv.is_jump,
        promoted,
    })
}
