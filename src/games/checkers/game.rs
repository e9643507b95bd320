//! Capture-game engine: turn order, capture chains and game end.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, Illegal, PlayerId, RuleError};
use crate::rules::{GameResult, RulesEngine};

use super::board::{Board, Position, Side};
use super::moves::{apply_move, legal_jumps_for, legal_moves_for_player, Move};

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckersSignal {
    /// The turn passed to `next`.
    Continue { next: Side },
    /// The piece now on `at` must keep jumping; the turn does not pass.
    ChainContinues { at: Position },
    /// The side to move is stuck; `winner` made the last move.
    GameEnded { winner: Side },
}

/// Complete state of one checkers game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersState {
    board: Board,
    current: Side,
    forced_continuation: Option<Position>,
    winner: Option<Side>,
    history: Vector<ActionRecord<Move>>,
}

impl CheckersState {
    /// Standard opening, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Side::White)
    }

    /// Arbitrary position with `to_move` on turn. A side with no moves has
    /// already lost.
    #[must_use]
    pub fn with_board(board: Board, to_move: Side) -> Self {
        let winner = legal_moves_for_player(&board, to_move)
            .is_empty()
            .then(|| to_move.opponent());
        Self {
            board,
            current: to_move,
            forced_continuation: None,
            winner,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side on turn, meaningful until the game ends.
    #[must_use]
    pub fn current(&self) -> Side {
        self.current
    }

    /// The piece that must keep jumping, if a chain is in progress.
    #[must_use]
    pub fn forced_continuation(&self) -> Option<Position> {
        self.forced_continuation
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Accepted moves in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord<Move>> {
        &self.history
    }
}

impl Default for CheckersState {
    fn default() -> Self {
        Self::new()
    }
}

/// The checkers rules. Stateless; every game lives in its own
/// [`CheckersState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Checkers;

impl Checkers {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Legal moves for the side on turn, honouring a capture chain.
    #[must_use]
    pub fn legal_moves(&self, state: &CheckersState) -> Vec<Move> {
        if state.winner.is_some() {
            return Vec::new();
        }

        match state.forced_continuation {
            Some(at) => state
                .board
                .get(at)
                .map(|piece| legal_jumps_for(piece, at, &state.board).into_vec())
                .unwrap_or_default(),
            None => legal_moves_for_player(&state.board, state.current),
        }
    }

    fn validate(&self, state: &CheckersState, actor: PlayerId, mv: &Move) -> Result<(), RuleError> {
        if state.winner.is_some() {
            return Err(Illegal::GameOver.into());
        }

        let expected = state.current.player();
        if actor != expected {
            return Err(RuleError::OutOfTurn { expected, actual: actor });
        }

        let legal = self.legal_moves(state);
        if legal.contains(mv) {
            return Ok(());
        }

        let reason = match state.forced_continuation {
            Some(at) if mv.from != at => Illegal::ChainInProgress {
                row: at.row(),
                col: at.col(),
            },
            _ if !mv.is_jump && legal.iter().any(|m| m.is_jump) => Illegal::MustCapture,
            _ => Illegal::NotLegal,
        };
        Err(reason.into())
    }
}

impl RulesEngine for Checkers {
    type State = CheckersState;
    type Action = Move;
    type Signal = CheckersSignal;

    fn initial_state(&self) -> CheckersState {
        CheckersState::new()
    }

    fn current_actor(&self, state: &CheckersState) -> Option<PlayerId> {
        state.winner.is_none().then(|| state.current.player())
    }

    fn legal_actions(&self, state: &CheckersState) -> Vec<Move> {
        self.legal_moves(state)
    }

    fn apply_action(
        &self,
        state: &mut CheckersState,
        actor: PlayerId,
        mv: &Move,
    ) -> Result<CheckersSignal, RuleError> {
        if let Err(err) = self.validate(state, actor, mv) {
            tracing::debug!(%actor, from = %mv.from, to = %mv.to, %err, "checkers move rejected");
            return Err(err);
        }

        let applied = apply_move(&state.board, mv)?;
        let mover = state.current;

        state.board = applied.board;
        let sequence = state.history.len() as u32;
        state.history.push_back(ActionRecord::new(actor, *mv, sequence));
        tracing::trace!(side = %mover, from = %mv.from, to = %mv.to, jump = mv.is_jump, "checkers move applied");

        if applied.was_jump && !legal_jumps_for(applied.piece, mv.to, &state.board).is_empty() {
            state.forced_continuation = Some(mv.to);
            return Ok(CheckersSignal::ChainContinues { at: mv.to });
        }

        state.forced_continuation = None;
        state.current = mover.opponent();

        if legal_moves_for_player(&state.board, state.current).is_empty() {
            state.winner = Some(mover);
            tracing::debug!(winner = %mover, moves = state.history.len(), "checkers game ended");
            return Ok(CheckersSignal::GameEnded { winner: mover });
        }

        Ok(CheckersSignal::Continue { next: state.current })
    }

    fn is_terminal(&self, state: &CheckersState) -> Option<GameResult> {
        state.winner.map(|side| GameResult::Winner(side.player()))
    }
}
