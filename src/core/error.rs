//! Rejection taxonomy shared by both engines.
//!
//! Rejections are expected input from an untrusted caller (a human or a
//! bot). They are returned as values, never raised as panics, and an engine
//! never mutates state before deciding to reject.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RuleError {
    /// The action is not in the current legal set.
    #[error("illegal action: {0}")]
    IllegalAction(Illegal),

    /// The submitting seat is not the one on turn.
    #[error("out of turn: expected {expected}, got {actual}")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },
}

/// The specific rule an illegal action broke.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Illegal {
    #[error("not among the legal actions")]
    NotLegal,

    #[error("the piece on ({row}, {col}) must continue its capture chain")]
    ChainInProgress { row: u8, col: u8 },

    #[error("a capture is available and must be taken")]
    MustCapture,

    #[error("must follow the lead suit {lead}")]
    MustFollowSuit { lead: String },

    #[error("card not in hand")]
    CardNotInHand,

    #[error("not allowed during the {phase} phase")]
    WrongPhase { phase: String },

    #[error("the game is over")]
    GameOver,
}

impl From<Illegal> for RuleError {
    fn from(illegal: Illegal) -> Self {
        RuleError::IllegalAction(illegal)
    }
}

/// Failure to encode or decode a state snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
}
