//! Action history.
//!
//! Each engine defines its own action type (a checkers `Move`, an Omi
//! call/pass/play). Accepted actions are recorded as [`ActionRecord`]s so a
//! game can be replayed or audited by the surrounding application.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// An accepted action with the seat that took it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord<A> {
    /// The seat that acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: A,

    /// Position in the game's action sequence, starting at 0.
    pub sequence: u32,
}

impl<A> ActionRecord<A> {
    #[must_use]
    pub fn new(player: PlayerId, action: A, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
