//! Core building blocks shared by both engines: seats, RNG, action history,
//! the rejection taxonomy and state snapshots.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;
pub mod snapshot;

pub use action::ActionRecord;
pub use error::{Illegal, RuleError, SnapshotError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
