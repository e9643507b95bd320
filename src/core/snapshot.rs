//! Compact binary snapshots of game state.
//!
//! Engines hold no I/O. The surrounding application persists a game by
//! encoding its state value and restores it later by decoding the bytes;
//! the restored value behaves identically, RNG stream included.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::SnapshotError;

/// Encode a state (or any serde value) with bincode.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(value)?)
}

/// Decode bytes produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}
