//! Concrete rule sets.
//!
//! - `checkers`: the capture game
//! - `omi`: the four-seat partnership trick game

pub mod checkers;
pub mod omi;
