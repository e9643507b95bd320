//! # table-rules
//!
//! Deterministic rules engines for two table games: checkers and Omi, a
//! four-player partnership trick-taking card game.
//!
//! ## Design Principles
//!
//! 1. **Pure state machines**: every engine is `(state, action) -> (state',
//!    signal)`. No I/O, no timers, no shared globals.
//!
//! 2. **Rejection is a value**: an illegal or out-of-turn action comes back
//!    as a [`RuleError`] and leaves the state untouched. The caller offers
//!    the legal set again.
//!
//! 3. **One shape, two games**: both engines implement [`RulesEngine`], so
//!    a front end or bot drives either the same way.
//!
//! ## Architecture
//!
//! - **Independent games**: each game lives in its own state value. Run as
//!   many side by side as you like without locking.
//!
//! - **Persistent history**: accepted actions go into an `im::Vector`, so
//!   cloning a state for a bot to explore is cheap.
//!
//! - **Reproducible deals**: Omi shuffles with a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, action history, errors, snapshots
//! - `rules`: `RulesEngine` trait, game results, bot policies
//! - `games::checkers`: The capture game
//! - `games::omi`: The trick game
//!
//! ## Quick start
//!
//! ```
//! use table_rules::games::checkers::Checkers;
//! use table_rules::rules::{play_out, RulesEngine, UniformRandom};
//! use table_rules::GameRng;
//!
//! let engine = Checkers::new();
//! let mut state = engine.initial_state();
//! let mut rng = GameRng::new(3);
//! let _ = play_out(&engine, &mut state, &UniformRandom, &mut rng, 500);
//! ```

pub mod core;
pub mod games;
pub mod rules;

pub use crate::core::{
    ActionRecord, GameRng, GameRngState, Illegal, PlayerId, PlayerMap, RuleError, SnapshotError,
};

pub use crate::rules::{play_out, FirstLegal, GameResult, Policy, RulesEngine, UniformRandom, Verdict};
