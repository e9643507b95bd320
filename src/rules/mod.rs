//! Rules engine trait and bot policies.
//!
//! Both games implement `RulesEngine`: legal actions for the seat on turn,
//! applying an action, and terminal detection. Policies choose actions for
//! bots without the engine knowing how.

pub mod engine;
pub mod policy;

pub use engine::{GameResult, RulesEngine, Verdict};
pub use policy::{play_out, FirstLegal, Policy, UniformRandom};
