//! Omi: a four-player partnership trick-taking game.
//!
//! Seats 0 and 2 play against seats 1 and 3 with a 32-card deck. Each round
//! one player calls trump after seeing four cards, everyone receives four
//! more, and eight tricks are played. The calling team needs five of them.
//!
//! ## Round flow
//!
//! ```text
//! Dealing -> Trumping -> Playing -> Scoring -> Dealing ... -> Finished
//!               |
//!               +-- all four pass: redeal, dealer moves left
//! ```
//!
//! ## Example
//!
//! ```
//! use table_rules::games::omi::{Omi, OmiConfig, OmiSignal, Phase};
//! use table_rules::rules::RulesEngine;
//!
//! let engine = Omi::new(OmiConfig::default().with_seed(42));
//! let mut state = engine.initial_state();
//! assert_eq!(state.phase(), Phase::Trumping);
//!
//! let caller = engine.current_actor(&state).unwrap();
//! let call = engine.legal_actions(&state)[0];
//! let signal = engine.apply_action(&mut state, caller, &call).unwrap();
//! assert_eq!(signal, OmiSignal::Continue);
//! assert_eq!(state.phase(), Phase::Playing);
//! ```

mod cards;
mod config;
mod game;
mod scoring;
mod trick;

pub use cards::{full_deck, Card, CardParseError, Rank, Suit, DECK_SIZE};
pub use config::OmiConfig;
pub use game::{Omi, OmiAction, OmiSignal, OmiState, Phase};
pub use scoring::{
    score_round, RoundResult, Team, TeamScore, KAPOTHI_POINTS, MADE_POINTS, TRICKS_TO_MAKE,
};
pub use trick::{card_beats, hand_has_suit, legal_plays, Play, Trick};

/// Seats at the table.
pub const SEATS: usize = 4;

/// Cards each seat receives before trump is called, and again after.
pub const DEAL_BATCH: usize = 4;

/// Tricks in a round (and cards in a full hand).
pub const TRICKS_PER_ROUND: usize = 8;
