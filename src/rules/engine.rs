//! The narrow interface both engines implement.
//!
//! Games implement `RulesEngine` to define:
//! - Who is on turn and what they may do
//! - How an accepted action changes state
//! - When the game is over and who won
//!
//! The two rule sets share nothing beyond this shape.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RuleError};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// A winning partnership.
    Winners(Vec<PlayerId>),
    /// No winner.
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Outcome of submitting an action through [`RulesEngine::apply`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict<S> {
    /// The action was applied; the engine reports what happened.
    Accepted(S),
    /// The action was refused and the state is unchanged.
    Rejected(RuleError),
}

impl<S> Verdict<S> {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected(_))
    }

    /// The signal, if the action was accepted.
    #[must_use]
    pub fn accepted(self) -> Option<S> {
        match self {
            Verdict::Accepted(signal) => Some(signal),
            Verdict::Rejected(_) => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: must validate completely before touching `state`, so a
///   rejected action leaves it bit-for-bit unchanged
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Self-contained game state. Independent games share nothing.
    type State: Clone;
    /// A move, call, pass or card play.
    type Action: Clone + PartialEq + std::fmt::Debug;
    /// What an accepted action did.
    type Signal;

    /// Fresh state for a new game.
    fn initial_state(&self) -> Self::State;

    /// The seat on turn, `None` once the game is over.
    fn current_actor(&self, state: &Self::State) -> Option<PlayerId>;

    /// Actions the seat on turn may take.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` for `actor` in place.
    fn apply_action(
        &self,
        state: &mut Self::State,
        actor: PlayerId,
        action: &Self::Action,
    ) -> Result<Self::Signal, RuleError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Pure transition: `(state, action) -> (state', verdict)`.
    ///
    /// A rejected action returns a copy of the input state.
    fn apply(
        &self,
        state: &Self::State,
        actor: PlayerId,
        action: &Self::Action,
    ) -> (Self::State, Verdict<Self::Signal>) {
        let mut next = state.clone();
        match self.apply_action(&mut next, actor, action) {
            Ok(signal) => (next, Verdict::Accepted(signal)),
            Err(err) => (state.clone(), Verdict::Rejected(err)),
        }
    }

    /// Whether `action` is currently legal for the seat on turn.
    fn is_legal(&self, state: &Self::State, action: &Self::Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}
