//! Bot strategies, decoupled from the engines.
//!
//! A policy only ever picks from the legal set it is handed, and its choice
//! still goes through [`RulesEngine::apply_action`]. The engines assume no
//! particular bot algorithm. Timing (a delay before a bot acts) belongs to
//! whatever schedules the bot, not here.

use crate::core::GameRng;

use super::engine::{GameResult, RulesEngine};

/// Strategy for choosing an action from the legal set.
pub trait Policy<E: RulesEngine> {
    /// Choose one of `legal`, or `None` if it is empty.
    fn choose_action(
        &self,
        engine: &E,
        state: &E::State,
        legal: &[E::Action],
        rng: &mut GameRng,
    ) -> Option<E::Action>;
}

/// Always plays the first legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl<E: RulesEngine> Policy<E> for FirstLegal {
    fn choose_action(
        &self,
        _engine: &E,
        _state: &E::State,
        legal: &[E::Action],
        _rng: &mut GameRng,
    ) -> Option<E::Action> {
        legal.first().cloned()
    }
}

/// Uniform over the legal set.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl<E: RulesEngine> Policy<E> for UniformRandom {
    fn choose_action(
        &self,
        _engine: &E,
        _state: &E::State,
        legal: &[E::Action],
        rng: &mut GameRng,
    ) -> Option<E::Action> {
        rng.choose(legal).cloned()
    }
}

/// Drive a game with `policy` in every seat until it ends or `max_steps`
/// actions have been applied.
///
/// Returns the result if the game finished.
pub fn play_out<E, P>(
    engine: &E,
    state: &mut E::State,
    policy: &P,
    rng: &mut GameRng,
    max_steps: usize,
) -> Option<GameResult>
where
    E: RulesEngine,
    P: Policy<E>,
{
    for _ in 0..max_steps {
        if let Some(result) = engine.is_terminal(state) {
            return Some(result);
        }

        let actor = engine.current_actor(state)?;
        let legal = engine.legal_actions(state);
        let action = policy.choose_action(engine, state, &legal, rng)?;

        if let Err(err) = engine.apply_action(state, actor, &action) {
            tracing::warn!(%actor, ?action, %err, "policy chose a rejected action");
            return None;
        }
    }

    engine.is_terminal(state)
}
