//! Omi engine behaviour through the public `RulesEngine` interface.
//!
//! Developer notes:
//! - Increase cases locally with `PROPTEST_CASES=500`.
//! - The trick-winner oracle ranks cards on its own and shares no code with
//!   `Trick::winner`.

mod common;

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use table_rules::core::{Illegal, RuleError};
use table_rules::games::omi::{
    full_deck, Card, Omi, OmiAction, OmiConfig, OmiSignal, OmiState, Phase, Rank, Suit, Team,
    TeamScore, Trick, DECK_SIZE, SEATS,
};
use table_rules::rules::{play_out, FirstLegal, GameResult, RulesEngine, UniformRandom};
use table_rules::{GameRng, PlayerId};

const MAX_ACTIONS: usize = 5_000;

fn seeded(seed: u64) -> Omi {
    Omi::new(OmiConfig::default().with_seed(seed))
}

fn census_is_full_deck(state: &OmiState) -> bool {
    let census = state.card_census();
    let unique: FxHashSet<Card> = census.iter().copied().collect();
    census.len() == DECK_SIZE && unique.len() == DECK_SIZE
}

/// Independent trick oracle: trump first, then lead suit, then rank.
fn oracle_winner(cards: &[Card], leader: PlayerId, trump: Option<Suit>) -> PlayerId {
    fn rank_score(rank: Rank) -> u8 {
        match rank {
            Rank::Ace => 8,
            Rank::King => 7,
            Rank::Queen => 6,
            Rank::Jack => 5,
            Rank::Ten => 4,
            Rank::Nine => 3,
            Rank::Eight => 2,
            Rank::Seven => 1,
        }
    }

    let lead = cards[0].suit;
    let key = |c: &Card| (trump == Some(c.suit), c.suit == lead, rank_score(c.rank));
    let best = (0..cards.len()).max_by_key(|&i| key(&cards[i])).unwrap();
    leader.offset(best, SEATS)
}

#[test]
fn test_first_legal_finishes_a_match() {
    common::init_logging();
    let engine = seeded(21);
    let mut state = engine.initial_state();
    let mut rng = GameRng::new(0);

    let result = play_out(&engine, &mut state, &FirstLegal, &mut rng, MAX_ACTIONS);

    let Some(GameResult::Winners(seats)) = result.clone() else {
        panic!("match did not finish: {result:?}");
    };
    let team = Team::of(seats[0]);
    assert_eq!(seats, team.members().to_vec());
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.winner(), Some(team));
    assert!(state.points().get(team) >= 10);
    assert!(state.points().get(team.other()) < 10);
}

#[test]
fn test_same_seed_same_match() {
    common::init_logging();
    let engine = seeded(77);
    let mut a = engine.initial_state();
    let mut b = engine.initial_state();

    play_out(&engine, &mut a, &UniformRandom, &mut GameRng::new(5), 300);
    play_out(&engine, &mut b, &UniformRandom, &mut GameRng::new(5), 300);
    assert_eq!(a, b);
}

#[test]
fn test_unseeded_match_deals() {
    common::init_logging();
    let engine = Omi::default();
    let state = engine.initial_state();

    assert_eq!(state.phase(), Phase::Trumping);
    assert!(census_is_full_deck(&state));
    assert_eq!(engine.current_actor(&state), Some(state.dealer().next(SEATS)));
}

#[test]
fn test_all_pass_redeal_keeps_scores() {
    common::init_logging();
    let engine = Omi::new(OmiConfig::default().with_seed(4).with_dealer(PlayerId::new(1)));
    let mut state = engine.initial_state();
    let first_hands = state.hands().clone();

    let mut last = None;
    for seat in PlayerId::new(2).clockwise(SEATS) {
        last = Some(engine.apply_action(&mut state, seat, &OmiAction::Pass).unwrap());
    }

    assert_eq!(last, Some(OmiSignal::Redealt { dealer: PlayerId::new(2) }));
    assert_eq!(state.dealer(), PlayerId::new(2));
    assert_eq!(state.points(), TeamScore::default());
    assert_eq!(state.phase(), Phase::Trumping);
    assert_eq!(engine.current_actor(&state), Some(PlayerId::new(3)));
    assert_ne!(state.hands(), &first_hands);
    assert!(census_is_full_deck(&state));
}

#[test]
fn test_call_outside_trumping_is_wrong_phase() {
    common::init_logging();
    let engine = seeded(8);
    let mut state = engine.initial_state();
    let caller = engine.current_actor(&state).unwrap();
    engine
        .apply_action(&mut state, caller, &OmiAction::CallTrump(Suit::Clubs))
        .unwrap();

    let (after, verdict) = engine.apply(&state, caller, &OmiAction::Pass);
    assert_eq!(
        verdict.accepted(),
        None,
        "pass must be refused once trick play has begun"
    );
    assert_eq!(after, state);

    let err = engine
        .apply_action(&mut state, caller, &OmiAction::CallTrump(Suit::Hearts))
        .unwrap_err();
    assert_eq!(
        err,
        RuleError::IllegalAction(Illegal::WrongPhase {
            phase: "playing".into()
        })
    );
}

#[test]
fn test_play_out_of_turn() {
    common::init_logging();
    let engine = seeded(8);
    let mut state = engine.initial_state();
    let caller = engine.current_actor(&state).unwrap();
    engine
        .apply_action(&mut state, caller, &OmiAction::CallTrump(Suit::Diamonds))
        .unwrap();

    let other = caller.next(SEATS);
    let card = state.hand(other)[0];
    let before = state.clone();

    let err = engine
        .apply_action(&mut state, other, &OmiAction::Play(card))
        .unwrap_err();
    assert_eq!(
        err,
        RuleError::OutOfTurn {
            expected: caller,
            actual: other
        }
    );
    assert_eq!(state, before);
}

proptest! {
    #![proptest_config(common::proptest_config())]

    #[test]
    fn trick_winner_matches_oracle(
        cards in proptest::sample::subsequence(full_deck(), 4).prop_shuffle(),
        trump in proptest::option::of(proptest::sample::select(Suit::ALL.to_vec())),
        leader in 0u8..4,
    ) {
        let leader = PlayerId::new(leader);
        let mut trick = Trick::new();
        for (i, card) in cards.iter().enumerate() {
            trick.push(leader.offset(i, SEATS), *card);
        }

        let winner = trick.winner(trump);
        prop_assert_eq!(winner, Some(oracle_winner(&cards, leader, trump)));
        prop_assert_eq!(winner, trick.winner(trump));
    }

    #[test]
    fn random_matches_hold_invariants(seed in any::<u64>(), bot_seed in any::<u64>()) {
        common::init_logging();
        let engine = seeded(seed);
        let mut state = engine.initial_state();
        let mut rng = GameRng::new(bot_seed);

        for _ in 0..MAX_ACTIONS {
            prop_assert!(census_is_full_deck(&state));
            if engine.is_terminal(&state).is_some() {
                break;
            }

            let actor = engine.current_actor(&state).unwrap();
            let legal = engine.legal_actions(&state);
            prop_assert!(!legal.is_empty());

            if state.phase() == Phase::Playing {
                if let Some(lead) = state.trick().lead() {
                    let hand = state.hand(actor);
                    if hand.iter().any(|c| c.suit == lead) {
                        prop_assert!(legal.iter().all(|a| matches!(a, OmiAction::Play(c) if c.suit == lead)));
                    }
                }

                // Someone else's card is never accepted from the seat on turn.
                let stranger = actor.next(SEATS);
                if let Some(&card) = state.hand(stranger).first() {
                    let (after, verdict) = engine.apply(&state, actor, &OmiAction::Play(card));
                    prop_assert!(verdict.is_rejected());
                    prop_assert_eq!(&after, &state);
                }
            }

            let action = *rng.choose(&legal).unwrap();
            let points_before = state.points();
            let dealer_before = state.dealer();

            let signal = engine.apply_action(&mut state, actor, &action).unwrap();

            match signal {
                OmiSignal::RoundEnded { result } | OmiSignal::MatchEnded { result, .. } => {
                    let mut expected = points_before;
                    expected.add(result.awarded_to, result.points);
                    prop_assert_eq!(state.points(), expected);
                    prop_assert_eq!(result.tricks.total(), 8);
                    prop_assert_eq!(result.kapothi, result.tricks.get(result.calling_team) < 5);
                }
                OmiSignal::Redealt { dealer } => {
                    prop_assert_eq!(dealer, dealer_before.next(SEATS));
                    prop_assert_eq!(state.points(), points_before);
                }
                _ => {
                    prop_assert_eq!(state.points(), points_before);
                }
            }
        }
    }
}
