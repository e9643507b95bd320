//! Trick-game engine: deal, trump call, trick play and match scoring.

use std::fmt;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, GameRng, Illegal, PlayerId, PlayerMap, RuleError};
use crate::rules::{GameResult, RulesEngine};

use super::cards::{full_deck, Card, Suit, DECK_SIZE};
use super::config::OmiConfig;
use super::scoring::{score_round, RoundResult, Team, TeamScore};
use super::trick::{hand_has_suit, legal_plays, Trick};
use super::{DEAL_BATCH, SEATS, TRICKS_PER_ROUND};

/// Where a round stands. Dealing and Scoring are transient: the engine
/// passes through them inside a single action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    Trumping,
    Playing,
    Scoring,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Dealing => "dealing",
            Phase::Trumping => "trumping",
            Phase::Playing => "playing",
            Phase::Scoring => "scoring",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OmiAction {
    CallTrump(Suit),
    Pass,
    Play(Card),
}

impl fmt::Display for OmiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmiAction::CallTrump(suit) => write!(f, "call {suit}"),
            OmiAction::Pass => f.write_str("pass"),
            OmiAction::Play(card) => write!(f, "play {card}"),
        }
    }
}

/// What an accepted action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OmiSignal {
    /// Trump was called and the rest of the deck dealt. The caller leads.
    Continue,
    /// The turn moved on within the trumping or trick in progress.
    TurnPassed { next: PlayerId },
    /// A trick completed; `winner` leads the next one.
    TrickWon { winner: PlayerId },
    /// The round was thrown in and dealt again by `dealer`.
    Redealt { dealer: PlayerId },
    /// The eighth trick was scored and the next round dealt.
    RoundEnded { result: RoundResult },
    /// The eighth trick was scored and `winner` reached the target.
    MatchEnded { winner: Team, result: RoundResult },
}

/// Complete state of one Omi match.
///
/// Match points survive from round to round. Everything else is round-local
/// and rebuilt by each deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmiState {
    phase: Phase,
    round: u32,
    dealer: PlayerId,
    current: PlayerId,
    passes: u8,
    trump: Option<Suit>,
    trump_caller: Option<PlayerId>,
    deck: Vec<Card>,
    hands: PlayerMap<Vec<Card>>,
    trick: Trick,
    discards: Vec<Card>,
    tricks_won: TeamScore,
    points: TeamScore,
    target_points: u8,
    winner: Option<Team>,
    last_result: Option<RoundResult>,
    history: Vector<ActionRecord<OmiAction>>,
    rng: GameRng,
}

impl OmiState {
    /// A fresh match with the first round already dealt by `dealer`.
    #[must_use]
    pub fn new(dealer: PlayerId, target_points: u8, rng: GameRng) -> Self {
        assert!(dealer.index() < SEATS, "Dealer must be one of the {SEATS} seats");

        let mut state = Self {
            phase: Phase::Dealing,
            round: 0,
            dealer,
            current: dealer.next(SEATS),
            passes: 0,
            trump: None,
            trump_caller: None,
            deck: Vec::with_capacity(DECK_SIZE),
            hands: PlayerMap::with_default(SEATS),
            trick: Trick::new(),
            discards: Vec::with_capacity(DECK_SIZE),
            tricks_won: TeamScore::default(),
            points: TeamScore::default(),
            target_points,
            winner: None,
            last_result: None,
            history: Vector::new(),
            rng,
        };
        state.start_round();
        state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Deals so far in this match, redeals included.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// The seat on turn, meaningful in Trumping and Playing.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Passes so far in this round's trumping.
    #[must_use]
    pub fn passes(&self) -> u8 {
        self.passes
    }

    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    #[must_use]
    pub fn trump_caller(&self) -> Option<PlayerId> {
        self.trump_caller
    }

    /// Undealt cards.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// A seat's hand, sorted.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Vec<Card>> {
        &self.hands
    }

    #[must_use]
    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    /// Cards from completed tricks this round.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Tricks each team has taken this round.
    #[must_use]
    pub fn tricks_won(&self) -> TeamScore {
        self.tricks_won
    }

    /// Match points.
    #[must_use]
    pub fn points(&self) -> TeamScore {
        self.points
    }

    #[must_use]
    pub fn target_points(&self) -> u8 {
        self.target_points
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Result of the most recently scored round.
    #[must_use]
    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Accepted actions across the whole match, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord<OmiAction>> {
        &self.history
    }

    /// Every card the round holds: deck, hands, the open trick and the
    /// discards. Always the full deck with no duplicates.
    #[must_use]
    pub fn card_census(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(&self.deck);
        for hand in self.hands.values() {
            cards.extend_from_slice(hand);
        }
        cards.extend(self.trick.plays().iter().map(|p| p.card));
        cards.extend_from_slice(&self.discards);
        cards
    }

    fn cards_conserved(&self) -> bool {
        let census = self.card_census();
        let unique: FxHashSet<Card> = census.iter().copied().collect();
        census.len() == DECK_SIZE && unique.len() == DECK_SIZE
    }

    fn start_round(&mut self) {
        self.phase = Phase::Dealing;
        self.round += 1;

        self.deck = full_deck();
        self.rng.shuffle(&mut self.deck);
        for hand in self.hands.values_mut() {
            hand.clear();
        }
        self.trick = Trick::new();
        self.discards.clear();
        self.trump = None;
        self.trump_caller = None;
        self.passes = 0;
        self.tricks_won = TeamScore::default();

        self.deal_batch();
        self.phase = Phase::Trumping;
        self.current = self.dealer.next(SEATS);
        tracing::debug!(round = self.round, dealer = %self.dealer, "omi round dealt");
    }

    /// One card at a time, starting left of the dealer.
    fn deal_batch(&mut self) {
        let first = self.dealer.next(SEATS);
        for _ in 0..DEAL_BATCH {
            for seat in first.clockwise(SEATS) {
                if let Some(card) = self.deck.pop() {
                    self.hands[seat].push(card);
                }
            }
        }
        for hand in self.hands.values_mut() {
            hand.sort_unstable();
        }
    }

    fn record(&mut self, player: PlayerId, action: OmiAction) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(player, action, sequence));
    }

    fn call_trump(&mut self, caller: PlayerId, suit: Suit) -> OmiSignal {
        self.trump = Some(suit);
        self.trump_caller = Some(caller);
        self.deal_batch();
        self.phase = Phase::Playing;
        self.current = caller;
        tracing::debug!(%caller, trump = %suit, round = self.round, "trump called");
        OmiSignal::Continue
    }

    fn pass(&mut self, player: PlayerId) -> OmiSignal {
        self.passes += 1;
        if usize::from(self.passes) == SEATS {
            tracing::debug!(dealer = %self.dealer, round = self.round, "every seat passed");
            return self.redeal();
        }
        self.current = player.next(SEATS);
        OmiSignal::TurnPassed { next: self.current }
    }

    fn play_card(&mut self, player: PlayerId, card: Card) -> OmiSignal {
        self.hands[player].retain(|c| *c != card);
        self.trick.push(player, card);

        if !self.trick.is_complete() {
            self.current = player.next(SEATS);
            return OmiSignal::TurnPassed { next: self.current };
        }

        let Some(winner) = self.trick.winner(self.trump) else {
            unreachable!("a complete trick has a lead card");
        };
        self.tricks_won.add(Team::of(winner), 1);
        self.discards.extend(self.trick.take_cards());
        self.current = winner;
        tracing::trace!(%winner, tricks = self.tricks_won.total(), "trick taken");

        if usize::from(self.tricks_won.total()) == TRICKS_PER_ROUND {
            return self.finish_round();
        }
        OmiSignal::TrickWon { winner }
    }

    fn finish_round(&mut self) -> OmiSignal {
        self.phase = Phase::Scoring;

        let Some(caller) = self.trump_caller else {
            tracing::warn!(round = self.round, dealer = %self.dealer, "round played without a trump call; discarding it");
            return self.redeal();
        };

        let result = score_round(caller, self.tricks_won);
        self.points.add(result.awarded_to, result.points);
        self.last_result = Some(result);
        tracing::debug!(
            round = self.round,
            team = %result.awarded_to,
            points = result.points,
            kapothi = result.kapothi,
            "omi round scored"
        );

        if self.points.get(result.awarded_to) >= self.target_points {
            self.phase = Phase::Finished;
            self.winner = Some(result.awarded_to);
            tracing::info!(
                winner = %result.awarded_to,
                team_one = self.points.get(Team::One),
                team_two = self.points.get(Team::Two),
                rounds = self.round,
                "omi match finished"
            );
            return OmiSignal::MatchEnded {
                winner: result.awarded_to,
                result,
            };
        }

        self.dealer = self.dealer.next(SEATS);
        self.start_round();
        OmiSignal::RoundEnded { result }
    }

    /// Throw the round in: scores stand, the deal moves left.
    fn redeal(&mut self) -> OmiSignal {
        self.dealer = self.dealer.next(SEATS);
        self.start_round();
        OmiSignal::Redealt { dealer: self.dealer }
    }
}

/// The Omi rules for one configured match.
#[derive(Clone, Debug, Default)]
pub struct Omi {
    config: OmiConfig,
}

impl Omi {
    #[must_use]
    pub fn new(config: OmiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OmiConfig {
        &self.config
    }

    fn validate(&self, state: &OmiState, actor: PlayerId, action: &OmiAction) -> Result<(), RuleError> {
        if state.phase == Phase::Finished {
            return Err(Illegal::GameOver.into());
        }

        let required = match action {
            OmiAction::CallTrump(_) | OmiAction::Pass => Phase::Trumping,
            OmiAction::Play(_) => Phase::Playing,
        };
        if state.phase != required {
            return Err(Illegal::WrongPhase {
                phase: state.phase.to_string(),
            }
            .into());
        }

        if actor != state.current {
            return Err(RuleError::OutOfTurn {
                expected: state.current,
                actual: actor,
            });
        }

        if let OmiAction::Play(card) = action {
            let hand = &state.hands[actor];
            if !hand.contains(card) {
                return Err(Illegal::CardNotInHand.into());
            }
            if let Some(lead) = state.trick.lead() {
                if card.suit != lead && hand_has_suit(hand, lead) {
                    return Err(Illegal::MustFollowSuit {
                        lead: lead.to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

impl RulesEngine for Omi {
    type State = OmiState;
    type Action = OmiAction;
    type Signal = OmiSignal;

    fn initial_state(&self) -> OmiState {
        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let dealer = self
            .config
            .dealer
            .unwrap_or_else(|| PlayerId::new(rng.gen_range_usize(0..SEATS) as u8));
        tracing::debug!(%dealer, seed = rng.seed(), target = self.config.target_points, "omi match started");
        OmiState::new(dealer, self.config.target_points, rng)
    }

    fn current_actor(&self, state: &OmiState) -> Option<PlayerId> {
        matches!(state.phase, Phase::Trumping | Phase::Playing).then_some(state.current)
    }

    fn legal_actions(&self, state: &OmiState) -> Vec<OmiAction> {
        match state.phase {
            Phase::Trumping => Suit::ALL
                .iter()
                .map(|&suit| OmiAction::CallTrump(suit))
                .chain(std::iter::once(OmiAction::Pass))
                .collect(),
            Phase::Playing => legal_plays(&state.hands[state.current], state.trick.lead())
                .into_iter()
                .map(OmiAction::Play)
                .collect(),
            Phase::Dealing | Phase::Scoring | Phase::Finished => Vec::new(),
        }
    }

    fn apply_action(
        &self,
        state: &mut OmiState,
        actor: PlayerId,
        action: &OmiAction,
    ) -> Result<OmiSignal, RuleError> {
        if let Err(err) = self.validate(state, actor, action) {
            tracing::debug!(%actor, %action, phase = %state.phase, %err, "omi action rejected");
            return Err(err);
        }

        state.record(actor, *action);
        tracing::trace!(%actor, %action, "omi action applied");

        let signal = match *action {
            OmiAction::CallTrump(suit) => state.call_trump(actor, suit),
            OmiAction::Pass => state.pass(actor),
            OmiAction::Play(card) => state.play_card(actor, card),
        };

        debug_assert!(state.cards_conserved(), "card census broken after {action}");
        Ok(signal)
    }

    fn is_terminal(&self, state: &OmiState) -> Option<GameResult> {
        state
            .winner
            .map(|team| GameResult::Winners(team.members().to_vec()))
    }
}
