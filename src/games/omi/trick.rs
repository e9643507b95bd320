//! Tricks: suit-following and winner resolution.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

use super::cards::{Card, Suit};
use super::SEATS;

/// One card played into a trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
}

/// Does `a` beat `b` in a trick led with `lead` under `trump`?
///
/// Trump beats non-trump; within trump, or within the lead suit, higher rank
/// wins. An off-suit non-trump card never beats anything.
#[must_use]
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump) = trump {
        match (a.suit == trump, b.suit == trump) {
            (true, false) => return true,
            (false, true) => return false,
            (true, true) => return a.rank > b.rank,
            (false, false) => {}
        }
    }

    match (a.suit == lead, b.suit == lead) {
        (true, false) => true,
        (true, true) => a.rank > b.rank,
        _ => false,
    }
}

#[must_use]
pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Cards in `hand` that may be played into a trick led with `lead`.
///
/// Holding the lead suit restricts play to it; otherwise, or when leading,
/// anything goes. Returned sorted.
#[must_use]
pub fn legal_plays(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    let mut cards: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        _ => hand.to_vec(),
    };
    cards.sort_unstable();
    cards
}

/// The trick in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    plays: SmallVec<[Play; SEATS]>,
}

impl Trick {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suit of the first card, once one is down.
    #[must_use]
    pub fn lead(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }

    pub fn push(&mut self, player: PlayerId, card: Card) {
        debug_assert!(!self.is_complete(), "trick already has {SEATS} cards");
        self.plays.push(Play { player, card });
    }

    /// Seat holding the strongest card so far; `None` on an empty trick.
    #[must_use]
    pub fn winner(&self, trump: Option<Suit>) -> Option<PlayerId> {
        let lead = self.lead()?;
        let best = self.plays.iter().skip(1).fold(self.plays[0], |best, play| {
            if card_beats(play.card, best.card, lead, trump) {
                *play
            } else {
                best
            }
        });
        Some(best.player)
    }

    /// Clear the trick, handing back its cards.
    pub fn take_cards(&mut self) -> impl Iterator<Item = Card> {
        std::mem::take(&mut self.plays).into_iter().map(|p| p.card)
    }
}

#[cfg(test)]
mod tests {
    use super::super::cards::Rank;
    use super::*;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn trick(cards: [&str; 4], leader: u8) -> Trick {
        let mut t = Trick::new();
        for (i, card) in cards.iter().enumerate() {
            t.push(PlayerId::new(leader).offset(i, SEATS), c(card));
        }
        t
    }

    #[test]
    fn test_card_beats() {
        let lead = Suit::Hearts;
        let trump = Some(Suit::Spades);

        assert!(card_beats(c("AH"), c("KH"), lead, trump));
        assert!(card_beats(c("7S"), c("AH"), lead, trump));
        assert!(!card_beats(c("AD"), c("7H"), lead, trump));
        assert!(card_beats(c("8S"), c("7S"), lead, trump));
        assert!(!card_beats(c("AD"), c("KC"), lead, trump));
    }

    #[test]
    fn test_highest_lead_wins_without_trump_played() {
        let t = trick(["9H", "AH", "KD", "10H"], 1);
        assert_eq!(t.winner(Some(Suit::Spades)), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_any_trump_beats_lead() {
        let t = trick(["AH", "KH", "7S", "QH"], 0);
        assert_eq!(t.winner(Some(Suit::Spades)), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_highest_trump_wins() {
        let t = trick(["AH", "9S", "7S", "JS"], 3);
        // seats 3, 0, 1, 2
        assert_eq!(t.winner(Some(Suit::Spades)), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_off_suit_ace_loses() {
        let t = trick(["7C", "AD", "AH", "8C"], 0);
        assert_eq!(t.winner(Some(Suit::Spades)), Some(PlayerId::new(3)));
        assert_eq!(t.winner(None), Some(PlayerId::new(3)));
    }

    #[test]
    fn test_legal_plays_must_follow() {
        let hand = vec![c("AS"), c("7H"), c("KH"), c("9D")];
        assert_eq!(legal_plays(&hand, Some(Suit::Hearts)), vec![c("7H"), c("KH")]);
        assert_eq!(legal_plays(&hand, Some(Suit::Clubs)).len(), 4);
        assert_eq!(legal_plays(&hand, None).len(), 4);
    }

    #[test]
    fn test_take_cards_clears_trick() {
        let mut t = trick(["AH", "KH", "QH", "JH"], 0);
        let cards: Vec<_> = t.take_cards().collect();
        assert_eq!(cards.len(), 4);
        assert!(t.is_empty());
        assert_eq!(t.lead(), None);
        assert!(cards.contains(&Card::new(Rank::Jack, Suit::Hearts)));
    }
}
