//! Omi match configuration.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::SEATS;

/// How a match starts and when it ends.
///
/// ```
/// use table_rules::core::PlayerId;
/// use table_rules::games::omi::OmiConfig;
///
/// let config = OmiConfig::default().with_seed(7).with_dealer(PlayerId::new(3));
/// assert_eq!(config.target_points, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmiConfig {
    /// Seed for shuffling. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// First dealer. `None` picks a seat at random from the seeded RNG.
    pub dealer: Option<PlayerId>,

    /// Match points that end the match.
    pub target_points: u8,
}

impl Default for OmiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            dealer: None,
            target_points: 10,
        }
    }
}

impl OmiConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_dealer(mut self, dealer: PlayerId) -> Self {
        assert!(dealer.index() < SEATS, "Dealer must be one of the {SEATS} seats");
        self.dealer = Some(dealer);
        self
    }

    #[must_use]
    pub fn with_target_points(mut self, points: u8) -> Self {
        assert!(points > 0, "Target must be at least 1 point");
        self.target_points = points;
        self
    }
}
