//! Partnerships and round scoring.
//!
//! The team that called trump needs 5 of the 8 tricks. Making it earns one
//! match point; failing it hands the other team two ("Kapothi").

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::{SEATS, TRICKS_PER_ROUND};

pub const TRICKS_TO_MAKE: u8 = 5;
pub const MADE_POINTS: u8 = 1;
pub const KAPOTHI_POINTS: u8 = 2;

/// Seats 0 and 2 are `One`, seats 1 and 3 are `Two`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    #[must_use]
    pub fn of(player: PlayerId) -> Team {
        if player.index() % 2 == 0 {
            Team::One
        } else {
            Team::Two
        }
    }

    #[must_use]
    pub const fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    #[must_use]
    pub fn members(self) -> [PlayerId; 2] {
        let first = match self {
            Team::One => PlayerId::new(0),
            Team::Two => PlayerId::new(1),
        };
        [first, first.offset(2, SEATS)]
    }

    const fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::One => f.write_str("Team 1"),
            Team::Two => f.write_str("Team 2"),
        }
    }
}

/// A per-team counter (tricks in a round, points in a match).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore([u8; 2]);

impl TeamScore {
    #[must_use]
    pub const fn new(team_one: u8, team_two: u8) -> Self {
        Self([team_one, team_two])
    }

    #[must_use]
    pub fn get(&self, team: Team) -> u8 {
        self.0[team.index()]
    }

    pub fn add(&mut self, team: Team, amount: u8) {
        self.0[team.index()] = self.0[team.index()].saturating_add(amount);
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.0[0] + self.0[1]
    }
}

/// Outcome of a scored round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub trump_caller: PlayerId,
    pub calling_team: Team,
    /// Tricks each team took this round.
    pub tricks: TeamScore,
    pub awarded_to: Team,
    pub points: u8,
    /// The calling team failed its call.
    pub kapothi: bool,
}

/// Score a finished round.
#[must_use]
pub fn score_round(trump_caller: PlayerId, tricks: TeamScore) -> RoundResult {
    debug_assert_eq!(tricks.total() as usize, TRICKS_PER_ROUND, "round scored before all tricks were played");

    let calling_team = Team::of(trump_caller);
    let made = tricks.get(calling_team) >= TRICKS_TO_MAKE;
    let (awarded_to, points) = if made {
        (calling_team, MADE_POINTS)
    } else {
        (calling_team.other(), KAPOTHI_POINTS)
    };

    RoundResult {
        trump_caller,
        calling_team,
        tricks,
        awarded_to,
        points,
        kapothi: !made,
    }
}
