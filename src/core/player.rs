//! Seat identification and per-seat storage.
//!
//! ## PlayerId
//!
//! A seat at the table. Checkers uses seats 0 and 1, Omi uses 0 through 3.
//! Seats rotate clockwise with [`PlayerId::next`].
//!
//! ## PlayerMap
//!
//! One value per seat backed by a `Vec`, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left (clockwise) at a table of `player_count` seats.
    ///
    /// ```
    /// use table_rules::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(4), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        self.offset(1, player_count)
    }

    /// The seat `steps` places clockwise from this one.
    #[must_use]
    pub fn offset(self, steps: usize, player_count: usize) -> Self {
        debug_assert!(self.index() < player_count, "seat {self} outside a {player_count}-seat table");
        Self(((self.index() + steps) % player_count) as u8)
    }

    /// Iterate over all seats at a table of `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Iterate clockwise over every seat, starting at `self`.
    pub fn clockwise(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(move |step| self.offset(step, player_count))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a map with every seat set to `T::default()`.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (seat, value) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(2)), "Player 2");
    }

    #[test]
    fn test_next_wraps_around_table() {
        assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    }

    #[test]
    fn test_clockwise_from_seat() {
        let order: Vec<_> = PlayerId::new(2).clockwise(4).collect();
        assert_eq!(
            order,
            vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]
        );
    }

    #[test]
    fn test_player_map_index_and_mutate() {
        let mut map: PlayerMap<Vec<u8>> = PlayerMap::with_default(4);
        map[PlayerId::new(3)].push(7);

        assert!(map[PlayerId::new(0)].is_empty());
        assert_eq!(map[PlayerId::new(3)], vec![7]);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_iter_in_seat_order() {
        let map = PlayerMap::new(3, |p| p.index() * 10);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &20));
        assert_eq!(map.values().sum::<usize>(), 30);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let restored: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, restored);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_default(0);
    }
}
