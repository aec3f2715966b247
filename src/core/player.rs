//! Seats and per-seat storage.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Seat 0 moves first and play wraps back to it
//! after the last seat.
//!
//! ## PlayerMap
//!
//! One value per seat, indexed by `PlayerId`. Hands live in a
//! `PlayerMap<Vec<Card>>`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index, 0-based, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Position in the roster.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that moves after this one.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Every seat at a table of `player_count`, in turn order.
    ///
    /// ```
    /// use sequence_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3].next(4), seats[0]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat.
///
/// ```
/// use sequence_engine::core::{PlayerId, PlayerMap};
///
/// let mut tokens_placed: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// tokens_placed[PlayerId::new(1)] += 1;
/// assert_eq!(tokens_placed.values().sum::<u32>(), 1);
/// assert_eq!(tokens_placed.get(PlayerId::new(4)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat with `init`.
    ///
    /// # Panics
    ///
    /// If `player_count` is zero or does not fit a `PlayerId`.
    pub fn new(player_count: usize, init: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "a table needs at least one seat");
        assert!(player_count <= usize::from(u8::MAX), "too many seats for a PlayerId");
        Self {
            seats: PlayerId::all(player_count).map(init).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Never true; a map always has at least one seat.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Entry for `seat`, or `None` past the last seat.
    #[must_use]
    pub fn get(&self, seat: PlayerId) -> Option<&T> {
        self.seats.get(seat.index())
    }

    pub fn get_mut(&mut self, seat: PlayerId) -> Option<&mut T> {
        self.seats.get_mut(seat.index())
    }

    /// Entries in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    /// `(seat, entry)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &T {
        &self.seats[seat.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.seats[seat.index()]
    }
}
