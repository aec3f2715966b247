//! Player-count and team-count tables.

/// Player counts a game can be set up with.
pub const VALID_PLAYER_COUNTS: [usize; 8] = [2, 3, 4, 6, 8, 9, 10, 12];

/// Team counts a game can be set up with.
pub const VALID_TEAM_COUNTS: [usize; 2] = [2, 3];

/// Cards dealt to each player.
///
/// ```
/// use sequence_engine::roster::hand_size_for;
///
/// assert_eq!(hand_size_for(2), Some(7));
/// assert_eq!(hand_size_for(12), Some(3));
/// assert_eq!(hand_size_for(5), None);
/// ```
#[must_use]
pub const fn hand_size_for(player_count: usize) -> Option<usize> {
    match player_count {
        2 => Some(7),
        3 | 4 => Some(6),
        6 => Some(5),
        8 | 9 => Some(4),
        10 | 12 => Some(3),
        _ => None,
    }
}

/// Completed sequences a team needs to win.
#[must_use]
pub const fn sequences_to_win_for(team_count: usize) -> Option<usize> {
    match team_count {
        2 => Some(2),
        3 => Some(1),
        _ => None,
    }
}
