//! Player roster and team validation.
//!
//! A roster is the ordered list of seats. Turn order is seat order. Each
//! player's color names their team.

use serde::{Deserialize, Serialize};

use crate::board::TeamColor;
use crate::core::PlayerId;
use crate::error::RosterError;

use super::tables::{VALID_PLAYER_COUNTS, VALID_TEAM_COUNTS};

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub color: TeamColor,

    /// Optional tag set by the host (a challenge or bot persona). Carried
    /// through to views untouched.
    pub quest: Option<String>,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            name: name.into(),
            color,
            quest: None,
        }
    }

    #[must_use]
    pub fn with_quest(mut self, quest: impl Into<String>) -> Self {
        self.quest = Some(quest.into());
        self
    }
}

/// A validated list of seats.
///
/// ```
/// use sequence_engine::board::TeamColor;
/// use sequence_engine::core::PlayerId;
/// use sequence_engine::roster::Roster;
///
/// let roster = Roster::with_teams(["ann", "bo", "cy", "di"], 2).unwrap();
/// assert_eq!(roster.len(), 4);
/// assert_eq!(roster.color_of(PlayerId::new(0)), Some(TeamColor::Blue));
/// assert_eq!(roster.color_of(PlayerId::new(1)), Some(TeamColor::Green));
///
/// assert!(Roster::with_teams(["a", "b", "c", "d", "e"], 2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerInfo>,
    /// Distinct team colors, in order of first seat.
    teams: Vec<TeamColor>,
}

fn check_counts(player_count: usize, team_count: usize) -> Result<(), RosterError> {
    if !VALID_PLAYER_COUNTS.contains(&player_count) {
        return Err(RosterError::InvalidPlayerCount(player_count));
    }
    if !VALID_TEAM_COUNTS.contains(&team_count) {
        return Err(RosterError::InvalidTeamCount(team_count));
    }
    if player_count % team_count != 0 {
        return Err(RosterError::IndivisibleTeams {
            players: player_count,
            teams: team_count,
        });
    }
    Ok(())
}

impl Roster {
    /// Validate a roster with caller-chosen colors. Teams must be the same
    /// size.
    pub fn new(players: Vec<PlayerInfo>) -> Result<Self, RosterError> {
        let mut teams: Vec<TeamColor> = Vec::new();
        for player in &players {
            if !teams.contains(&player.color) {
                teams.push(player.color);
            }
        }

        check_counts(players.len(), teams.len())?;

        let expected = players.len() / teams.len();
        for &color in &teams {
            let size = players.iter().filter(|p| p.color == color).count();
            if size != expected {
                return Err(RosterError::UnbalancedTeams {
                    color,
                    size,
                    expected,
                });
            }
        }

        Ok(Self { players, teams })
    }

    /// Seat `names` in order and deal them into `team_count` teams, cycling
    /// through the colors so consecutive seats alternate.
    pub fn with_teams<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        team_count: usize,
    ) -> Result<Self, RosterError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        check_counts(names.len(), team_count)?;

        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| PlayerInfo::new(name, TeamColor::ALL[i % team_count]))
            .collect();

        Self::new(players)
    }

    /// Reorder seats so turns rotate through the teams.
    ///
    /// Players keep their relative order within a team.
    #[must_use]
    pub fn seated_alternating(self) -> Self {
        let per_team = self.players.len() / self.teams.len();
        let mut by_team: Vec<Vec<PlayerInfo>> = vec![Vec::new(); self.teams.len()];
        for player in self.players {
            if let Some(slot) = self.teams.iter().position(|&c| c == player.color) {
                by_team[slot].push(player);
            }
        }

        let mut queues: Vec<_> = by_team.into_iter().map(Vec::into_iter).collect();
        let mut players = Vec::with_capacity(per_team * self.teams.len());
        for _ in 0..per_team {
            for queue in &mut queues {
                players.extend(queue.next());
            }
        }

        Self {
            players,
            teams: self.teams,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a validated roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    /// The player in `seat`.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&PlayerInfo> {
        self.players.get(seat.index())
    }

    /// Team color of `seat`.
    #[must_use]
    pub fn color_of(&self, seat: PlayerId) -> Option<TeamColor> {
        self.player(seat).map(|p| p.color)
    }

    /// Distinct teams, in order of first seat.
    #[must_use]
    pub fn teams(&self) -> &[TeamColor] {
        &self.teams
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Seats belonging to `color`.
    pub fn members(&self, color: TeamColor) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.color == color)
            .map(|(i, _)| PlayerId::new(i as u8))
    }
}
