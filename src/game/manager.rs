//! Game manager: the turn state machine.
//!
//! `GameManager` owns the authoritative `GameState` and is the only thing
//! that mutates it. A move is validated in full before anything changes,
//! so a rejected move leaves the game exactly as it was.
//!
//! ## Turn flow
//!
//! | Action    | Hand after refill | Turn            | `last_action_was_discard` |
//! |-----------|-------------------|-----------------|---------------------------|
//! | placement | any               | passes          | false                     |
//! | discard   | still stuck       | passes          | false                     |
//! | discard   | has a placement   | same player     | true                      |
//!
//! While `last_action_was_discard` is set the same player must place; a
//! second discard is rejected. A move that completes the winning sequence
//! ends the game on the spot: no refill, no hand-off.

use log::{debug, info, warn};

use crate::board::{Position, TeamColor};
use crate::cards::Card;
use crate::core::{GameConfig, GameRng, Move, MoveRecord, PlayerId, RandomSource};
use crate::error::{GameError, RosterError};
use crate::roster::Roster;
use crate::rules::{
    get_all_sequences, has_legal_placement, moves_for_player, placement_error, GameResult,
    RulesEngine, Sequence,
};

use super::state::GameState;
use super::view::PlayerVisibleGameState;

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Sequences completed by this move.
    pub new_sequences: usize,
    /// Set when this move won the game.
    pub winner: Option<TeamColor>,
    /// Replacement card drawn, if any.
    pub drawn: Option<Card>,
    /// The discard pile was shuffled back into the deck.
    pub reshuffled: bool,
    /// Seat to move next.
    pub next_player: PlayerId,
}

impl MoveOutcome {
    /// True if the mover keeps the turn.
    #[must_use]
    pub fn same_player(&self, mover: PlayerId) -> bool {
        self.winner.is_none() && self.next_player == mover
    }
}

/// Owns one game and runs its turns.
///
/// ```
/// use sequence_engine::core::{GameRng, PlayerId};
/// use sequence_engine::game::GameManager;
/// use sequence_engine::roster::Roster;
///
/// let roster = Roster::with_teams(["ann", "bo"], 2).unwrap();
/// let mut game = GameManager::new(roster, GameRng::new(42)).unwrap();
///
/// let moves = game.get_moves_for_player(PlayerId::new(0)).unwrap();
/// let mv = moves[0];
/// game.make_move(PlayerId::new(0), mv.card, mv.position).unwrap();
/// assert_eq!(game.state().turn_number(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameManager<R = GameRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    sequences_to_win: usize,
}

impl<R: RandomSource> GameManager<R> {
    /// Start a game with the default configuration.
    pub fn new(roster: Roster, rng: R) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(), roster, rng)
    }

    /// Start a game: shuffle the deck and deal every hand.
    pub fn with_config(config: GameConfig, roster: Roster, mut rng: R) -> Result<Self, GameError> {
        let team_count = roster.team_count();
        let sequences_to_win = config
            .sequences_to_win(team_count)
            .ok_or(RosterError::InvalidTeamCount(team_count))?;
        let state = GameState::deal(&config, roster, &mut rng)?;

        info!(
            "new game: {} players in {} teams, {} sequences to win",
            state.player_count(),
            team_count,
            sequences_to_win
        );

        Ok(Self {
            config,
            state,
            rng,
            sequences_to_win,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The full state, every hand included.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Sequences a team needs to win this game.
    #[must_use]
    pub fn sequences_to_win(&self) -> usize {
        self.sequences_to_win
    }

    /// Legal moves for `player` in the current position.
    ///
    /// Discard moves are offered unless `player` is the seat to move and has
    /// just discarded. Empty once the game is over.
    pub fn get_moves_for_player(&self, player: PlayerId) -> Result<Vec<Move>, GameError> {
        let color = self.color_of(player)?;
        let hand = self
            .state
            .hand(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        if self.state.winner.is_some() {
            return Ok(Vec::new());
        }

        let can_discard = !(player == self.state.next_player && self.state.last_action_was_discard);
        Ok(moves_for_player(
            &self.config.layout,
            &self.state.grid,
            self.state.sequence_count,
            color,
            hand,
            can_discard,
        ))
    }

    /// What `viewer` may see. `None` builds a spectator view with no hand.
    pub fn get_state_for_player(
        &self,
        viewer: Option<PlayerId>,
    ) -> Result<PlayerVisibleGameState, GameError> {
        PlayerVisibleGameState::project(&self.state, viewer)
    }

    /// Play `card` at `position`, or discard it when `position` is `None`.
    pub fn make_move(
        &mut self,
        player: PlayerId,
        card: Card,
        position: Option<Position>,
    ) -> Result<MoveOutcome, GameError> {
        let mv = Move { card, position };
        let color = self.validate(player, mv)?;
        Ok(self.commit(player, color, mv))
    }

    fn color_of(&self, player: PlayerId) -> Result<TeamColor, GameError> {
        self.state
            .roster
            .color_of(player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    fn validate(&self, player: PlayerId, mv: Move) -> Result<TeamColor, GameError> {
        if let Some(winner) = self.state.winner {
            return Err(GameError::GameOver { winner });
        }
        if player != self.state.next_player {
            return Err(GameError::NotYourTurn {
                player,
                expected: self.state.next_player,
            });
        }

        let color = self.color_of(player)?;
        let hand = self
            .state
            .hand(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        if !hand.contains(&mv.card) {
            return Err(GameError::CardNotInHand(mv.card));
        }

        let layout = &self.config.layout;
        let grid = &self.state.grid;
        let sequence_count = self.state.sequence_count;
        match mv.position {
            None => {
                if self.state.last_action_was_discard {
                    return Err(GameError::ConsecutiveDiscard);
                }
                if has_legal_placement(layout, grid, sequence_count, color, mv.card) {
                    return Err(GameError::CardNotDead(mv.card));
                }
            }
            Some(position) => {
                if let Some(err) =
                    placement_error(layout, grid, sequence_count, color, mv.card, position)
                {
                    return Err(err.into());
                }
            }
        }

        Ok(color)
    }

    fn commit(&mut self, player: PlayerId, color: TeamColor, mv: Move) -> MoveOutcome {
        self.state.remove_from_hand(player, mv.card);
        self.state.discard.push_back(mv.card);
        if let Some(position) = mv.position {
            let token = if mv.card.is_one_eyed_jack() {
                None
            } else {
                Some(color)
            };
            self.state.grid.set(position, token);
        }

        self.state.turn_number += 1;
        let turn = self.state.turn_number;
        self.state.history.push_back(MoveRecord::new(player, mv, turn));
        debug!("turn {turn}: {player} ({color}) {mv}");

        let sequences = get_all_sequences(&self.state.grid);
        let new_sequences = sequences.len().saturating_sub(self.state.sequence_count);

        if let Some(winner) = self.find_winner(&sequences) {
            self.state.winner = Some(winner);
            info!("{winner} wins on turn {turn}");
            return MoveOutcome {
                new_sequences,
                winner: Some(winner),
                drawn: None,
                reshuffled: false,
                next_player: player,
            };
        }

        self.state.sequence_count = sequences.len();
        let (drawn, reshuffled) = self.refill(player);

        let stuck = !self.has_any_placement(player, color);
        if mv.is_discard() && !stuck {
            self.state.last_action_was_discard = true;
        } else {
            self.state.last_action_was_discard = false;
            self.state.next_player = player.next(self.state.player_count());
            debug!("turn passes to {}", self.state.next_player);
        }

        MoveOutcome {
            new_sequences,
            winner: None,
            drawn,
            reshuffled,
            next_player: self.state.next_player,
        }
    }

    fn find_winner(&self, sequences: &[Sequence]) -> Option<TeamColor> {
        self.state.roster.teams().iter().copied().find(|&team| {
            sequences.iter().filter(|s| s.color == team).count() >= self.sequences_to_win
        })
    }

    fn has_any_placement(&self, player: PlayerId, color: TeamColor) -> bool {
        self.state.hand(player).map_or(false, |hand| {
            hand.iter().any(|&card| {
                has_legal_placement(
                    &self.config.layout,
                    &self.state.grid,
                    self.state.sequence_count,
                    color,
                    card,
                )
            })
        })
    }

    /// Draw a replacement card, reshuffling the discard pile whenever the
    /// deck runs out.
    fn refill(&mut self, player: PlayerId) -> (Option<Card>, bool) {
        let mut reshuffled = self.recycle_if_empty();
        let drawn = self.state.draw(player);
        if drawn.is_none() {
            warn!("{player} cannot draw: deck and discard pile are both empty");
        }
        reshuffled |= self.recycle_if_empty();
        (drawn, reshuffled)
    }

    fn recycle_if_empty(&mut self) -> bool {
        if !self.state.deck.is_empty() || self.state.discard.is_empty() {
            return false;
        }
        self.state.recycle_discard(&mut self.rng);
        debug!("reshuffled {} cards into the deck", self.state.deck.len());
        true
    }
}

impl GameManager<GameRng> {
    /// Independent copy for lookahead. The copy draws from a forked RNG, so
    /// its shuffles diverge from this game's.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.fork(),
            sequences_to_win: self.sequences_to_win,
        }
    }
}

impl<R: RandomSource> RulesEngine for GameManager<R> {
    fn current_player(&self) -> PlayerId {
        self.state.next_player
    }

    fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        self.get_moves_for_player(player).unwrap_or_default()
    }

    fn apply_move(&mut self, player: PlayerId, mv: Move) -> Result<(), GameError> {
        self.make_move(player, mv.card, mv.position).map(|_| ())
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.winner.map(GameResult::Winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;
    use crate::cards::{Rank, Suit};
    use crate::error::PlacementError;
    use im::Vector;
    use std::sync::Arc;

    const TWO_EYED: Card = Card::new(Rank::Jack, Suit::Clubs);
    const ONE_EYED: Card = Card::new(Rank::Jack, Suit::Hearts);

    fn four_players(seed: u64) -> GameManager {
        let roster = Roster::with_teams(["a", "b", "c", "d"], 2).unwrap();
        GameManager::new(roster, GameRng::new(seed)).unwrap()
    }

    fn layout() -> Arc<BoardLayout> {
        BoardLayout::shared()
    }

    /// Cover both cells of `card` so it becomes dead. Colors alternate so no
    /// sequence can form.
    fn kill(game: &mut GameManager, card: Card) {
        for (i, pos) in layout().positions_of(card).into_iter().enumerate() {
            let color = if i % 2 == 0 { TeamColor::Red } else { TeamColor::Green };
            game.state.grid.set(pos, Some(color));
        }
    }

    #[test]
    fn test_creation() {
        let game = four_players(42);

        assert_eq!(game.sequences_to_win(), 2);
        assert_eq!(game.state().hand_sizes(), vec![6, 6, 6, 6]);
        assert_eq!(game.state().card_count(), 104);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert!(game.is_terminal().is_none());
    }

    #[test]
    fn test_three_teams_need_one_sequence() {
        let roster = Roster::with_teams(["a", "b", "c"], 3).unwrap();
        let game = GameManager::new(roster, GameRng::new(1)).unwrap();
        assert_eq!(game.sequences_to_win(), 1);
    }

    #[test]
    fn test_closure_rng() {
        let roster = Roster::with_teams(["a", "b"], 2).unwrap();
        let game = GameManager::new(roster.clone(), || 0.0).unwrap();
        let again = GameManager::new(roster, || 0.0).unwrap();

        assert_eq!(game.state(), again.state());
    }

    #[test]
    fn test_placement_advances_turn() {
        let mut game = four_players(3);
        let seat = PlayerId::new(0);
        let card = Card::new(Rank::Five, Suit::Spades);
        let pos = layout().positions_of(card)[0];
        game.state.hands[seat][0] = card;

        let outcome = game.make_move(seat, card, Some(pos)).unwrap();

        assert_eq!(outcome.next_player, PlayerId::new(1));
        assert_eq!(outcome.new_sequences, 0);
        assert!(outcome.drawn.is_some());
        assert_eq!(game.state().grid().get(pos), Some(TeamColor::Blue));
        assert_eq!(game.state().hand(seat).map(<[Card]>::len), Some(6));
        assert_eq!(game.state().discard().back(), Some(&card));
        assert_eq!(game.state().turn_number(), 1);
        assert_eq!(game.state().history().len(), 1);
        assert_eq!(game.state().card_count(), 104);
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut game = four_players(5);
        let before = game.state().clone();
        let card = game.state().hand(PlayerId::new(1)).unwrap()[0];

        assert_eq!(
            game.make_move(PlayerId::new(1), card, None),
            Err(GameError::NotYourTurn {
                player: PlayerId::new(1),
                expected: PlayerId::new(0),
            })
        );

        let missing = Card::new(Rank::Ace, Suit::Diamonds);
        game.state.hands[PlayerId::new(0)].retain(|&c| c != missing);
        let before = GameState {
            hands: game.state.hands.clone(),
            ..before
        };
        assert_eq!(
            game.make_move(PlayerId::new(0), missing, Some(Position::new(0, 1))),
            Err(GameError::CardNotInHand(missing))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_illegal_placement() {
        let mut game = four_players(6);
        let seat = PlayerId::new(0);
        game.state.hands[seat][0] = TWO_EYED;

        assert_eq!(
            game.make_move(seat, TWO_EYED, Some(Position::new(0, 0))),
            Err(GameError::IllegalPlacement(PlacementError::Corner))
        );
        assert_eq!(
            game.make_move(seat, TWO_EYED, Some(Position::new(10, 3))),
            Err(GameError::IllegalPlacement(PlacementError::OutOfBounds(Position::new(10, 3))))
        );
    }

    #[test]
    fn test_live_card_cannot_be_discarded() {
        let mut game = four_players(7);
        let seat = PlayerId::new(0);
        let card = Card::new(Rank::Nine, Suit::Hearts);
        game.state.hands[seat][0] = card;

        assert_eq!(game.make_move(seat, card, None), Err(GameError::CardNotDead(card)));
    }

    #[test]
    fn test_discard_then_still_stuck_ends_turn() {
        let mut game = four_players(8);
        let seat = PlayerId::new(0);
        let dead = Card::new(Rank::Two, Suit::Clubs);
        let also_dead = Card::new(Rank::Three, Suit::Clubs);
        kill(&mut game, dead);
        kill(&mut game, also_dead);
        game.state.hands[seat] = vec![dead];
        game.state.deck.push_back(also_dead);

        let outcome = game.make_move(seat, dead, None).unwrap();

        assert_eq!(outcome.drawn, Some(also_dead));
        assert_eq!(outcome.next_player, PlayerId::new(1));
        assert!(!game.state().last_action_was_discard());
        assert_eq!(game.state().hand(seat), Some(&[also_dead][..]));
    }

    #[test]
    fn test_discard_then_playable_keeps_turn() {
        let mut game = four_players(9);
        let seat = PlayerId::new(0);
        let dead = Card::new(Rank::Two, Suit::Clubs);
        let live = Card::new(Rank::Five, Suit::Spades);
        kill(&mut game, dead);
        game.state.hands[seat] = vec![dead];
        game.state.deck.push_back(live);

        let outcome = game.make_move(seat, dead, None).unwrap();

        assert!(outcome.same_player(seat));
        assert!(game.state().last_action_was_discard());
        assert_eq!(game.current_player(), seat);

        // Only placements are offered now.
        let moves = game.get_moves_for_player(seat).unwrap();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| !m.is_discard()));

        assert_eq!(
            game.make_move(seat, live, None),
            Err(GameError::ConsecutiveDiscard)
        );

        let pos = layout().positions_of(live)[0];
        let outcome = game.make_move(seat, live, Some(pos)).unwrap();
        assert_eq!(outcome.next_player, PlayerId::new(1));
        assert!(!game.state().last_action_was_discard());
    }

    #[test]
    fn test_one_eyed_jack_removes_token() {
        let mut game = four_players(10);
        let seat = PlayerId::new(0);
        let pos = Position::new(5, 5);
        game.state.grid.set(pos, Some(TeamColor::Green));
        game.state.hands[seat][0] = ONE_EYED;

        game.make_move(seat, ONE_EYED, Some(pos)).unwrap();

        assert!(game.state().grid().is_empty_at(pos));
    }

    #[test]
    fn test_completing_sequence_updates_count() {
        let mut game = four_players(11);
        let seat = PlayerId::new(0);
        for col in 1..5 {
            game.state.grid.set(Position::new(3, col), Some(TeamColor::Blue));
        }
        game.state.hands[seat][0] = TWO_EYED;

        let outcome = game.make_move(seat, TWO_EYED, Some(Position::new(3, 5))).unwrap();

        assert_eq!(outcome.new_sequences, 1);
        assert_eq!(outcome.winner, None);
        assert_eq!(game.state().sequence_count(), 1);

        // Green cannot break it with a one-eyed jack.
        let green = PlayerId::new(1);
        game.state.hands[green][0] = ONE_EYED;
        assert_eq!(
            game.make_move(green, ONE_EYED, Some(Position::new(3, 3))),
            Err(GameError::IllegalPlacement(PlacementError::BreaksSequence))
        );
    }

    #[test]
    fn test_winning_move_ends_game() {
        let mut game = four_players(12);
        let seat = PlayerId::new(0);
        for col in 1..6 {
            game.state.grid.set(Position::new(1, col), Some(TeamColor::Blue));
        }
        for col in 1..5 {
            game.state.grid.set(Position::new(3, col), Some(TeamColor::Blue));
        }
        game.state.sequence_count = 1;
        game.state.hands[seat][0] = TWO_EYED;
        let deck_before = game.state().deck_size();

        let outcome = game.make_move(seat, TWO_EYED, Some(Position::new(3, 5))).unwrap();

        assert_eq!(outcome.winner, Some(TeamColor::Blue));
        assert_eq!(outcome.drawn, None);
        assert_eq!(game.state().winner(), Some(TeamColor::Blue));
        assert_eq!(game.state().hand(seat).map(<[Card]>::len), Some(5));
        assert_eq!(game.state().deck_size(), deck_before);
        assert_eq!(game.current_player(), seat);
        assert_eq!(game.is_terminal(), Some(GameResult::Winner(TeamColor::Blue)));
        assert!(game.legal_moves(seat).is_empty());

        let card = game.state().hand(seat).unwrap()[0];
        assert_eq!(
            game.make_move(seat, card, None),
            Err(GameError::GameOver { winner: TeamColor::Blue })
        );
    }

    #[test]
    fn test_reshuffle_when_deck_runs_out() {
        let mut game = four_players(13);
        let seat = PlayerId::new(0);
        let card = Card::new(Rank::Five, Suit::Spades);
        game.state.hands[seat][0] = card;
        let last = game.state.deck.pop_back().unwrap();
        let mut rest: Vec<Card> = game.state.deck.iter().copied().collect();
        rest.extend(game.state.discard.iter().copied());
        game.state.discard = rest.into_iter().collect();
        game.state.deck = Vector::unit(last);

        let outcome = game.make_move(seat, card, Some(layout().positions_of(card)[0])).unwrap();

        assert_eq!(outcome.drawn, Some(last));
        assert!(outcome.reshuffled);
        assert!(game.state().discard().is_empty());
        assert_eq!(game.state().deck_size(), 104 - 24);
        assert_eq!(game.state().card_count(), 104);
    }

    #[test]
    fn test_state_for_player_is_idempotent() {
        let game = four_players(14);
        let first = game.get_state_for_player(Some(PlayerId::new(2))).unwrap();
        let second = game.get_state_for_player(Some(PlayerId::new(2))).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.hand.as_deref(), game.state().hand(PlayerId::new(2)));
        assert_eq!(game.get_state_for_player(None).unwrap().hand, None);
        assert!(game.get_state_for_player(Some(PlayerId::new(4))).is_err());
    }

    #[test]
    fn test_unknown_player_moves() {
        let game = four_players(15);
        assert_eq!(
            game.get_moves_for_player(PlayerId::new(7)),
            Err(GameError::UnknownPlayer(PlayerId::new(7)))
        );
    }

    #[test]
    fn test_deterministic_replay() {
        let mut first = four_players(99);
        let mut second = four_players(99);

        for _ in 0..40 {
            let a = first.step_with(|moves| moves.len() / 2).unwrap();
            let b = second.step_with(|moves| moves.len() / 2).unwrap();
            assert_eq!(a, b);
        }

        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn test_fork_is_independent() {
        let mut game = four_players(16);
        let mut fork = game.fork();

        fork.step_with(|_| 0).unwrap();

        assert_eq!(game.state().turn_number(), 0);
        assert_eq!(fork.state().turn_number(), 1);
    }
}
