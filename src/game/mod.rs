//! Ledger state and the transition function.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::debug;

use crate::Chips;
use crate::action::{Action, ActionInfo};
use crate::error::ActionError;
use crate::player::{Player, PlayerId};
use crate::settings::GameSettings;

mod actions;
mod bet;
mod moves;
mod showdown;
pub mod state;
pub mod turn;

pub use moves::MoveOptions;
pub use showdown::check_for_single_player_win;
pub use state::Phase;

/// Per-player chip amounts (`player_id` -> chips).
pub type ChipMap = HashMap<PlayerId, Chips>;

/// An immutable snapshot of the session ledger.
///
/// Snapshots are produced by [`transition`]; a new value is returned for
/// every action and the input is never modified, so readers may keep older
/// snapshots around.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Players in seating (turn) order.
    pub players: Vec<Player>,
    /// Index of the player holding the turn.
    pub current_player_index: usize,
    /// Chips staked this round.
    pub pot: Chips,
    /// Last accepted call amount, the base for multiplier chaals.
    pub current_bet: Chips,
    /// Whether the first round has started.
    pub is_game_started: bool,
    /// Whether setup has moved on to the settings screen.
    pub in_settings_screen: bool,
    /// Stake configuration.
    pub settings: GameSettings,
    /// Round counter. 0 before the first start.
    pub round: u32,
    /// Balances at the start of the current round.
    pub previous_balances: ChipMap,
    /// Chips each player has put into the pot this round.
    pub player_contributions: ChipMap,
    /// Whether a show is waiting to be resolved.
    pub show_in_progress: bool,
    /// Requester and opponent of the pending show.
    pub show_players: Option<(PlayerId, PlayerId)>,
    /// Notice for the last notable change.
    pub last_action: Option<ActionInfo>,
    /// Pot awarded at the last resolution.
    pub last_win_amount: Option<Chips>,
    /// Next player ID to assign.
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates an empty table with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            pot: 0,
            current_bet: 0,
            is_game_started: false,
            in_settings_screen: false,
            settings: GameSettings::default(),
            round: 0,
            previous_balances: ChipMap::default(),
            player_contributions: ChipMap::default(),
            show_in_progress: false,
            show_players: None,
            last_action: None,
            last_win_amount: None,
            next_id: 0,
        }
    }

    /// Creates an empty table with the given settings.
    #[must_use]
    pub fn with_settings(settings: GameSettings) -> Self {
        Self {
            settings,
            ..Self::new()
        }
    }

    /// Applies `action`, returning the next snapshot.
    ///
    /// Same as [`transition`].
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        transition(self, action)
    }

    /// Returns the player with the given ID.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Returns the seat index of the player with the given ID.
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` between rounds and while a show is pending.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_current)
    }

    /// Iterates over players still contesting the round, in seating order.
    pub fn contesting_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_contesting())
    }

    /// Returns the number of players who have not withdrawn.
    pub fn seated_count(&self) -> usize {
        self.players.iter().filter(|p| !p.has_withdrawn).count()
    }

    /// Returns the pot plus every balance.
    ///
    /// Only seating, unseating and [`Action::AddMoney`] change this total.
    /// Saturates at the bounds of [`Chips`].
    pub fn total_chips(&self) -> Chips {
        let total = self.players.iter().map(|p| i128::from(p.balance)).sum::<i128>()
            + i128::from(self.pot);
        Chips::try_from(total).unwrap_or(if total < 0 { Chips::MIN } else { Chips::MAX })
    }

    /// Returns the current chaal, show and back show stake.
    pub const fn call_amount(&self) -> Chips {
        self.settings.call_amount(self.current_bet)
    }

    /// Returns whether the player is playing blind.
    ///
    /// Unknown IDs are not on blind.
    pub fn is_player_on_blind(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(Player::is_on_blind)
    }

    /// Returns whether the pot has reached the configured limit.
    ///
    /// Advisory: the ledger keeps accepting stakes past the limit.
    pub const fn pot_limit_reached(&self) -> bool {
        self.settings.pot_limit_reached(self.pot)
    }

    /// Returns whether stakes from a round are still outstanding.
    pub fn round_in_progress(&self) -> bool {
        self.pot != 0 || !self.player_contributions.is_empty()
    }

    fn find(&self, id: PlayerId) -> Result<&Player, ActionError> {
        self.player(id).ok_or(ActionError::PlayerNotFound)
    }

    fn contestant(&self, id: PlayerId) -> Result<&Player, ActionError> {
        let player = self.find(id)?;
        if player.has_withdrawn {
            return Err(ActionError::PlayerWithdrawn);
        }
        if !player.is_active {
            return Err(ActionError::PlayerNotContesting);
        }
        Ok(player)
    }

    fn ensure_covers(player: &Player, amount: Chips) -> Result<(), ActionError> {
        if amount < 0 {
            return Err(ActionError::NegativeStake);
        }
        if player.balance < amount {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(())
    }

    fn ensure_new_round(&self) -> Result<(), ActionError> {
        if self.seated_count() < 2 {
            return Err(ActionError::NotEnoughPlayers);
        }
        if self.round_in_progress() {
            return Err(ActionError::GameInProgress);
        }
        if self.settings.boot_amount < 0 {
            return Err(ActionError::NegativeStake);
        }
        Ok(())
    }

    /// Checks whether `action` would be accepted.
    ///
    /// [`transition`] refuses exactly the actions this rejects, turning them
    /// into no-ops.
    ///
    /// # Errors
    ///
    /// Returns the reason the action would be refused: an unknown or
    /// withdrawn player, a player out of the round, a negative stake or one
    /// the balance cannot cover, too few players, a live round blocking a
    /// new one, a show that is missing or does not involve the given
    /// players, or an amount that would overflow a balance or the pot.
    pub fn check(&self, action: &Action) -> Result<(), ActionError> {
        self.check_rules(action)?;
        self.clone().perform(action)
    }

    fn check_rules(&self, action: &Action) -> Result<(), ActionError> {
        match *action {
            Action::AddPlayer { .. }
            | Action::ProceedToSettings
            | Action::DismissRound
            | Action::EndSession
            | Action::SetSettings(_)
            | Action::ClearToast => Ok(()),
            Action::RemovePlayer { id } => {
                self.find(id)?;
                if self.is_game_started || self.round_in_progress() {
                    return Err(ActionError::GameInProgress);
                }
                Ok(())
            }
            Action::WithdrawPlayer { id } | Action::Fold { id } => self.find(id).map(|_| ()),
            Action::EndGame { winner_id } => self.find(winner_id).map(|_| ()),
            Action::AddMoney { player_id, .. } => self.find(player_id).map(|_| ()),
            Action::StartGame => {
                if self.players.len() < 2 {
                    return Err(ActionError::NotEnoughPlayers);
                }
                self.ensure_new_round()
            }
            Action::SetFirstPlayer { player_id } => {
                if self.find(player_id)?.has_withdrawn {
                    return Err(ActionError::PlayerWithdrawn);
                }
                self.ensure_new_round()
            }
            Action::Chaal { id } => Self::ensure_covers(self.contestant(id)?, self.call_amount()),
            Action::Blind { id } => {
                Self::ensure_covers(self.contestant(id)?, self.settings.blind_amount)
            }
            Action::Show { id } => {
                let player = self.contestant(id)?;
                if self.contesting_players().count() != 2 {
                    return Err(ActionError::NeedsTwoContestants);
                }
                Self::ensure_covers(player, self.call_amount())
            }
            Action::BackShow { id, target_id } => {
                let player = self.contestant(id)?;
                if target_id == id || self.contestant(target_id).is_err() {
                    return Err(ActionError::InvalidShowTarget);
                }
                Self::ensure_covers(player, self.call_amount())
            }
            Action::ResolveShow {
                winner_id,
                loser_id,
            } => {
                let Some((requester, opponent)) = self.show_players.filter(|_| self.show_in_progress)
                else {
                    return Err(ActionError::NoShowPending);
                };
                let pair = (winner_id, loser_id);
                if pair != (requester, opponent) && pair != (opponent, requester) {
                    return Err(ActionError::NotShowParticipant);
                }
                Ok(())
            }
            Action::NextPlayer => {
                if self.players.is_empty() {
                    return Err(ActionError::NoPlayers);
                }
                Ok(())
            }
        }
    }

    /// Applies an action that passed [`Self::check_rules`].
    ///
    /// On error `self` may be partly updated and must be discarded.
    fn perform(&mut self, action: &Action) -> Result<(), ActionError> {
        match action {
            Action::AddPlayer { name } => self.add_player(name)?,
            Action::RemovePlayer { id } => self.remove_player(*id),
            Action::WithdrawPlayer { id } => self.withdraw_player(*id)?,
            Action::ProceedToSettings => self.in_settings_screen = true,
            Action::StartGame => self.start_game()?,
            Action::Fold { id } => self.fold(*id)?,
            Action::Chaal { id } => self.chaal(*id)?,
            Action::Blind { id } => self.blind(*id)?,
            Action::Show { id } => self.show(*id)?,
            Action::BackShow { id, target_id } => self.back_show(*id, *target_id)?,
            Action::ResolveShow {
                winner_id,
                loser_id,
            } => self.resolve_show(*winner_id, *loser_id)?,
            Action::EndGame { winner_id } => self.end_game(*winner_id)?,
            Action::SetFirstPlayer { player_id } => self.set_first_player(*player_id)?,
            Action::DismissRound => self.dismiss_round()?,
            Action::EndSession => self.end_session(),
            Action::SetSettings(settings) => self.settings = *settings,
            Action::NextPlayer => self.rotate_from(self.current_player_index),
            Action::AddMoney { player_id, amount } => self.add_money(*player_id, *amount)?,
            Action::ClearToast => self.last_action = None,
        }
        Ok(())
    }
}

/// Maps a snapshot and an action to the next snapshot.
///
/// The function is total: refused actions (see [`GameState::check`]) return
/// an unchanged copy of `state` rather than an error. `state` itself is never
/// modified.
///
/// # Example
///
/// ```
/// use tpledger::{Action, GameState, transition};
///
/// let before = GameState::new();
/// let after = transition(&before, &Action::AddPlayer { name: "Meera".into() });
///
/// assert!(before.players.is_empty());
/// assert_eq!(after.players.len(), 1);
/// ```
#[must_use]
pub fn transition(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    match state.check_rules(action).and_then(|()| next.perform(action)) {
        Ok(()) => next,
        Err(error) => {
            debug!(?action, %error, "action refused");
            state.clone()
        }
    }
}
