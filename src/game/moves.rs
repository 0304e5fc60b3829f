//! Moves offered to a player on their turn.

use crate::Chips;
use crate::action::Action;
use crate::player::PlayerId;

use super::GameState;
use super::turn::find_player_behind_current;

/// What a contesting player may do right now.
///
/// Each flag is set only when the move is offered at the table *and* the
/// ledger would accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOptions {
    /// Stake for a chaal, show or back show.
    pub call_amount: Chips,
    /// Stake for a blind.
    pub blind_amount: Chips,
    /// Chaal is affordable.
    pub can_chaal: bool,
    /// Blind is offered (the player has not played seen) and affordable.
    pub can_blind: bool,
    /// Show is offered: two contestants, the opponent has played seen.
    pub can_show: bool,
    /// Back show target: more than two contestants and the player behind has
    /// played seen.
    pub back_show_target: Option<PlayerId>,
}

impl GameState {
    /// Returns the moves available to `id`.
    ///
    /// Returns `None` if the player is unknown or not contesting the round.
    pub fn moves_for(&self, id: PlayerId) -> Option<MoveOptions> {
        let player = self.contestant(id).ok()?;
        let contesting = self.contesting_players().count();

        let opponent_has_seen = self
            .contesting_players()
            .find(|p| p.id != id)
            .is_some_and(|p| p.has_seen());
        let back_show_target = find_player_behind_current(&self.players, id)
            .filter(|behind| contesting > 2 && behind.has_seen())
            .map(|behind| behind.id)
            .filter(|&target_id| self.check(&Action::BackShow { id, target_id }).is_ok());

        Some(MoveOptions {
            call_amount: self.call_amount(),
            blind_amount: self.settings.blind_amount,
            can_chaal: self.check(&Action::Chaal { id }).is_ok(),
            can_blind: !player.has_seen() && self.check(&Action::Blind { id }).is_ok(),
            can_show: contesting == 2
                && opponent_has_seen
                && self.check(&Action::Show { id }).is_ok(),
            back_show_target,
        })
    }
}
