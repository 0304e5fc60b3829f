use alloc::format;
use alloc::string::String;

use tracing::{debug, info};

use crate::Chips;
use crate::action::{ActionInfo, ActionKind};
use crate::error::ActionError;
use crate::player::{Player, PlayerId};

use super::GameState;

impl GameState {
    pub(super) fn add_player(&mut self, name: &str) -> Result<(), ActionError> {
        let id = PlayerId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(ActionError::Overflow)?;
        debug!(%id, name, "player seated");
        self.players.push(Player::new(id, String::from(name)));
        Ok(())
    }

    pub(super) fn remove_player(&mut self, id: PlayerId) {
        self.players.retain(|p| p.id != id);
        debug!(%id, "player unseated");
    }

    /// Marks the player as having left the session for good.
    ///
    /// If they held the turn it passes on, then the round is settled if only
    /// one contestant remains.
    pub(super) fn withdraw_player(&mut self, id: PlayerId) -> Result<(), ActionError> {
        let Some(index) = self.player_index(id) else {
            return Ok(());
        };

        let player = &mut self.players[index];
        let was_current = player.is_current;
        player.has_withdrawn = true;
        player.is_active = false;
        player.is_current = false;
        let name = player.name.clone();

        if was_current {
            self.rotate_from(index);
        }

        info!(%id, "player withdrew");
        self.last_action = Some(ActionInfo::new(
            ActionKind::Withdraw,
            name,
            "withdrew from the game",
        ));
        self.settle_single_survivor().map(|_| ())
    }

    pub(super) fn fold(&mut self, id: PlayerId) -> Result<(), ActionError> {
        let Some(index) = self.player_index(id) else {
            return Ok(());
        };

        let player = &mut self.players[index];
        player.is_active = false;
        player.is_current = false;
        let name = player.name.clone();

        self.rotate_from(index);
        self.last_action = Some(ActionInfo::new(ActionKind::Fold, name, "folded"));
        self.settle_single_survivor().map(|_| ())
    }

    /// Adds chips from outside the table. Negative amounts take chips away.
    pub(super) fn add_money(
        &mut self,
        player_id: PlayerId,
        amount: Chips,
    ) -> Result<(), ActionError> {
        let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) else {
            return Ok(());
        };

        player.balance = player.balance.checked_add(amount).ok_or(ActionError::Overflow)?;
        let name = player.name.clone();
        info!(player = %player_id, amount, "chips added");
        self.last_action = Some(ActionInfo::new(
            ActionKind::AddMoney,
            name,
            format!("added {amount}"),
        ));
        Ok(())
    }

    /// Returns to an empty table with default settings.
    ///
    /// The ID counter survives so stale IDs never alias new players.
    pub(super) fn end_session(&mut self) {
        info!(rounds = self.round, "session ended");
        *self = Self {
            next_id: self.next_id,
            ..Self::new()
        };
    }
}
