use alloc::format;

use tracing::info;

use crate::action::{ActionInfo, ActionKind};
use crate::error::ActionError;
use crate::player::{BlindStatus, PlayerId};

use super::GameState;

/// Awards the pot if exactly one player is still contesting.
///
/// The survivor collects the pot, nobody holds the turn, per-round
/// bookkeeping is cleared and the round counter advances. Any other state is
/// returned unchanged, as is a state whose award would overflow the
/// survivor's balance.
///
/// [`transition`](crate::transition) runs this after withdrawals, folds and
/// resolved shows.
#[must_use]
pub fn check_for_single_player_win(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.settle_single_survivor().is_ok() {
        next
    } else {
        state.clone()
    }
}

impl GameState {
    /// Settles the round in place when one contestant is left.
    ///
    /// Returns whether the round was settled.
    pub(super) fn settle_single_survivor(&mut self) -> Result<bool, ActionError> {
        let mut contesting = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_contesting())
            .map(|(index, _)| index);
        let (Some(winner), None) = (contesting.next(), contesting.next()) else {
            return Ok(false);
        };

        let pot = self.pot;
        let balance = self.players[winner].balance.checked_add(pot).ok_or(ActionError::Overflow)?;
        let round = self.round.checked_add(1).ok_or(ActionError::Overflow)?;
        for player in &mut self.players {
            player.is_current = false;
        }
        self.players[winner].balance = balance;

        self.pot = 0;
        self.current_bet = 0;
        self.round = round;
        self.previous_balances.clear();
        self.player_contributions.clear();
        self.show_in_progress = false;
        self.show_players = None;
        self.last_win_amount = Some(pot);

        let name = self.players[winner].name.clone();
        info!(winner = %self.players[winner].id, pot, round = self.round, "last player standing takes the pot");
        self.last_action = Some(ActionInfo::new(ActionKind::Win, name, format!("won {pot}")));
        Ok(true)
    }

    /// Folds the loser of a show and records the pot as the winning amount.
    ///
    /// The pot itself only moves once a single contestant is left.
    pub(super) fn resolve_show(
        &mut self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<(), ActionError> {
        let (Some(winner), Some(loser)) = (self.player_index(winner_id), self.player_index(loser_id))
        else {
            return Ok(());
        };

        self.players[loser].is_active = false;
        self.rotate_from(winner);
        self.show_in_progress = false;
        self.show_players = None;
        self.last_win_amount = Some(self.pot);
        self.last_action = Some(ActionInfo::new(
            ActionKind::ShowResult,
            self.players[winner].name.clone(),
            format!("won against {}", self.players[loser].name),
        ));

        self.settle_single_survivor().map(|_| ())
    }

    pub(super) fn end_game(&mut self, winner_id: PlayerId) -> Result<(), ActionError> {
        let Some(winner) = self.player_index(winner_id) else {
            return Ok(());
        };

        let pot = self.pot;
        self.players[winner].balance =
            self.players[winner].balance.checked_add(pot).ok_or(ActionError::Overflow)?;
        for player in &mut self.players {
            player.is_active = !player.has_withdrawn;
            player.is_current = false;
            player.blind = BlindStatus::NeverActed;
        }

        self.pot = 0;
        self.current_bet = 0;
        self.previous_balances.clear();
        self.player_contributions.clear();
        self.show_in_progress = false;
        self.show_players = None;
        self.last_win_amount = Some(pot);

        info!(winner = %winner_id, pot, round = self.round, "pot awarded");
        self.last_action = Some(ActionInfo::new(
            ActionKind::WinRound,
            self.players[winner].name.clone(),
            format!("won the round ({pot})"),
        ));
        Ok(())
    }

    /// Cancels the round, handing every recorded stake back.
    pub(super) fn dismiss_round(&mut self) -> Result<(), ActionError> {
        for player in &mut self.players {
            if let Some(stake) = self.player_contributions.get(&player.id) {
                player.balance = player.balance.checked_add(*stake).ok_or(ActionError::Overflow)?;
            }
            player.is_active = !player.has_withdrawn;
            player.is_current = false;
            player.blind = BlindStatus::NeverActed;
        }

        info!(pot = self.pot, round = self.round, "round dismissed, stakes refunded");
        self.pot = 0;
        self.current_bet = 0;
        self.player_contributions.clear();
        self.show_in_progress = false;
        self.show_players = None;
        self.last_win_amount = None;
        self.last_action = Some(ActionInfo::new(
            ActionKind::Dismiss,
            "",
            "Round dismissed, balances restored",
        ));
        Ok(())
    }
}
