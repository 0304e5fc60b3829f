use alloc::format;

use tracing::info;

use crate::Chips;
use crate::action::{ActionInfo, ActionKind};
use crate::error::ActionError;
use crate::player::{BlindStatus, PlayerId};

use super::{ChipMap, GameState};

impl GameState {
    /// Moves `amount` from the player at `index` into the pot.
    fn stake(&mut self, index: usize, amount: Chips) -> Result<(), ActionError> {
        let Some(player) = self.players.get_mut(index) else {
            return Ok(());
        };
        let contribution = self.player_contributions.get(&player.id).copied().unwrap_or(0);

        let balance = player.balance.checked_sub(amount).ok_or(ActionError::Overflow)?;
        let contribution = contribution.checked_add(amount).ok_or(ActionError::Overflow)?;
        let pot = self.pot.checked_add(amount).ok_or(ActionError::Overflow)?;

        player.balance = balance;
        self.player_contributions.insert(player.id, contribution);
        self.pot = pot;
        Ok(())
    }

    /// Collects boot from every seated player and opens a round.
    ///
    /// Withdrawn players keep their balance and record a zero contribution.
    fn collect_boot(&mut self) -> Result<(), ActionError> {
        let boot = self.settings.boot_amount;
        let seated = Chips::try_from(self.seated_count()).map_err(|_| ActionError::Overflow)?;
        let pot = seated.checked_mul(boot).ok_or(ActionError::Overflow)?;

        self.previous_balances = self.players.iter().map(|p| (p.id, p.balance)).collect();
        self.player_contributions = self
            .players
            .iter()
            .map(|p| (p.id, if p.has_withdrawn { 0 } else { boot }))
            .collect::<ChipMap>();

        for player in self.players.iter_mut().filter(|p| !p.has_withdrawn) {
            player.balance = player.balance.checked_sub(boot).ok_or(ActionError::Overflow)?;
            player.is_active = true;
            player.blind = BlindStatus::NeverActed;
        }

        self.pot = pot;
        self.current_bet = boot;
        self.is_game_started = true;
        self.show_in_progress = false;
        self.show_players = None;
        self.last_win_amount = None;

        info!(round = self.round, players = seated, pot, "boot collected");
        Ok(())
    }

    pub(super) fn start_game(&mut self) -> Result<(), ActionError> {
        self.round = 1;
        self.in_settings_screen = false;
        self.collect_boot()?;

        let first = self.players.iter().position(|p| !p.has_withdrawn).unwrap_or(0);
        self.install_turn(first);
        Ok(())
    }

    pub(super) fn set_first_player(&mut self, player_id: PlayerId) -> Result<(), ActionError> {
        let Some(index) = self.player_index(player_id) else {
            return Ok(());
        };
        self.collect_boot()?;
        self.install_turn(index);
        self.last_action = Some(ActionInfo::new(
            ActionKind::NewRound,
            self.players[index].name.clone(),
            "starts the round",
        ));
        Ok(())
    }

    pub(super) fn chaal(&mut self, id: PlayerId) -> Result<(), ActionError> {
        let Some(index) = self.player_index(id) else {
            return Ok(());
        };
        let amount = self.call_amount();

        self.stake(index, amount)?;
        self.players[index].blind = BlindStatus::PlayedSeen;
        self.current_bet = amount;
        self.rotate_from(index);
        self.last_action = Some(ActionInfo::new(
            ActionKind::Chaal,
            self.players[index].name.clone(),
            format!("played chaal ({amount})"),
        ));
        Ok(())
    }

    pub(super) fn blind(&mut self, id: PlayerId) -> Result<(), ActionError> {
        let Some(index) = self.player_index(id) else {
            return Ok(());
        };
        let amount = self.settings.blind_amount;

        self.stake(index, amount)?;
        self.players[index].blind = BlindStatus::PlayedBlind;
        self.rotate_from(index);
        self.last_action = Some(ActionInfo::new(
            ActionKind::Blind,
            self.players[index].name.clone(),
            format!("played blind ({amount})"),
        ));
        Ok(())
    }

    pub(super) fn show(&mut self, id: PlayerId) -> Result<(), ActionError> {
        let Some(opponent) = self.contesting_players().map(|p| p.id).find(|&other| other != id)
        else {
            return Ok(());
        };
        self.open_show(id, opponent, ActionKind::Show, "requested show")
    }

    pub(super) fn back_show(
        &mut self,
        id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), ActionError> {
        self.open_show(id, target_id, ActionKind::BackShow, "requested back show")
    }

    /// Stakes the call amount and parks the turn until the show is resolved.
    fn open_show(
        &mut self,
        requester: PlayerId,
        opponent: PlayerId,
        kind: ActionKind,
        description: &str,
    ) -> Result<(), ActionError> {
        let Some(index) = self.player_index(requester) else {
            return Ok(());
        };

        let amount = self.call_amount();
        self.stake(index, amount)?;
        self.players[index].is_current = false;
        self.show_in_progress = true;
        self.show_players = Some((requester, opponent));
        self.last_action = Some(ActionInfo::new(
            kind,
            self.players[index].name.clone(),
            description,
        ));
        Ok(())
    }
}
