//! Session phases.

use super::GameState;

/// Session phase, derived from the flags in a [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Nobody is seated.
    NoPlayers,
    /// Players are being added.
    Setup,
    /// Settings are being reviewed before the first round.
    SettingsReview,
    /// Players are taking turns.
    InRound,
    /// A show is waiting to be resolved.
    ShowPending,
    /// The last round was settled or dismissed; waiting for an opener.
    NewRoundPending,
}

impl GameState {
    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.players.is_empty() {
            Phase::NoPlayers
        } else if self.show_in_progress {
            Phase::ShowPending
        } else if self.is_game_started && self.current_player().is_some() {
            Phase::InRound
        } else if self.is_game_started {
            Phase::NewRoundPending
        } else if self.in_settings_screen {
            Phase::SettingsReview
        } else {
            Phase::Setup
        }
    }
}
