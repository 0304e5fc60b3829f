//! Actions accepted by the ledger and the notices it records.

use alloc::string::String;
use core::fmt;

use crate::Chips;
use crate::player::PlayerId;
use crate::settings::GameSettings;

/// An input to [`transition`](crate::transition).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Action {
    /// Seat a new player.
    AddPlayer {
        /// Display name.
        name: String,
    },
    /// Unseat a player before the game starts.
    RemovePlayer {
        /// Player to remove.
        id: PlayerId,
    },
    /// Permanently leave the session.
    WithdrawPlayer {
        /// Player leaving.
        id: PlayerId,
    },
    /// Move from player setup to the settings screen.
    ProceedToSettings,
    /// Collect boot from everyone and start round 1.
    StartGame,
    /// Drop out of the current round.
    Fold {
        /// Folding player.
        id: PlayerId,
    },
    /// Stake the call amount having seen one's cards.
    ///
    /// Only a player still contesting the round may chaal. A folded or
    /// withdrawn player's stake is refused, as is a negative call amount.
    Chaal {
        /// Acting player.
        id: PlayerId,
    },
    /// Stake the blind amount without seeing one's cards.
    ///
    /// Refused for folded or withdrawn players and for a negative blind
    /// amount.
    Blind {
        /// Acting player.
        id: PlayerId,
    },
    /// Request a heads-up showdown against the last other contestant.
    Show {
        /// Requesting player.
        id: PlayerId,
    },
    /// Request a showdown against the player behind.
    BackShow {
        /// Requesting player.
        id: PlayerId,
        /// Opponent.
        target_id: PlayerId,
    },
    /// Settle a pending show.
    ///
    /// The loser folds and the pot is recorded as the last win amount. The
    /// pot is paid out only if the winner is then the last contestant.
    ResolveShow {
        /// Player who stays in.
        winner_id: PlayerId,
        /// Player who folds.
        loser_id: PlayerId,
    },
    /// Award the pot and close the round.
    EndGame {
        /// Player receiving the pot.
        winner_id: PlayerId,
    },
    /// Start the next round with a chosen opener.
    SetFirstPlayer {
        /// Player who acts first.
        player_id: PlayerId,
    },
    /// Cancel the round and refund every stake.
    DismissRound,
    /// Reset everything back to an empty table.
    EndSession,
    /// Replace the settings.
    SetSettings(GameSettings),
    /// Pass the turn on.
    NextPlayer,
    /// Credit chips from outside the session.
    AddMoney {
        /// Player credited.
        player_id: PlayerId,
        /// Chips added.
        amount: Chips,
    },
    /// Clear the last notice.
    ClearToast,
}

/// Kind of notice recorded in [`GameState::last_action`](crate::GameState::last_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// A player withdrew.
    Withdraw,
    /// A player folded.
    Fold,
    /// A player played chaal.
    Chaal,
    /// A player played blind.
    Blind,
    /// A player requested a show.
    Show,
    /// A player requested a back show.
    BackShow,
    /// A show was settled.
    ShowResult,
    /// The last contestant took the pot.
    Win,
    /// The pot was awarded by [`Action::EndGame`].
    WinRound,
    /// A new round began.
    NewRound,
    /// Chips were added to a player.
    AddMoney,
    /// The round was dismissed.
    Dismiss,
}

/// A notice describing the last state change, for toast delivery.
///
/// The [`Display`](fmt::Display) form is the toast title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionInfo {
    /// What happened.
    pub kind: ActionKind,
    /// Acting player's display name. Empty for table-wide notices.
    pub player_name: String,
    /// Free text.
    pub description: String,
}

impl ActionInfo {
    pub(crate) fn new(
        kind: ActionKind,
        player_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            player_name: player_name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ActionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.player_name.is_empty() {
            f.write_str(&self.description)
        } else {
            write!(f, "{} {}", self.player_name, self.description)
        }
    }
}
