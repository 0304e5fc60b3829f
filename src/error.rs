//! Error types for action validation.
//!
//! [`transition`](crate::transition) never fails; it answers every refused
//! action with an unchanged snapshot. These errors explain *why* an action
//! would be refused, via [`GameState::check`](crate::GameState::check) and
//! [`Table::try_dispatch`](crate::Table::try_dispatch).

use thiserror::Error;

/// Reasons the ledger refuses an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player has the referenced id.
    #[error("player not found")]
    PlayerNotFound,
    /// The roster is empty.
    #[error("no players at the table")]
    NoPlayers,
    /// The player has left the session.
    #[error("player has withdrawn from the session")]
    PlayerWithdrawn,
    /// The player is not contesting the current round.
    #[error("player is not contesting this round")]
    PlayerNotContesting,
    /// The stake is below zero.
    #[error("stake amount is negative")]
    NegativeStake,
    /// The player cannot cover the stake.
    #[error("insufficient balance for this action")]
    InsufficientFunds,
    /// Fewer than two players are eligible to play.
    #[error("at least two players are required")]
    NotEnoughPlayers,
    /// A show needs exactly two players contesting the round.
    #[error("a show needs exactly two players in the round")]
    NeedsTwoContestants,
    /// The target of a back show is not a valid opponent.
    #[error("invalid back show target")]
    InvalidShowTarget,
    /// No show is waiting to be resolved.
    #[error("no show is in progress")]
    NoShowPending,
    /// The player is not part of the pending show.
    #[error("player is not part of the pending show")]
    NotShowParticipant,
    /// A round is still live (pot or contributions outstanding).
    #[error("a round is already in progress")]
    GameInProgress,
    /// A balance, the pot or a counter would leave the range of its type.
    #[error("amount overflows the ledger")]
    Overflow,
}
