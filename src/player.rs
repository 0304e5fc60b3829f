//! Player records.

use alloc::string::String;
use core::fmt;

use crate::Chips;

/// Balance every player is seated with.
pub const STARTING_BALANCE: Chips = 1000;

/// Opaque player identifier, unique within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a player has staked in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlindStatus {
    /// Has not staked since the round started.
    #[default]
    NeverActed,
    /// Has only played blind.
    PlayedBlind,
    /// Has played chaal (seen their cards).
    PlayedSeen,
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Chips held outside the pot.
    pub balance: Chips,
    /// Still contesting the current round.
    pub is_active: bool,
    /// Holds the turn.
    pub is_current: bool,
    /// Blind/seen status for the current round.
    pub blind: BlindStatus,
    /// Permanently left the session.
    pub has_withdrawn: bool,
}

impl Player {
    /// Creates a player seated with [`STARTING_BALANCE`].
    #[must_use]
    pub const fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            balance: STARTING_BALANCE,
            is_active: true,
            is_current: false,
            blind: BlindStatus::NeverActed,
            has_withdrawn: false,
        }
    }

    /// Returns whether the player can take a turn: active and not withdrawn.
    #[must_use]
    pub const fn is_contesting(&self) -> bool {
        self.is_active && !self.has_withdrawn
    }

    /// Returns whether the player is currently playing blind.
    #[must_use]
    pub const fn is_on_blind(&self) -> bool {
        matches!(self.blind, BlindStatus::PlayedBlind)
    }

    /// Returns whether the player has played seen this round.
    #[must_use]
    pub const fn has_seen(&self) -> bool {
        matches!(self.blind, BlindStatus::PlayedSeen)
    }
}
