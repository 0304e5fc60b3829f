//! Table settings.

use crate::Chips;

/// How the chaal (call) amount is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChaalType {
    /// The current bet times [`GameSettings::chaal_multiplier`].
    #[default]
    Multiplier,
    /// Always [`GameSettings::chaal_fixed_amount`].
    Fixed,
}

/// Stake configuration for a session.
///
/// Settings are replaced wholesale between rounds with
/// [`Action::SetSettings`](crate::Action::SetSettings). Use the builder
/// methods to customize the defaults:
///
/// ```
/// use tpledger::{ChaalType, GameSettings};
///
/// let settings = GameSettings::default()
///     .with_boot_amount(5)
///     .with_chaal_type(ChaalType::Fixed)
///     .with_chaal_fixed_amount(25);
/// assert_eq!(settings.boot_amount, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    /// Stake collected from every eligible player when a round starts.
    pub boot_amount: Chips,
    /// Stake for playing blind.
    pub blind_amount: Chips,
    /// Chaal derivation.
    pub chaal_type: ChaalType,
    /// Factor applied to the current bet for [`ChaalType::Multiplier`].
    pub chaal_multiplier: Chips,
    /// Stake for [`ChaalType::Fixed`].
    pub chaal_fixed_amount: Chips,
    /// Pot limit. 0 disables the limit.
    pub pot_limit: Chips,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            boot_amount: 10,
            blind_amount: 20,
            chaal_type: ChaalType::Multiplier,
            chaal_multiplier: 2,
            chaal_fixed_amount: 20,
            pot_limit: 1000,
        }
    }
}

impl GameSettings {
    /// Returns the stake for a chaal, show or back show given the current bet.
    ///
    /// # Example
    ///
    /// ```
    /// use tpledger::{ChaalType, GameSettings};
    ///
    /// let settings = GameSettings::default().with_chaal_multiplier(2);
    /// assert_eq!(settings.call_amount(10), 20);
    ///
    /// let fixed = settings.with_chaal_type(ChaalType::Fixed).with_chaal_fixed_amount(15);
    /// assert_eq!(fixed.call_amount(10), 15);
    /// ```
    #[must_use]
    pub const fn call_amount(&self, current_bet: Chips) -> Chips {
        match self.chaal_type {
            ChaalType::Fixed => self.chaal_fixed_amount,
            ChaalType::Multiplier => current_bet.saturating_mul(self.chaal_multiplier),
        }
    }

    /// Returns whether `pot` has reached the configured limit.
    ///
    /// Always `false` when the limit is 0.
    #[must_use]
    pub const fn pot_limit_reached(&self, pot: Chips) -> bool {
        self.pot_limit > 0 && pot >= self.pot_limit
    }

    /// Sets the boot amount.
    #[must_use]
    pub const fn with_boot_amount(mut self, amount: Chips) -> Self {
        self.boot_amount = amount;
        self
    }

    /// Sets the blind amount.
    #[must_use]
    pub const fn with_blind_amount(mut self, amount: Chips) -> Self {
        self.blind_amount = amount;
        self
    }

    /// Sets how the chaal amount is derived.
    ///
    /// # Example
    ///
    /// ```
    /// use tpledger::{ChaalType, GameSettings};
    ///
    /// let settings = GameSettings::default().with_chaal_type(ChaalType::Fixed);
    /// assert_eq!(settings.chaal_type, ChaalType::Fixed);
    /// ```
    #[must_use]
    pub const fn with_chaal_type(mut self, chaal_type: ChaalType) -> Self {
        self.chaal_type = chaal_type;
        self
    }

    /// Sets the chaal multiplier.
    #[must_use]
    pub const fn with_chaal_multiplier(mut self, multiplier: Chips) -> Self {
        self.chaal_multiplier = multiplier;
        self
    }

    /// Sets the fixed chaal amount.
    #[must_use]
    pub const fn with_chaal_fixed_amount(mut self, amount: Chips) -> Self {
        self.chaal_fixed_amount = amount;
        self
    }

    /// Sets the pot limit. 0 means unlimited.
    ///
    /// # Example
    ///
    /// ```
    /// use tpledger::GameSettings;
    ///
    /// let settings = GameSettings::default().with_pot_limit(0);
    /// assert!(!settings.pot_limit_reached(1_000_000));
    /// ```
    #[must_use]
    pub const fn with_pot_limit(mut self, limit: Chips) -> Self {
        self.pot_limit = limit;
        self
    }
}

/// Returns the call amount for `settings` at `current_bet`.
///
/// Free-function form of [`GameSettings::call_amount`].
#[must_use]
pub const fn call_amount(settings: &GameSettings, current_bet: Chips) -> Chips {
    settings.call_amount(current_bet)
}
