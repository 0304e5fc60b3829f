//! A single-writer store for the ledger.

use alloc::sync::Arc;

use crate::action::Action;
use crate::error::ActionError;
use crate::game::{GameState, transition};
use crate::sync::Mutex;

/// Holds the authoritative snapshot and serialises transitions.
///
/// Every dispatch installs a fresh [`Arc<GameState>`]; snapshots handed out
/// earlier are never touched, so readers can keep and compare them.
///
/// # Example
///
/// ```
/// use tpledger::{Action, Table};
///
/// let table = Table::new();
/// let before = table.snapshot();
/// let after = table.dispatch(&Action::AddPlayer { name: "Kabir".into() });
///
/// assert!(before.players.is_empty());
/// assert_eq!(after.players.len(), 1);
/// ```
pub struct Table {
    state: Mutex<Arc<GameState>>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates a table holding an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Creates a table holding `state`.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state: Mutex::new(Arc::new(state)),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<GameState> {
        self.state.with(|state| Arc::clone(state))
    }

    /// Applies `action` and returns the resulting snapshot.
    ///
    /// Refused actions leave the snapshot as it was.
    pub fn dispatch(&self, action: &Action) -> Arc<GameState> {
        self.state.with(|state| {
            *state = Arc::new(transition(state, action));
            Arc::clone(state)
        })
    }

    /// Applies `action` if the ledger accepts it.
    ///
    /// # Errors
    ///
    /// Returns the reason from [`GameState::check`] and leaves the snapshot
    /// untouched when the action would be refused.
    pub fn try_dispatch(&self, action: &Action) -> Result<Arc<GameState>, ActionError> {
        self.state.with(|state| {
            state.check(action)?;
            *state = Arc::new(transition(state, action));
            Ok(Arc::clone(state))
        })
    }

    /// Replaces the snapshot wholesale, returning the previous one.
    pub fn reset(&self, state: GameState) -> Arc<GameState> {
        self.state.replace(Arc::new(state))
    }
}
