//! Turn order helpers.
//!
//! Two traversals live here and they are not interchangeable:
//! [`find_next_active_player_index`] walks raw seat indices, while
//! [`find_player_behind_current`] walks only the contesting players.

use tracing::trace;

use crate::player::{Player, PlayerId};

use super::GameState;

/// Returns the seat index of the next contesting player after `current_index`.
///
/// Scans forward circularly, wrapping at the end of `players`. With fewer than
/// two contesting players `current_index` is returned unchanged. The scan
/// covers at most one full cycle.
///
/// # Example
///
/// ```
/// use tpledger::{Player, PlayerId, find_next_active_player_index};
///
/// let mut players: Vec<Player> = (0..3)
///     .map(|i| Player::new(PlayerId(i), format!("p{i}")))
///     .collect();
/// players[1].is_active = false;
///
/// assert_eq!(find_next_active_player_index(&players, 0), 2);
/// assert_eq!(find_next_active_player_index(&players, 2), 0);
/// ```
#[must_use]
pub fn find_next_active_player_index(players: &[Player], current_index: usize) -> usize {
    if players.iter().filter(|p| p.is_contesting()).count() < 2 {
        return current_index;
    }

    let len = players.len();
    let start = current_index % len;
    (1..=len)
        .map(|step| (start + step) % len)
        .find(|&index| players[index].is_contesting())
        .unwrap_or(current_index)
}

/// Returns the contesting player seated immediately before `current_player_id`.
///
/// Only contesting players are considered, and the search wraps around.
/// Returns `None` if fewer than two players are contesting or if
/// `current_player_id` is not one of them.
#[must_use]
pub fn find_player_behind_current(
    players: &[Player],
    current_player_id: PlayerId,
) -> Option<&Player> {
    let contesting: alloc::vec::Vec<&Player> =
        players.iter().filter(|p| p.is_contesting()).collect();
    if contesting.len() < 2 {
        return None;
    }

    let position = contesting.iter().position(|p| p.id == current_player_id)?;
    let behind = (position + contesting.len() - 1) % contesting.len();
    contesting.get(behind).copied()
}

impl GameState {
    /// Hands the turn to the player at `index`.
    ///
    /// Only a contesting player can hold the turn; otherwise nobody does.
    pub(super) fn install_turn(&mut self, index: usize) {
        for (i, player) in self.players.iter_mut().enumerate() {
            player.is_current = i == index && player.is_contesting();
        }
        self.current_player_index = index;
    }

    /// Passes the turn to the next contesting player after `index`.
    pub(super) fn rotate_from(&mut self, index: usize) {
        let next = find_next_active_player_index(&self.players, index);
        trace!(from = index, to = next, "turn rotated");
        self.install_turn(next);
    }
}
