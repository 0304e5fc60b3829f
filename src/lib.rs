//! A Teen Patti session ledger with optional `no_std` support.
//!
//! The crate tracks buy-ins, bets, the pot, showdowns, withdrawals and
//! payouts for a table of players. It deals no cards and evaluates no hands:
//! every change goes through [`transition`], a pure function from one
//! [`GameState`] snapshot and an [`Action`] to the next snapshot.
//!
//! # Example
//!
//! ```
//! use tpledger::{Action, GameState, transition};
//!
//! let state = GameState::new();
//! let state = transition(&state, &Action::AddPlayer { name: "Asha".into() });
//! let state = transition(&state, &Action::AddPlayer { name: "Ravi".into() });
//! let state = transition(&state, &Action::StartGame);
//!
//! assert_eq!(state.pot, 20);
//! assert_eq!(state.round, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod error;
pub mod game;
pub mod player;
pub mod settings;
mod sync;
pub mod table;

/// Chip amounts. Signed because a boot may briefly overdraw a balance.
pub type Chips = i64;

// Re-export main types
pub use action::{Action, ActionInfo, ActionKind};
pub use error::ActionError;
pub use game::turn::{find_next_active_player_index, find_player_behind_current};
pub use game::{
    ChipMap, GameState, MoveOptions, Phase, check_for_single_player_win, transition,
};
pub use player::{BlindStatus, Player, PlayerId, STARTING_BALANCE};
pub use settings::{ChaalType, GameSettings, call_amount};
pub use table::Table;
