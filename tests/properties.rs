//! Ledger invariants over random action sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use tpledger::{Action, ChaalType, GameSettings, GameState, PlayerId, STARTING_BALANCE};

fn player_id() -> impl Strategy<Value = PlayerId> {
    // One id past the seats that usually exist, to hit unknown players.
    (0u32..6).prop_map(PlayerId)
}

fn settings() -> impl Strategy<Value = GameSettings> {
    let boot = prop_oneof![8 => -20i64..60, 1 => Just(i64::MAX / 2 + 1)];
    (boot, -20i64..60, -2i64..4, -40i64..80, any::<bool>()).prop_map(
        |(boot, blind, multiplier, fixed, is_fixed)| {
            GameSettings::default()
                .with_boot_amount(boot)
                .with_blind_amount(blind)
                .with_chaal_multiplier(multiplier)
                .with_chaal_fixed_amount(fixed)
                .with_chaal_type(if is_fixed {
                    ChaalType::Fixed
                } else {
                    ChaalType::Multiplier
                })
        },
    )
}

fn roster_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|name| Action::AddPlayer { name }),
        player_id().prop_map(|id| Action::RemovePlayer { id }),
        player_id().prop_map(|id| Action::WithdrawPlayer { id }),
        (player_id(), prop_oneof![8 => -50i64..500, 1 => Just(i64::MAX), 1 => Just(i64::MIN)])
            .prop_map(|(player_id, amount)| Action::AddMoney { player_id, amount }),
        settings().prop_map(Action::SetSettings),
        Just(Action::ProceedToSettings),
        Just(Action::ClearToast),
    ]
}

fn round_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::StartGame),
        player_id().prop_map(|player_id| Action::SetFirstPlayer { player_id }),
        player_id().prop_map(|winner_id| Action::EndGame { winner_id }),
        Just(Action::DismissRound),
        Just(Action::NextPlayer),
    ]
}

fn turn_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        player_id().prop_map(|id| Action::Fold { id }),
        player_id().prop_map(|id| Action::Chaal { id }),
        player_id().prop_map(|id| Action::Blind { id }),
        player_id().prop_map(|id| Action::Show { id }),
        (player_id(), player_id()).prop_map(|(id, target_id)| Action::BackShow { id, target_id }),
        (player_id(), player_id())
            .prop_map(|(winner_id, loser_id)| Action::ResolveShow { winner_id, loser_id }),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => roster_action(),
        1 => round_action(),
        3 => turn_action(),
        1 => Just(Action::EndSession),
    ]
}

fn session() -> impl Strategy<Value = Vec<Action>> {
    let seats = Just(
        ["a", "b", "c", "d"]
            .iter()
            .map(|name| Action::AddPlayer {
                name: (*name).to_string(),
            })
            .collect::<Vec<_>>(),
    );
    (seats, prop::collection::vec(action(), 1..80)).prop_map(|(mut seats, rest)| {
        seats.push(Action::StartGame);
        seats.extend(rest);
        seats
    })
}

/// `pot + Σ balances`, wide enough never to overflow.
fn ledger(state: &GameState) -> i128 {
    i128::from(state.pot) + state.players.iter().map(|p| i128::from(p.balance)).sum::<i128>()
}

/// Expected change of [`ledger`] when `action` is applied to `state`.
fn external_delta(state: &GameState, action: &Action) -> i128 {
    if state.check(action).is_err() {
        return 0;
    }
    match action {
        Action::AddPlayer { .. } => i128::from(STARTING_BALANCE),
        Action::RemovePlayer { id } => -state.player(*id).map_or(0, |p| i128::from(p.balance)),
        Action::AddMoney { amount, .. } => i128::from(*amount),
        Action::EndSession => -ledger(state),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn money_is_conserved(actions in session()) {
        let mut state = GameState::new();
        for action in &actions {
            let expected = ledger(&state) + external_delta(&state, action);
            state = state.apply(action);
            prop_assert_eq!(ledger(&state), expected, "after {:?}", action);
            prop_assert!(state.pot >= 0, "after {:?}", action);
            prop_assert_eq!(
                i128::from(state.pot),
                state.player_contributions.values().map(|&c| i128::from(c)).sum::<i128>()
            );
        }
    }

    #[test]
    fn at_most_one_contesting_player_holds_the_turn(actions in session()) {
        let mut state = GameState::new();
        for action in &actions {
            state = state.apply(action);
            let current: Vec<_> = state.players.iter().filter(|p| p.is_current).collect();
            prop_assert!(current.len() <= 1, "after {:?}", action);
            if let Some(player) = current.first() {
                prop_assert!(player.is_contesting(), "after {:?}", action);
            }
        }
    }

    #[test]
    fn withdrawn_players_never_return(actions in session()) {
        let mut state = GameState::new();
        let mut withdrawn = HashSet::new();
        for action in &actions {
            state = state.apply(action);
            for player in &state.players {
                if withdrawn.contains(&player.id) {
                    prop_assert!(player.has_withdrawn, "after {:?}", action);
                }
                if player.has_withdrawn {
                    prop_assert!(!player.is_active && !player.is_current, "after {:?}", action);
                    withdrawn.insert(player.id);
                }
            }
        }
    }

    #[test]
    fn blind_never_moves_the_bet(actions in session(), seat in 0u32..4) {
        let mut state = GameState::new();
        for action in &actions {
            state = state.apply(action);
        }
        let next = state.apply(&Action::Blind { id: PlayerId(seat) });
        prop_assert_eq!(next.current_bet, state.current_bet);
    }

    #[test]
    fn refused_actions_change_nothing(actions in session(), last in action()) {
        let mut state = GameState::new();
        for action in &actions {
            state = state.apply(action);
        }
        if state.check(&last).is_err() {
            prop_assert_eq!(state.apply(&last), state);
        }
    }
}
