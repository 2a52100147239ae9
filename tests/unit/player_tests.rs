//! Unit tests for player identity, registration, and authentication

use bursar::{AccountRegistry, PlayerIdentity, PlayerRegistry, WalletError};
use std::sync::Arc;

#[test]
fn test_identity_display() {
    let identity = PlayerIdentity::new("Ivan", "Petrov", "123@mail.ru");
    assert_eq!(identity.to_string(), "Ivan Petrov <123@mail.ru>");
}

#[test]
fn test_identity_equality_is_the_full_tuple() {
    let identity = PlayerIdentity::new("Ivan", "Petrov", "123@mail.ru");

    assert_eq!(identity, PlayerIdentity::new("Ivan", "Petrov", "123@mail.ru"));
    assert_ne!(identity, PlayerIdentity::new("Ivan", "Petrov", "other@mail.ru"));
    assert_ne!(identity, PlayerIdentity::new("Anna", "Petrov", "123@mail.ru"));
}

#[test]
fn test_authorize_returns_the_registered_player() {
    let players = PlayerRegistry::new();
    let accounts = AccountRegistry::new();

    let registered = players
        .register_player("Ivan", "Petrov", "123@mail.ru", "ivan", "secret77")
        .unwrap();
    accounts.create_account(&registered).unwrap();

    let authorized = players.authorize_player("ivan", "secret77").unwrap();

    assert_eq!(registered.id(), authorized.id());
    // The handle resolves to the same account instance
    assert!(Arc::ptr_eq(
        registered.account().unwrap(),
        authorized.account().unwrap()
    ));
}

#[test]
fn test_same_name_different_email_is_a_new_player() {
    let players = PlayerRegistry::new();

    players
        .register_player("Ivan", "Petrov", "123@mail.ru", "ivan", "secret77")
        .unwrap();
    let second = players.register_player("Ivan", "Petrov", "456@mail.ru", "ivan2", "secret78");

    assert!(second.is_ok());
    assert_eq!(players.player_count().unwrap(), 2);
}

#[test]
fn test_login_error_before_password_error() {
    let players = PlayerRegistry::new();

    players
        .register_player("Ivan", "Petrov", "123@mail.ru", "ivan", "secret77")
        .unwrap();

    // Unknown login wins over any password mismatch
    assert!(matches!(
        players.authorize_player("unknown", "secret77"),
        Err(WalletError::IncorrectLogin { .. })
    ));
    assert!(matches!(
        players.authorize_player("ivan", "secret78"),
        Err(WalletError::IncorrectPassword)
    ));
}
