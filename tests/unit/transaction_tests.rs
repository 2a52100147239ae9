//! Unit tests for credit/debit bookkeeping through the transaction engine

use bursar::{
    AccountRegistry, PlayerRegistry, TransactionEngine, TransactionType, WalletError,
};
use rust_decimal_macros::dec;
use std::sync::Arc;

struct Fixture {
    players: PlayerRegistry,
    accounts: AccountRegistry,
    engine: TransactionEngine,
}

impl Fixture {
    fn new() -> Self {
        Self {
            players: PlayerRegistry::new(),
            accounts: AccountRegistry::new(),
            engine: TransactionEngine::new(),
        }
    }

    fn player_with_account(&self, email: &str, login: &str) -> Arc<bursar::Player> {
        let player = self
            .players
            .register_player("Ivan", "Petrov", email, login, "secret77")
            .unwrap();
        self.accounts.create_account(&player).unwrap();
        player
    }
}

#[test]
fn test_top_up_with_reused_id_rejected() {
    let fixture = Fixture::new();
    let player = fixture.player_with_account("123@mail.ru", "ivan");
    let account = player.account().unwrap();

    fixture.engine.credit_account("123", account, dec!(200)).unwrap();
    let result = fixture.engine.credit_account("123", account, dec!(500));

    assert!(matches!(
        result,
        Err(WalletError::DuplicateTransactionId { ref id }) if id == "123"
    ));
    assert_eq!(account.balance().unwrap(), dec!(200));
}

#[test]
fn test_write_off_with_reused_id_rejected() {
    let fixture = Fixture::new();
    let player = fixture.player_with_account("123@mail.ru", "ivan");
    let account = player.account().unwrap();

    fixture.engine.credit_account("223", account, dec!(500)).unwrap();
    let result = fixture.engine.debit_account("223", account, dec!(700));

    assert!(matches!(result, Err(WalletError::DuplicateTransactionId { .. })));
}

#[test]
fn test_write_off_over_balance_rejected() {
    let fixture = Fixture::new();
    let player = fixture.player_with_account("123@mail.ru", "ivan");
    let account = player.account().unwrap();

    fixture.engine.credit_account("223", account, dec!(500)).unwrap();
    let result = fixture.engine.debit_account("224", account, dec!(700));

    assert!(matches!(result, Err(WalletError::InsufficientFunds { .. })));
    assert_eq!(account.balance().unwrap(), dec!(500));
    assert_eq!(account.transactions().unwrap().len(), 1);
}

#[test]
fn test_write_off_updates_balance() {
    let fixture = Fixture::new();
    let player = fixture.player_with_account("123@mail.ru", "ivan");
    let account = player.account().unwrap();

    fixture.engine.credit_account("223", account, dec!(500)).unwrap();
    fixture.engine.debit_account("224", account, dec!(400)).unwrap();

    assert_eq!(account.balance().unwrap(), dec!(100));

    let history = account.transactions().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind(), TransactionType::Credit);
    assert_eq!(history[1].kind(), TransactionType::Debit);
    assert_eq!(history[1].amount(), dec!(400));
}

#[test]
fn test_transactions_are_equal_by_id() {
    // Two engines so the same id can be issued twice
    let first = Fixture::new();
    let second = Fixture::new();

    let first_player = first.player_with_account("123@mail.ru", "ivan");
    let second_player = second.player_with_account("456@mail.ru", "anna");

    first
        .engine
        .credit_account("t1", first_player.account().unwrap(), dec!(200))
        .unwrap();
    second
        .engine
        .credit_account("t1", second_player.account().unwrap(), dec!(999))
        .unwrap();

    let first_tx = &first_player.account().unwrap().transactions().unwrap()[0];
    let second_tx = &second_player.account().unwrap().transactions().unwrap()[0];

    assert_eq!(first_tx, second_tx);
    assert_ne!(first_tx.amount(), second_tx.amount());
}

#[test]
fn test_transaction_type_wire_names() {
    assert_eq!(serde_json::to_string(&TransactionType::Credit).unwrap(), "\"CREDIT\"");
    assert_eq!(serde_json::to_string(&TransactionType::Debit).unwrap(), "\"DEBIT\"");
    assert_eq!(TransactionType::Credit.to_string(), "CREDIT");
    assert_eq!(TransactionType::Debit.to_string(), "DEBIT");
}

#[test]
fn test_history_timestamps_are_monotonic() {
    let fixture = Fixture::new();
    let player = fixture.player_with_account("123@mail.ru", "ivan");
    let account = player.account().unwrap();

    for i in 0..5 {
        fixture
            .engine
            .credit_account(&format!("t{}", i), account, dec!(10))
            .unwrap();
    }

    let history = account.transactions().unwrap();
    for pair in history.windows(2) {
        assert!(pair[0].time() <= pair[1].time());
    }
}
