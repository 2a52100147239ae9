//! Money account with balance and transaction history

use std::sync::{Mutex, MutexGuard};

use rust_decimal::Decimal;

use super::transaction::{Transaction, TransactionType};
use crate::error::{WalletError, WalletResult};

/// A player's single money account: a decimal balance plus the ordered
/// history of transactions applied to it.
///
/// Balance and history live behind one mutex, so a credit or debit is
/// applied as a single unit and no partial state is observable from another
/// thread. The history is append-only; insertion order is chronological
/// order.
#[derive(Debug)]
pub struct Account {
    number: String,
    state: Mutex<AccountState>,
}

/// Balance and history guarded by the account's mutex
#[derive(Debug, Default)]
pub(crate) struct AccountState {
    pub(crate) balance: Decimal,
    pub(crate) transactions: Vec<Transaction>,
}

impl AccountState {
    /// Append a transaction and adjust the balance by its amount
    pub(crate) fn apply(&mut self, transaction: Transaction) {
        match transaction.kind() {
            TransactionType::Credit => self.balance += transaction.amount(),
            TransactionType::Debit => self.balance -= transaction.amount(),
        }
        self.transactions.push(transaction);
    }
}

impl Account {
    pub(crate) fn new(number: String) -> Self {
        Self {
            number,
            state: Mutex::new(AccountState::default()),
        }
    }

    /// The account's unique 9-digit number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Current balance
    pub fn balance(&self) -> WalletResult<Decimal> {
        Ok(self.lock_state()?.balance)
    }

    /// Chronological snapshot of the transaction history
    pub fn transactions(&self) -> WalletResult<Vec<Transaction>> {
        Ok(self.lock_state()?.transactions.clone())
    }

    /// Exclusive access to balance and history for the duration of one
    /// read-validate-apply sequence
    pub(crate) fn lock_state(&self) -> WalletResult<MutexGuard<'_, AccountState>> {
        self.state
            .lock()
            .map_err(|_| WalletError::poisoned("account"))
    }
}
