//! Credit and debit application with global transaction-id uniqueness

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{WalletError, WalletResult};
use crate::ledger::{Account, Transaction, TransactionType};

/// Service applying credit and debit operations to accounts
///
/// Transaction ids are caller-supplied and must be unique across the whole
/// system. The engine holds the account's lock for the entire
/// read-validate-append-update sequence, so the balance check never works
/// from a stale snapshot and no partial state is observable. The id set has
/// its own lock for the check-then-insert; lock order is always account
/// first, id set second.
#[derive(Debug, Default)]
pub struct TransactionEngine {
    /// Transaction ids accepted so far, across all accounts
    used_ids: Mutex<HashSet<String>>,
}

impl TransactionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add funds to the account
    pub fn credit_account(
        &self,
        transaction_id: &str,
        account: &Account,
        amount: Decimal,
    ) -> WalletResult<()> {
        self.apply(transaction_id, account, TransactionType::Credit, amount)
    }

    /// Withdraw funds from the account
    pub fn debit_account(
        &self,
        transaction_id: &str,
        account: &Account,
        amount: Decimal,
    ) -> WalletResult<()> {
        self.apply(transaction_id, account, TransactionType::Debit, amount)
    }

    /// Number of transactions accepted so far
    pub fn transaction_count(&self) -> WalletResult<usize> {
        Ok(self.lock_ids()?.len())
    }

    fn apply(
        &self,
        transaction_id: &str,
        account: &Account,
        kind: TransactionType,
        amount: Decimal,
    ) -> WalletResult<()> {
        if self.lock_ids()?.contains(transaction_id) {
            return Err(WalletError::DuplicateTransactionId {
                id: transaction_id.to_string(),
            });
        }

        if amount <= Decimal::ZERO {
            return Err(WalletError::InvalidAmount { amount });
        }

        let mut state = account.lock_state()?;

        if kind == TransactionType::Debit && amount > state.balance {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available: state.balance,
            });
        }

        // Reserve the id after every other check has passed: a rejected
        // operation must not consume it. The insert re-checks under the lock
        // in case another caller raced the same id past the check above.
        {
            let mut used_ids = self.lock_ids()?;
            if !used_ids.insert(transaction_id.to_string()) {
                return Err(WalletError::DuplicateTransactionId {
                    id: transaction_id.to_string(),
                });
            }
        }

        let transaction = Transaction::new(transaction_id, account.number(), Utc::now(), kind, amount);
        state.apply(transaction);

        debug!(
            account = account.number(),
            transaction_id,
            kind = %kind,
            amount = %amount,
            balance = %state.balance,
            "applied transaction"
        );

        Ok(())
    }

    fn lock_ids(&self) -> WalletResult<MutexGuard<'_, HashSet<String>>> {
        self.used_ids
            .lock()
            .map_err(|_| WalletError::poisoned("transaction id set"))
    }
}
