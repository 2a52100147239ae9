//! Wallet service components
//!
//! The three registries each own one concern: account numbers and queries,
//! credit/debit application, and player registration/authentication. The
//! `WalletService` orchestrator composes them behind one API and records an
//! audit operation for every call.

pub mod account_registry;
pub mod player_registry;
pub mod transaction_engine;

// Re-export main service interfaces
pub use account_registry::AccountRegistry;
pub use player_registry::PlayerRegistry;
pub use transaction_engine::TransactionEngine;

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::audit::{InMemoryOperationStore, Operation, OperationStatus, OperationStore, OperationType};
use crate::config::WalletConfig;
use crate::error::{WalletError, WalletResult};
use crate::ledger::{Account, Player, Transaction};
use crate::validation;

/// High-level wallet service coordinating the registries, the transaction
/// engine, and the audit trail
///
/// Callers resolve a `Player` via `authorize_player` (or keep the handle
/// from registration) and pass it into the account operations; transaction
/// ids are caller-supplied idempotency keys.
#[derive(Debug)]
pub struct WalletService {
    config: WalletConfig,
    players: PlayerRegistry,
    accounts: AccountRegistry,
    engine: TransactionEngine,
    store: Arc<dyn OperationStore>,
}

impl WalletService {
    /// Create a wallet service with the default in-memory audit store
    pub fn new(config: WalletConfig) -> WalletResult<Self> {
        Self::with_store(config, Arc::new(InMemoryOperationStore::new()))
    }

    /// Create a wallet service persisting audit records to the given store
    pub fn with_store(config: WalletConfig, store: Arc<dyn OperationStore>) -> WalletResult<Self> {
        config.validate()?;
        let accounts = AccountRegistry::with_config(config.account.clone());

        Ok(Self {
            players: PlayerRegistry::new(),
            accounts,
            engine: TransactionEngine::new(),
            store,
            config,
        })
    }

    /// Register a new player and create their account
    ///
    /// Form validation failures return before any state change or audit
    /// record; registry failures are recorded with a FAIL status.
    pub fn register_player(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        login: &str,
        password: &str,
    ) -> WalletResult<Arc<Player>> {
        validation::check_registration(
            first_name,
            last_name,
            email,
            login,
            password,
            &self.config.registration,
        )?;

        let result = self
            .players
            .register_player(first_name, last_name, email, login, password)
            .and_then(|player| {
                self.accounts.create_account(&player)?;
                Ok(player)
            });

        self.record(
            result.as_ref().ok().map(|player| player.id()),
            OperationType::Registration,
            result.is_ok(),
        );
        result
    }

    /// Authenticate a login/password pair and resolve the player
    pub fn authorize_player(&self, login: &str, password: &str) -> WalletResult<Arc<Player>> {
        let result = self.players.authorize_player(login, password);

        self.record(
            result.as_ref().ok().map(|player| player.id()),
            OperationType::Authorization,
            result.is_ok(),
        );
        result
    }

    /// Current balance of the player's account
    pub fn current_balance(&self, player: &Player) -> WalletResult<Decimal> {
        let result = self.accounts.current_balance(player);
        self.record(Some(player.id()), OperationType::BalanceLookup, result.is_ok());
        result
    }

    /// Chronological transaction history of the player's account
    pub fn transaction_history(&self, player: &Player) -> WalletResult<Vec<Transaction>> {
        let result = self.accounts.transaction_history(player);
        self.record(
            Some(player.id()),
            OperationType::TransactionHistoryLookup,
            result.is_ok(),
        );
        result
    }

    /// Credit the player's account
    pub fn top_up(&self, player: &Player, transaction_id: &str, amount: Decimal) -> WalletResult<()> {
        let result = self
            .account_of(player)
            .and_then(|account| self.engine.credit_account(transaction_id, account, amount));

        self.record(Some(player.id()), OperationType::Credit, result.is_ok());
        result
    }

    /// Debit the player's account
    pub fn write_off(&self, player: &Player, transaction_id: &str, amount: Decimal) -> WalletResult<()> {
        let result = self
            .account_of(player)
            .and_then(|account| self.engine.debit_account(transaction_id, account, amount));

        self.record(Some(player.id()), OperationType::Debit, result.is_ok());
        result
    }

    /// Audit records accumulated so far, in insertion order
    pub fn operation_log(&self) -> WalletResult<Vec<Operation>> {
        self.store.load_all()
    }

    /// The player registry
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The account registry
    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// The transaction engine
    pub fn engine(&self) -> &TransactionEngine {
        &self.engine
    }

    fn account_of<'a>(&self, player: &'a Player) -> WalletResult<&'a Arc<Account>> {
        player.account().ok_or_else(|| WalletError::Internal {
            message: "player has no attached account".to_string(),
            component: "wallet service".to_string(),
        })
    }

    fn record(&self, player_id: Option<Uuid>, kind: OperationType, succeeded: bool) {
        let status = if succeeded {
            OperationStatus::Success
        } else {
            OperationStatus::Fail
        };
        let operation = Operation::new(player_id, kind, status);

        if let Err(error) = self.store.save(&operation) {
            warn!(%error, kind = %kind, "failed to record operation");
        }
    }
}
