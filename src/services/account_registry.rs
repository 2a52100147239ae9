//! Account number issuance and balance/history queries

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::AccountConfig;
use crate::error::{WalletError, WalletResult};
use crate::ledger::{Account, Player, Transaction};

/// Service issuing unique account numbers and answering balance and history
/// queries
///
/// The number set's lock is held across the whole generate-and-check loop,
/// so concurrent creations never issue the same number. Collisions are
/// retried inside the loop and never surface to the caller.
#[derive(Debug)]
pub struct AccountRegistry {
    config: AccountConfig,
    /// Account numbers already in use
    numbers: Mutex<HashSet<String>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::with_config(AccountConfig::default())
    }

    pub fn with_config(config: AccountConfig) -> Self {
        Self {
            config,
            numbers: Mutex::new(HashSet::new()),
        }
    }

    /// Create an empty account for the player and attach it
    pub fn create_account(&self, player: &Player) -> WalletResult<Arc<Account>> {
        let number = self.generate_account_number()?;
        let account = Arc::new(Account::new(number));
        player.attach_account(Arc::clone(&account))?;

        info!(
            player = %player.id(),
            account = account.number(),
            "created account"
        );

        Ok(account)
    }

    /// Issue a 9-digit account number not already in use and mark it taken
    pub fn generate_account_number(&self) -> WalletResult<String> {
        let mut numbers = self.lock_numbers()?;
        let mut rng = rand::thread_rng();
        loop {
            let number = rng
                .gen_range(self.config.number_min..self.config.number_max)
                .to_string();
            if numbers.insert(number.clone()) {
                return Ok(number);
            }
            debug!(account = %number, "account number collision, retrying");
        }
    }

    /// Current balance of the player's account
    pub fn current_balance(&self, player: &Player) -> WalletResult<Decimal> {
        self.account_of(player)?.balance()
    }

    /// Chronological transaction history of the player's account
    pub fn transaction_history(&self, player: &Player) -> WalletResult<Vec<Transaction>> {
        self.account_of(player)?.transactions()
    }

    /// Number of accounts issued so far
    pub fn account_count(&self) -> WalletResult<usize> {
        Ok(self.lock_numbers()?.len())
    }

    fn account_of<'a>(&self, player: &'a Player) -> WalletResult<&'a Arc<Account>> {
        player.account().ok_or_else(|| WalletError::Internal {
            message: "player has no attached account".to_string(),
            component: "account registry".to_string(),
        })
    }

    fn lock_numbers(&self) -> WalletResult<MutexGuard<'_, HashSet<String>>> {
        self.numbers
            .lock()
            .map_err(|_| WalletError::poisoned("account number set"))
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
