//! Player registration and authentication

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::error::{WalletError, WalletResult};
use crate::ledger::{Entry, Player, PlayerIdentity};

/// Service registering players and authenticating logins
///
/// Identity and login uniqueness checks are serialized against the shared
/// collections: both locks are held across the check-then-insert, players
/// first, entries second, so concurrent registrations with the same key
/// cannot both be accepted.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    /// Identity tuples of all registered players
    players: Mutex<HashSet<PlayerIdentity>>,
    /// Credential entries keyed by login
    entries: Mutex<HashMap<String, Entry>>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player and record their credential entry
    ///
    /// After a successful return the player is resolvable by login.
    pub fn register_player(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        login: &str,
        password: &str,
    ) -> WalletResult<Arc<Player>> {
        let identity = PlayerIdentity::new(first_name, last_name, email);

        let mut players = self.lock_players()?;
        if players.contains(&identity) {
            return Err(WalletError::DuplicatePlayer {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
            });
        }

        let mut entries = self.lock_entries()?;
        if entries.contains_key(login) {
            return Err(WalletError::LoginNotUnique {
                login: login.to_string(),
            });
        }

        let player = Arc::new(Player::new(first_name, last_name, email));
        players.insert(identity);
        entries.insert(login.to_string(), Entry::new(login, password, Arc::clone(&player)));

        info!(player = %player.id(), login, "registered player");

        Ok(player)
    }

    /// Authenticate a login/password pair and resolve the player
    pub fn authorize_player(&self, login: &str, password: &str) -> WalletResult<Arc<Player>> {
        let entries = self.lock_entries()?;
        let entry = entries.get(login).ok_or_else(|| WalletError::IncorrectLogin {
            login: login.to_string(),
        })?;

        if !entry.verify(password) {
            return Err(WalletError::IncorrectPassword);
        }

        Ok(Arc::clone(entry.player()))
    }

    /// Number of registered players
    pub fn player_count(&self) -> WalletResult<usize> {
        Ok(self.lock_players()?.len())
    }

    fn lock_players(&self) -> WalletResult<MutexGuard<'_, HashSet<PlayerIdentity>>> {
        self.players
            .lock()
            .map_err(|_| WalletError::poisoned("player set"))
    }

    fn lock_entries(&self) -> WalletResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| WalletError::poisoned("entry map"))
    }
}
