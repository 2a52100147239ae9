//! Player identity and account ownership

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;
use crate::error::{WalletError, WalletResult};

/// The natural equality key for a player: first name, last name, email
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl PlayerIdentity {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)
    }
}

/// A registered user identity owning exactly one money account
///
/// The account is attached once at registration and is immutable
/// thereafter. Equality and hashing follow the identity tuple, not the
/// generated id, matching the registry's duplicate-registration check.
#[derive(Debug)]
pub struct Player {
    id: Uuid,
    identity: PlayerIdentity,
    account: OnceLock<Arc<Account>>,
}

impl Player {
    pub(crate) fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity: PlayerIdentity::new(first_name, last_name, email),
            account: OnceLock::new(),
        }
    }

    /// Generated unique id, assigned at registration
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.identity.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.identity.last_name
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    /// The identity tuple this player is keyed by
    pub fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    /// The player's account, once one has been attached
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.account.get()
    }

    /// Attach the player's account. Succeeds exactly once.
    pub(crate) fn attach_account(&self, account: Arc<Account>) -> WalletResult<()> {
        self.account.set(account).map_err(|_| WalletError::Internal {
            message: "account already attached".to_string(),
            component: "player".to_string(),
        })
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}
