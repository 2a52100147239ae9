//! Login credential entries

use std::sync::Arc;

use rand::RngCore;

use super::player::Player;
use crate::error::utils;

/// A login/password credential bound to a player
///
/// The password itself is never stored: the entry keeps a random salt and
/// the SHA256 digest of salt and password, and verification recomputes the
/// digest from the attempt.
#[derive(Debug, Clone)]
pub struct Entry {
    login: String,
    salt: String,
    digest: String,
    player: Arc<Player>,
}

impl Entry {
    pub(crate) fn new(login: &str, password: &str, player: Arc<Player>) -> Self {
        let mut salt_bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt_bytes);
        let salt = utils::to_hex(&salt_bytes);
        let digest = Self::digest_for(&salt, password);
        Self {
            login: login.to_string(),
            salt,
            digest,
            player,
        }
    }

    fn digest_for(salt: &str, password: &str) -> String {
        utils::sha256_hex(format!("{}:{}", salt, password).as_bytes())
    }

    /// Check a password attempt against the stored digest
    pub fn verify(&self, password: &str) -> bool {
        Self::digest_for(&self.salt, password) == self.digest
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// The player this credential belongs to
    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }
}
