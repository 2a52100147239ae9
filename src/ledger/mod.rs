//! Domain entities for the wallet ledger
//!
//! The ledger model is deliberately small: a `Player` owns exactly one
//! `Account`, an `Account` owns its balance and transaction history, and an
//! `Entry` binds a login credential to its player.

pub mod account;
pub mod entry;
pub mod player;
pub mod transaction;

// Re-export the entity types
pub use account::Account;
pub use entry::Entry;
pub use player::{Player, PlayerIdentity};
pub use transaction::{Transaction, TransactionType};
