//! Bursar - an in-memory wallet and ledger core
//!
//! Bursar keeps the books for a small wallet service:
//! - Player registration with identity and login uniqueness checks
//! - Login/password authentication against salted credential digests
//! - One money account per player with a 9-digit unique number
//! - Credit/debit bookkeeping with globally unique transaction ids and
//!   sufficient-funds enforcement
//! - An audit trail of performed operations behind a pluggable store

pub mod audit;
pub mod config;
pub mod error;
pub mod ledger;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{WalletError, WalletResult};

// Re-export the ledger entities
pub use ledger::{Account, Entry, Player, PlayerIdentity, Transaction, TransactionType};

// Re-export the service interfaces
pub use services::{AccountRegistry, PlayerRegistry, TransactionEngine, WalletService};

// Re-export the audit trail types
pub use audit::{InMemoryOperationStore, Operation, OperationStatus, OperationStore, OperationType};

// Re-export configuration interfaces
pub use config::{AccountConfig, RegistrationConfig, WalletConfig};
