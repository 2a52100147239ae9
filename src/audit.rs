//! Audit trail of performed wallet operations
//!
//! The core holds authoritative balance and history state in memory; the
//! operation store is the seam where an external writer can persist the
//! audit trail. The default store keeps records in memory.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WalletError, WalletResult};

/// Kind of wallet operation recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Registration,
    Authorization,
    BalanceLookup,
    TransactionHistoryLookup,
    Credit,
    Debit,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationType::Registration => "REGISTRATION",
            OperationType::Authorization => "AUTHORIZATION",
            OperationType::BalanceLookup => "BALANCE_LOOKUP",
            OperationType::TransactionHistoryLookup => "TRANSACTION_HISTORY_LOOKUP",
            OperationType::Credit => "CREDIT",
            OperationType::Debit => "DEBIT",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a recorded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    Fail,
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Success => write!(f, "SUCCESS"),
            OperationStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// One audit record: who did what, when, and whether it succeeded
///
/// `player_id` is `None` when the operation failed before a player was
/// resolved, e.g. a rejected registration or an unknown login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    player_id: Option<Uuid>,
    kind: OperationType,
    time: DateTime<Utc>,
    status: OperationStatus,
}

impl Operation {
    pub fn new(player_id: Option<Uuid>, kind: OperationType, status: OperationStatus) -> Self {
        Self {
            player_id,
            kind,
            time: Utc::now(),
            status,
        }
    }

    pub fn player_id(&self) -> Option<Uuid> {
        self.player_id
    }

    pub fn kind(&self) -> OperationType {
        self.kind
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = match self.player_id {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        };
        write!(f, "{{{} - {} - {} - {}}}", self.kind, self.time, self.status, player)
    }
}

/// Persistence seam for the audit trail
pub trait OperationStore: fmt::Debug + Send + Sync {
    /// Persist one operation record
    fn save(&self, operation: &Operation) -> WalletResult<()>;

    /// All records persisted so far, in insertion order
    fn load_all(&self) -> WalletResult<Vec<Operation>>;
}

/// Default operation store backed by an in-memory vector
#[derive(Debug, Default)]
pub struct InMemoryOperationStore {
    operations: Mutex<Vec<Operation>>,
}

impl InMemoryOperationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationStore for InMemoryOperationStore {
    fn save(&self, operation: &Operation) -> WalletResult<()> {
        self.operations
            .lock()
            .map_err(|_| WalletError::poisoned("operation store"))?
            .push(operation.clone());
        Ok(())
    }

    fn load_all(&self) -> WalletResult<Vec<Operation>> {
        Ok(self
            .operations
            .lock()
            .map_err(|_| WalletError::poisoned("operation store"))?
            .clone())
    }
}
