//! Credit and debit transaction records

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of balance change a transaction applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Funds added to the account
    Credit,
    /// Funds withdrawn from the account
    Debit,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "CREDIT"),
            TransactionType::Debit => write!(f, "DEBIT"),
        }
    }
}

/// Immutable record of one balance change on an account
///
/// Transaction ids are caller-supplied and unique across the whole system,
/// so equality and hashing follow the id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    account_number: String,
    time: DateTime<Utc>,
    kind: TransactionType,
    amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(
        id: &str,
        account_number: &str,
        time: DateTime<Utc>,
        kind: TransactionType,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.to_string(),
            account_number: account_number.to_string(),
            time,
            kind,
            amount,
        }
    }

    /// Caller-supplied unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of the account this transaction was applied to
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Time the transaction was applied
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Whether this transaction credited or debited the account
    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    /// Transaction amount, always positive
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} on account {} at {} (id {})",
            self.kind, self.amount, self.account_number, self.time, self.id
        )
    }
}
