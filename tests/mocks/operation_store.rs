//! Recording audit store for asserting on persisted operations

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use bursar::{Operation, OperationStore, WalletError, WalletResult};

/// Audit store that records every save and can be switched to fail,
/// simulating an unavailable external writer
#[derive(Debug, Default)]
pub struct RecordingOperationStore {
    operations: Mutex<Vec<Operation>>,
    fail_saves: AtomicBool,
}

impl RecordingOperationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of everything saved so far
    pub fn saved(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }
}

impl OperationStore for RecordingOperationStore {
    fn save(&self, operation: &Operation) -> WalletResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(WalletError::Internal {
                message: "store offline".to_string(),
                component: "recording store".to_string(),
            });
        }
        self.operations.lock().unwrap().push(operation.clone());
        Ok(())
    }

    fn load_all(&self) -> WalletResult<Vec<Operation>> {
        Ok(self.saved())
    }
}
