//! Mock implementations for testing infrastructure

pub mod operation_store;

pub use operation_store::RecordingOperationStore;
