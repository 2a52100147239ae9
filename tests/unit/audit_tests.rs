//! Unit tests for audit records and the in-memory operation store

use bursar::{
    InMemoryOperationStore, Operation, OperationStatus, OperationStore, OperationType,
};
use uuid::Uuid;

#[test]
fn test_operation_wire_names() {
    assert_eq!(
        serde_json::to_string(&OperationType::BalanceLookup).unwrap(),
        "\"BALANCE_LOOKUP\""
    );
    assert_eq!(
        serde_json::to_string(&OperationStatus::Success).unwrap(),
        "\"SUCCESS\""
    );
}

#[test]
fn test_operation_display_shape() {
    let player_id = Uuid::new_v4();
    let operation = Operation::new(Some(player_id), OperationType::Credit, OperationStatus::Success);

    let rendered = operation.to_string();
    assert!(rendered.starts_with("{CREDIT - "));
    assert!(rendered.ends_with(&format!("- {}}}", player_id)));
}

#[test]
fn test_operation_without_player_renders_placeholder() {
    let operation = Operation::new(None, OperationType::Registration, OperationStatus::Fail);

    let rendered = operation.to_string();
    assert!(rendered.contains("REGISTRATION"));
    assert!(rendered.contains("FAIL"));
    assert!(rendered.ends_with("- -}"));
}

#[test]
fn test_store_preserves_insertion_order() {
    let store = InMemoryOperationStore::new();
    let player_id = Uuid::new_v4();

    let first = Operation::new(Some(player_id), OperationType::Registration, OperationStatus::Success);
    let second = Operation::new(Some(player_id), OperationType::Credit, OperationStatus::Success);
    let third = Operation::new(Some(player_id), OperationType::Debit, OperationStatus::Fail);

    store.save(&first).unwrap();
    store.save(&second).unwrap();
    store.save(&third).unwrap();

    let log = store.load_all().unwrap();
    assert_eq!(log, vec![first, second, third]);
}
