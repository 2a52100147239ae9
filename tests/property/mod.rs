//! Property-based tests for the bookkeeping invariants
