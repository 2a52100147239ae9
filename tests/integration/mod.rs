//! Integration tests for the wallet service facade and concurrent use
