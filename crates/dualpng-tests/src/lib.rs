//! Integration tests for dualpng crates.
//!
//! These tests run the whole path from encoded files on disk through
//! packing to a written PNG, and check the error taxonomy at each stage.
