//! Application layer orchestrating receipt acceptance and lookup.
//!
//! This module defines the `ReceiptProcessor`, the single entry point the
//! HTTP interface calls into. It ties the scoring rules to the receipt store
//! and the id generator.

pub mod processor;
