//! # Fondo Events
//!
//! This crate defines the event structures published by the ledger after
//! each successful mutation and consumed by the notifier service and any
//! transport layer that wants to stream state changes.
//!
//! As a Layer 0 crate, it depends only on `core-types` and provides the
//! definitive language for all state-change notifications.

// Declare the modules that make up this crate.
pub mod messages;

// Re-export the core types to provide a clean public API.
pub use messages::LedgerEvent;
