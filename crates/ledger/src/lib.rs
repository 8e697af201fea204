//! # Fondo Ledger Crate
//!
//! This crate provides the subscription/balance consistency core: the wallet
//! balance, the active-subscription set, and the append-only transaction log,
//! together with `subscribe` and `unsubscribe` as the only operations allowed
//! to mutate them.
//!
//! ## Architectural Principles
//!
//! - **State vs. Access Decoupling:** The `Ledger` struct is a plain,
//!   synchronous state machine: it validates an operation in full and then
//!   applies the whole effect or none of it. The `SharedLedger` wrapper owns
//!   the concurrency story, serializing every validate-then-mutate sequence
//!   behind one mutual-exclusion boundary so two operations on the same
//!   wallet can never interleave.
//! - **Typed failures:** Every expected business condition is a
//!   `LedgerError` value returned to the caller; the engine never panics on
//!   a bad request, and a failed call leaves no trace in the state.
//!
//! ## Public API
//!
//! - `Ledger`: the in-memory state machine for a wallet.
//! - `SharedLedger`: the serialized-access handle used by concurrent callers.
//! - `LedgerError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod shared;

// Re-export the key components to provide a clean, public-facing API.
pub use engine::{CancelOutcome, HistoryOrder, Ledger, SubscribeOutcome, WalletSnapshot};
pub use error::LedgerError;
pub use shared::SharedLedger;
