pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{FundCategory, RiskLevel, TransactionKind};
pub use error::CoreError;
pub use structs::{Fund, FundId, Subscription, Transaction};
