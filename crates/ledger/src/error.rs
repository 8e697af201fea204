use core_types::FundId;
use rust_decimal::Decimal;
use thiserror::Error;

/// The failure taxonomy of the ledger engine.
///
/// The first four variants are recoverable, caller-facing validation
/// failures; none of them leave partial state behind. `StateCorruption` is
/// different in kind: it means an invariant was already broken on entry,
/// which indicates a prior bug rather than a bad request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Unknown fund id: {0}")]
    UnknownFund(FundId),

    #[error("Already subscribed to fund {name} (id {fund_id})")]
    AlreadySubscribed { fund_id: FundId, name: String },

    #[error("Not subscribed to fund id: {0}")]
    NotSubscribed(FundId),

    #[error("Not enough balance to subscribe to fund {fund_id}. Required: {required}, Available: {available}")]
    InsufficientBalance {
        fund_id: FundId,
        required: Decimal,
        available: Decimal,
    },

    #[error("Ledger state corruption detected: {0}")]
    StateCorruption(String),
}

impl LedgerError {
    /// Whether the failure is a plain validation outcome the caller can
    /// present to the user, as opposed to an internal fault.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LedgerError::StateCorruption(_))
    }
}
