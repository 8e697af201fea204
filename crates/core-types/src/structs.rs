use crate::enums::{FundCategory, RiskLevel, TransactionKind};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Funds are identified by small, human-assigned product codes, not UUIDs.
pub type FundId = u32;

/// An investment product offered by the platform.
///
/// Funds are immutable once loaded into the catalog. The `minimum_investment`
/// is both the buy-in threshold and the amount committed on subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub id: FundId,
    pub name: String,
    pub minimum_investment: Decimal,
    pub category: FundCategory,
    pub risk_level: RiskLevel,
}

impl Fund {
    /// Creates a new `Fund`, validating the terms it is being created with.
    pub fn new(
        id: FundId,
        name: impl Into<String>,
        minimum_investment: Decimal,
        category: FundCategory,
        risk_level: RiskLevel,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "name".to_string(),
                "fund name must not be empty".to_string(),
            ));
        }
        if minimum_investment.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "minimum_investment".to_string(),
                format!("must not be negative, got {}", minimum_investment),
            ));
        }
        Ok(Self {
            id,
            name,
            minimum_investment,
            category,
            risk_level,
        })
    }
}

/// An active membership committing part of the wallet balance to a fund.
///
/// `amount_committed` is fixed at creation time and is the exact amount
/// refunded on cancellation, even if the fund's minimum changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub fund_id: FundId,
    pub amount_committed: Decimal,
    pub subscribed_at: DateTime<Utc>,
}

/// A single immutable entry in the transaction log.
///
/// Entries are never mutated or deleted once written. Ordering is by
/// timestamp, with ties broken by insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub fund_id: FundId,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}
