use chrono::{DateTime, Utc};
use core_types::{Fund, Subscription};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The top-level ledger event enum.
///
/// Every successful mutating operation on the ledger produces exactly one of
/// these. The `#[serde(tag = "type", content = "payload")]` attribute
/// serializes the enum into a clean JSON object that is easy for stream
/// consumers to dispatch on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum LedgerEvent {
    /// A subscription was opened against a fund.
    SubscriptionOpened {
        fund: Fund,
        subscription: Subscription,
        transaction_id: Uuid,
        new_balance: Decimal,
    },
    /// An active subscription was cancelled and its committed amount refunded.
    SubscriptionCancelled {
        fund: Fund,
        amount_refunded: Decimal,
        transaction_id: Uuid,
        cancelled_at: DateTime<Utc>,
        new_balance: Decimal,
    },
}

impl LedgerEvent {
    /// The fund the event concerns.
    pub fn fund(&self) -> &Fund {
        match self {
            LedgerEvent::SubscriptionOpened { fund, .. } => fund,
            LedgerEvent::SubscriptionCancelled { fund, .. } => fund,
        }
    }
}
