use serde::{Deserialize, Serialize};
use std::fmt;

/// The regulatory category of a fund.
///
/// `FPV` funds are voluntary pension funds; `FIC` funds are collective
/// investment funds. The category drives the default risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FundCategory {
    Fpv,
    Fic,
}

impl FundCategory {
    /// The risk classification conventionally assigned to this category.
    pub fn default_risk_level(&self) -> RiskLevel {
        match self {
            FundCategory::Fpv => RiskLevel::Moderate,
            FundCategory::Fic => RiskLevel::High,
        }
    }
}

impl fmt::Display for FundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundCategory::Fpv => write!(f, "FPV"),
            FundCategory::Fic => write!(f, "FIC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// The two kinds of entry the transaction log can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Subscription,
    Cancellation,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Subscription => write!(f, "SUBSCRIPTION"),
            TransactionKind::Cancellation => write!(f, "CANCELLATION"),
        }
    }
}
