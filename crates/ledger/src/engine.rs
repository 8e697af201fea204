use crate::error::LedgerError;
use catalog::FundCatalog;
use chrono::{DateTime, Utc};
use core_types::{Fund, FundId, Subscription, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Manages the state of a client's wallet: the uncommitted balance, the
/// active subscriptions, and the transaction log.
/// Its sole responsibility is to accurately reflect the current state based
/// on subscribe/unsubscribe operations; it performs no I/O of its own.
#[derive(Debug, Clone)]
pub struct Ledger {
    catalog: Arc<FundCatalog>,
    opening_balance: Decimal,
    balance: Decimal,
    subscriptions: BTreeMap<FundId, Subscription>,
    transactions: Vec<Transaction>,
}

/// The result of a successful `subscribe` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscribeOutcome {
    pub fund: Fund,
    pub subscription: Subscription,
    pub transaction_id: Uuid,
    pub new_balance: Decimal,
}

/// The result of a successful `unsubscribe` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelOutcome {
    pub fund: Fund,
    pub amount_refunded: Decimal,
    pub transaction_id: Uuid,
    pub cancelled_at: DateTime<Utc>,
    pub new_balance: Decimal,
}

/// The direction a transaction history snapshot is ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryOrder {
    #[serde(rename = "oldest")]
    OldestFirst,
    #[default]
    #[serde(rename = "newest")]
    NewestFirst,
}

/// A consistent point-in-time view of the wallet for read-only callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSnapshot {
    pub balance: Decimal,
    pub active_subscriptions: Vec<Subscription>,
    pub transaction_count: usize,
}

impl Ledger {
    /// Creates a new `Ledger` for a wallet opening with the given balance.
    ///
    /// The catalog is resolved up front and shared immutably, so no lookup
    /// inside an operation ever performs I/O.
    pub fn new(catalog: Arc<FundCatalog>, opening_balance: Decimal) -> Result<Self, LedgerError> {
        if opening_balance.is_sign_negative() {
            return Err(LedgerError::StateCorruption(format!(
                "opening balance must not be negative, got {}",
                opening_balance
            )));
        }
        Ok(Self {
            catalog,
            opening_balance,
            balance: opening_balance,
            subscriptions: BTreeMap::new(),
            transactions: Vec::new(),
        })
    }

    /// Opens a subscription against a fund.
    ///
    /// All preconditions are checked before anything is written, so either
    /// the debit, the membership, and the log entry all happen or none do.
    pub fn subscribe(&mut self, fund_id: FundId) -> Result<SubscribeOutcome, LedgerError> {
        self.check_invariants()?;

        let fund = self
            .catalog
            .get(fund_id)
            .cloned()
            .ok_or(LedgerError::UnknownFund(fund_id))?;

        if self.subscriptions.contains_key(&fund_id) {
            return Err(LedgerError::AlreadySubscribed {
                fund_id,
                name: fund.name,
            });
        }

        if self.balance < fund.minimum_investment {
            return Err(LedgerError::InsufficientBalance {
                fund_id,
                required: fund.minimum_investment,
                available: self.balance,
            });
        }

        // Validation passed. The subscription and its log entry share one
        // timestamp so the audit trail reconstructs the exact moment.
        let now = Utc::now();
        let subscription = Subscription {
            fund_id,
            amount_committed: fund.minimum_investment,
            subscribed_at: now,
        };
        let transaction = Transaction {
            id: Uuid::new_v4(),
            fund_id,
            kind: TransactionKind::Subscription,
            amount: fund.minimum_investment,
            timestamp: now,
        };

        self.balance -= fund.minimum_investment;
        self.subscriptions.insert(fund_id, subscription.clone());
        self.transactions.push(transaction.clone());

        tracing::info!(
            fund_id,
            fund_name = %fund.name,
            amount = %fund.minimum_investment,
            new_balance = %self.balance,
            "Subscription opened."
        );

        Ok(SubscribeOutcome {
            fund,
            subscription,
            transaction_id: transaction.id,
            new_balance: self.balance,
        })
    }

    /// Cancels an active subscription and refunds the committed amount.
    ///
    /// The refund is the amount stored on the subscription at creation time,
    /// not the fund's current minimum, which may have drifted since.
    pub fn unsubscribe(&mut self, fund_id: FundId) -> Result<CancelOutcome, LedgerError> {
        self.check_invariants()?;

        let Some(subscription) = self.subscriptions.get(&fund_id) else {
            return Err(LedgerError::NotSubscribed(fund_id));
        };
        let amount_refunded = subscription.amount_committed;

        // An active subscription whose fund is missing from the catalog means
        // the state was corrupted by an earlier bug, not by this request.
        let fund = self.catalog.get(fund_id).cloned().ok_or_else(|| {
            LedgerError::StateCorruption(format!(
                "active subscription references fund {} which is not in the catalog",
                fund_id
            ))
        })?;

        self.subscriptions.remove(&fund_id);

        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4(),
            fund_id,
            kind: TransactionKind::Cancellation,
            amount: amount_refunded,
            timestamp: now,
        };

        self.balance += amount_refunded;
        self.transactions.push(transaction.clone());

        tracing::info!(
            fund_id,
            fund_name = %fund.name,
            amount_refunded = %amount_refunded,
            new_balance = %self.balance,
            "Subscription cancelled."
        );

        Ok(CancelOutcome {
            fund,
            amount_refunded,
            transaction_id: transaction.id,
            cancelled_at: now,
            new_balance: self.balance,
        })
    }

    /// The uncommitted balance available for new subscriptions.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The active subscriptions, ordered by fund id.
    pub fn active_subscriptions(&self) -> Vec<Subscription> {
        self.subscriptions.values().cloned().collect()
    }

    /// An ordered snapshot of the transaction log.
    ///
    /// Entries are appended in chronological order, so insertion order
    /// already breaks timestamp ties.
    pub fn history(&self, order: HistoryOrder) -> Vec<Transaction> {
        let mut transactions = self.transactions.clone();
        if order == HistoryOrder::NewestFirst {
            transactions.reverse();
        }
        transactions
    }

    /// A consistent view of balance, memberships, and log size at one point.
    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            balance: self.balance,
            active_subscriptions: self.active_subscriptions(),
            transaction_count: self.transactions.len(),
        }
    }

    /// The catalog this ledger resolves fund ids against.
    pub fn catalog(&self) -> Arc<FundCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Verifies the conservation law before a mutation is allowed to run.
    ///
    /// Committed amounts plus the free balance must always reconcile to the
    /// opening balance, and the balance must never be negative. A violation
    /// here is reported as corruption, not as a validation failure.
    fn check_invariants(&self) -> Result<(), LedgerError> {
        if self.balance.is_sign_negative() {
            return Err(LedgerError::StateCorruption(format!(
                "wallet balance is negative: {}",
                self.balance
            )));
        }

        let committed: Decimal = self
            .subscriptions
            .values()
            .map(|s| s.amount_committed)
            .sum();
        if self.balance + committed != self.opening_balance {
            return Err(LedgerError::StateCorruption(format!(
                "balance {} plus committed {} does not reconcile to opening balance {}",
                self.balance, committed, self.opening_balance
            )));
        }

        Ok(())
    }
}
