use crate::engine::{CancelOutcome, HistoryOrder, Ledger, SubscribeOutcome, WalletSnapshot};
use crate::error::LedgerError;
use catalog::FundCatalog;
use core_types::{Fund, FundId, Subscription, Transaction};
use events::LedgerEvent;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

/// The capacity of the event channel. Slow consumers past this depth start
/// seeing `Lagged` errors rather than blocking the ledger.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The serialized-access handle to a wallet's ledger.
///
/// Every mutating operation on one wallet runs its full validate-then-mutate
/// sequence inside the same mutual exclusion, so two concurrent subscribes
/// can never both pass the balance check against stale state. Read-only
/// queries take the same lock for the duration of a snapshot and therefore
/// never observe a half-applied mutation.
///
/// Cloning the handle is cheap and yields another reference to the same
/// wallet.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
    catalog: Arc<FundCatalog>,
    events: broadcast::Sender<LedgerEvent>,
}

impl SharedLedger {
    /// Wraps a ledger behind the serialized-access boundary.
    pub fn new(ledger: Ledger) -> Self {
        let catalog = ledger.catalog();
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(ledger)),
            catalog,
            events,
        }
    }

    /// Subscribes a new receiver to the stream of ledger events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// The funds the wallet can subscribe to. The catalog is immutable, so
    /// no lock is needed here.
    pub fn list_funds(&self) -> Vec<Fund> {
        self.catalog.funds()
    }

    /// Looks up a single fund in the catalog.
    pub fn find_fund(&self, fund_id: FundId) -> Option<Fund> {
        self.catalog.get(fund_id).cloned()
    }

    /// Opens a subscription. See [`Ledger::subscribe`] for the rules.
    ///
    /// The event is published while the lock is still held so the event
    /// stream preserves the mutation order of the log.
    pub async fn subscribe(&self, fund_id: FundId) -> Result<SubscribeOutcome, LedgerError> {
        let mut ledger = self.inner.lock().await;
        let outcome = ledger.subscribe(fund_id)?;

        // A send error only means no receiver is currently listening.
        let _ = self.events.send(LedgerEvent::SubscriptionOpened {
            fund: outcome.fund.clone(),
            subscription: outcome.subscription.clone(),
            transaction_id: outcome.transaction_id,
            new_balance: outcome.new_balance,
        });

        Ok(outcome)
    }

    /// Cancels a subscription. See [`Ledger::unsubscribe`] for the rules.
    pub async fn unsubscribe(&self, fund_id: FundId) -> Result<CancelOutcome, LedgerError> {
        let mut ledger = self.inner.lock().await;
        let outcome = ledger.unsubscribe(fund_id)?;

        let _ = self.events.send(LedgerEvent::SubscriptionCancelled {
            fund: outcome.fund.clone(),
            amount_refunded: outcome.amount_refunded,
            transaction_id: outcome.transaction_id,
            cancelled_at: outcome.cancelled_at,
            new_balance: outcome.new_balance,
        });

        Ok(outcome)
    }

    /// The current uncommitted balance.
    pub async fn balance(&self) -> Decimal {
        self.inner.lock().await.balance()
    }

    /// The active subscriptions, ordered by fund id.
    pub async fn active_subscriptions(&self) -> Vec<Subscription> {
        self.inner.lock().await.active_subscriptions()
    }

    /// An ordered snapshot of the transaction log.
    pub async fn history(&self, order: HistoryOrder) -> Vec<Transaction> {
        self.inner.lock().await.history(order)
    }

    /// A consistent point-in-time view of the wallet.
    pub async fn snapshot(&self) -> WalletSnapshot {
        self.inner.lock().await.snapshot()
    }
}
