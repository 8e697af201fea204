//! # Fondo Notifier
//!
//! Composes client-facing notifications for subscription events and hands
//! them to a pluggable delivery sink. Only composition lives here; the wire
//! side of email/SMS delivery belongs to whatever `Notifier` implementation
//! the binary plugs in.

use async_trait::async_trait;
use configuration::{NotificationChannel, NotificationsConfig};
use events::LedgerEvent;
use tokio::sync::broadcast;

pub mod error;

pub use error::NotifierError;

/// A fully composed notification, ready for a delivery sink.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMessage {
    pub channel: NotificationChannel,
    pub contact: String,
    pub subject: String,
    pub body: String,
}

/// The delivery contract. Implementations own transport, credentials, and
/// retry policy; the service loop only hands them composed messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, message: &NotificationMessage) -> Result<(), NotifierError>;
}

/// A sink that writes notifications to the application log. Used wherever a
/// real delivery provider is not wired up.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn deliver(&self, message: &NotificationMessage) -> Result<(), NotifierError> {
        tracing::info!(
            channel = ?message.channel,
            contact = %message.contact,
            subject = %message.subject,
            body = %message.body,
            "Notification delivered."
        );
        Ok(())
    }
}

/// Composes the notification for a ledger event according to the client's
/// channel preference. Returns `None` when notifications are disabled.
pub fn compose_message(
    event: &LedgerEvent,
    config: &NotificationsConfig,
) -> Option<NotificationMessage> {
    if !config.enabled {
        return None;
    }

    let fund = event.fund();
    let (subject, action) = match event {
        LedgerEvent::SubscriptionOpened { .. } => (
            format!("Subscription confirmed: {}", fund.name),
            "You are now subscribed to",
        ),
        LedgerEvent::SubscriptionCancelled { .. } => (
            format!("Cancellation confirmed: {}", fund.name),
            "Your subscription was cancelled for",
        ),
    };

    let body = match config.channel {
        // Email gets the full fund sheet.
        NotificationChannel::Email => format!(
            "{action} the fund {name}.\n\
             \n\
             Fund details:\n\
             - Name: {name}\n\
             - Category: {category}\n\
             - Risk level: {risk}\n\
             - Minimum investment: ${minimum}\n\
             \n\
             Thank you for trusting us with your investments.",
            action = action,
            name = fund.name,
            category = fund.category,
            risk = fund.risk_level,
            minimum = fund.minimum_investment,
        ),
        // SMS bodies stay within a single segment.
        NotificationChannel::Sms => format!(
            "{action} {name} ({category}, min ${minimum}).",
            action = action,
            name = fund.name,
            category = fund.category,
            minimum = fund.minimum_investment,
        ),
    };

    Some(NotificationMessage {
        channel: config.channel,
        contact: config.contact().to_string(),
        subject,
        body,
    })
}

/// A long-running service that drains the ledger event channel and delivers
/// one notification per event through the given sink.
pub async fn run_notifier_service<N: Notifier>(
    notifier: N,
    config: NotificationsConfig,
    mut event_rx: broadcast::Receiver<LedgerEvent>,
) {
    tracing::info!("Notifier service started. Listening for ledger events.");

    loop {
        match event_rx.recv().await {
            Ok(event) => {
                let Some(message) = compose_message(&event, &config) else {
                    continue;
                };
                if let Err(e) = notifier.deliver(&message).await {
                    tracing::error!(error = ?e, "Failed to deliver notification.");
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("Notifier service lagged, skipped {} events.", n);
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("Event channel closed. Notifier service shutting down.");
                break;
            }
        }
    }
}
