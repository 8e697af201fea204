use crate::error::ConfigError;
use core_types::{FundCategory, FundId, RiskLevel};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub wallet: WalletConfig,
    pub server: ServerConfig,
    pub notifications: NotificationsConfig,
    /// The fund catalog seeded for this session.
    pub funds: Vec<FundSeed>,
}

/// Parameters for the client's wallet.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    /// The uncommitted balance the wallet starts the session with.
    pub opening_balance: Decimal,
}

/// Parameters for the HTTP API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The channel a client prefers to be notified on after a subscription event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
}

/// Contact details and preferences for subscription notifications.
///
/// Only the composition of the notification is handled in this application;
/// actual delivery is the job of whatever `Notifier` implementation is
/// plugged in at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    pub enabled: bool,
    pub channel: NotificationChannel,
    pub email: String,
    pub phone: String,
}

impl NotificationsConfig {
    /// The contact address matching the configured channel.
    pub fn contact(&self) -> &str {
        match self.channel {
            NotificationChannel::Email => &self.email,
            NotificationChannel::Sms => &self.phone,
        }
    }
}

/// One fund entry in the seeded catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct FundSeed {
    pub id: FundId,
    pub name: String,
    pub minimum_investment: Decimal,
    pub category: FundCategory,
    /// Optional override; when absent the category's conventional risk
    /// classification is used (FPV -> Moderate, FIC -> High).
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
}

impl Config {
    /// Checks that the loaded values are logical before the rest of the
    /// system is allowed to see them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wallet.opening_balance.is_sign_negative() {
            return Err(ConfigError::ValidationError(format!(
                "wallet.opening_balance must not be negative, got {}",
                self.wallet.opening_balance
            )));
        }
        if self.funds.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one fund must be configured".to_string(),
            ));
        }

        let mut seen_ids = HashSet::new();
        for fund in &self.funds {
            if !seen_ids.insert(fund.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate fund id {} in catalog seed",
                    fund.id
                )));
            }
            if fund.minimum_investment.is_sign_negative() {
                return Err(ConfigError::ValidationError(format!(
                    "fund {} has a negative minimum investment",
                    fund.id
                )));
            }
        }

        if self.notifications.enabled && self.notifications.contact().trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "notifications are enabled but the contact for the configured channel is empty"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
