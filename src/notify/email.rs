//! SMTP delivery of price alerts.

use super::message;
use crate::config::SmtpConfig;
use crate::error::WatchError;
use crate::steam::models::RecommendedGame;
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Trait for alert delivery - enables mocking for tests.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Sends the price alert for a USD price at or below the target.
    async fn send_price_alert(
        &self,
        price_usd: f64,
        recommendations: &[RecommendedGame],
    ) -> Result<(), WatchError>;
}

/// Email notifier speaking SMTP with STARTTLS.
///
/// The relay is only configured at construction; the connection itself is
/// opened per send, so bad credentials surface as a send error.
pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
    product_url: String,
}

impl EmailNotifier {
    /// Creates a notifier from SMTP settings and the store page linked
    /// in the alert body.
    pub fn new(smtp: &SmtpConfig, product_url: impl Into<String>) -> Result<Self> {
        let sender: Mailbox = smtp
            .sender
            .parse()
            .with_context(|| format!("Invalid sender address: {}", smtp.sender))?;
        let recipient: Mailbox = smtp
            .recipient
            .parse()
            .with_context(|| format!("Invalid recipient address: {}", smtp.recipient))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .context("Failed to configure SMTP relay")?
            .port(smtp.port)
            .credentials(Credentials::new(smtp.sender.clone(), smtp.password.clone()))
            .build();

        Ok(Self { mailer, sender, recipient, product_url: product_url.into() })
    }
}

#[async_trait]
impl Notify for EmailNotifier {
    async fn send_price_alert(
        &self,
        price_usd: f64,
        recommendations: &[RecommendedGame],
    ) -> Result<(), WatchError> {
        let email = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(message::subject(price_usd))
            .header(ContentType::TEXT_PLAIN)
            .body(message::body(price_usd, &self.product_url, recommendations))
            .map_err(|e| WatchError::Notification {
                reason: format!("failed to build message: {e}"),
            })?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| WatchError::Notification { reason: e.to_string() })?;

        info!("Notification sent to {}", self.recipient);
        Ok(())
    }
}
