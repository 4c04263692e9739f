// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Code delivery senders.
//!
//! `ConsoleSender` is the development-mode stand-in: it logs the code
//! instead of mailing it. `SmtpSender` is the production path over a
//! STARTTLS relay.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use folio_config::model::SmtpConfig;
use folio_core::{CodeSender, FolioError};

/// Development-mode sender: logs the code at info level.
///
/// Mirrors the original deployment, where out-of-band delivery was a
/// dev-mode log line and production delivery an external concern.
pub struct ConsoleSender;

#[async_trait]
impl CodeSender for ConsoleSender {
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), FolioError> {
        info!(%email, %code, "development mode: verification code issued");
        Ok(())
    }
}

/// SMTP sender over a STARTTLS relay.
pub struct SmtpSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    ttl_minutes: i64,
}

impl SmtpSender {
    /// Build the sender from the `[smtp]` config section.
    ///
    /// `relay` and `from` are required (config validation enforces this
    /// when the SMTP sender is selected); credentials are optional for
    /// unauthenticated relays.
    pub fn from_config(config: &SmtpConfig, ttl_minutes: i64) -> Result<Self, FolioError> {
        let relay = config
            .relay
            .as_deref()
            .ok_or_else(|| FolioError::Config("smtp.relay is required".to_string()))?;
        let from = config
            .from
            .as_deref()
            .ok_or_else(|| FolioError::Config("smtp.from is required".to_string()))?
            .parse::<Mailbox>()
            .map_err(|e| FolioError::Config(format!("smtp.from is not a valid mailbox: {e}")))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(relay)
            .map_err(|e| FolioError::Config(format!("invalid SMTP relay `{relay}`: {e}")))?;
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            ttl_minutes,
        })
    }
}

#[async_trait]
impl CodeSender for SmtpSender {
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), FolioError> {
        let to = email.parse::<Mailbox>().map_err(|e| FolioError::Delivery {
            message: format!("recipient `{email}` is not a valid mailbox: {e}"),
            source: Some(Box::new(e)),
        })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your verification code")
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Your verification code is {code}.\n\nIt expires in {} minutes.\n",
                self.ttl_minutes
            ))
            .map_err(|e| FolioError::Delivery {
                message: format!("failed to build verification mail: {e}"),
                source: Some(Box::new(e)),
            })?;

        self.transport
            .send(message)
            .await
            .map_err(|e| FolioError::Delivery {
                message: format!("SMTP send failed: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn console_sender_always_succeeds() {
        ConsoleSender
            .send_verification("dev@example.com", "123456")
            .await
            .unwrap();
    }

    #[test]
    fn smtp_sender_requires_relay_and_from() {
        let config = SmtpConfig::default();
        assert!(matches!(
            SmtpSender::from_config(&config, 15),
            Err(FolioError::Config(_))
        ));

        let config = SmtpConfig {
            relay: Some("smtp.example.com".to_string()),
            from: Some("not a mailbox".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            SmtpSender::from_config(&config, 15),
            Err(FolioError::Config(_))
        ));
    }

    #[test]
    fn smtp_sender_builds_with_complete_config() {
        let config = SmtpConfig {
            relay: Some("smtp.example.com".to_string()),
            username: Some("mailer".to_string()),
            password: Some("hunter2".to_string()),
            from: Some("Folio <noreply@example.com>".to_string()),
        };
        assert!(SmtpSender::from_config(&config, 15).is_ok());
    }

    #[tokio::test]
    async fn smtp_sender_rejects_invalid_recipient_before_connecting() {
        let config = SmtpConfig {
            relay: Some("smtp.example.com".to_string()),
            from: Some("noreply@example.com".to_string()),
            ..Default::default()
        };
        let sender = SmtpSender::from_config(&config, 15).unwrap();
        let err = sender
            .send_verification("definitely not an address", "123456")
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Delivery { .. }));
    }
}
