//! Confirmation email delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport and sends the
//! [`ConfirmationEmail`] over an implicit-TLS relay. Sender credentials come
//! from [`EmailConfig`]; when either is missing nothing is sent and
//! [`EmailError::MissingCredentials`] is returned.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use loom_core::{ConfirmationSender, CoreError};

use crate::template::ConfirmationEmail;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// `EMAIL_USER` or `EMAIL_PASS` is unset or empty.
    #[error("Missing EMAIL_USER or EMAIL_PASS in environment")]
    MissingCredentials,

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

impl From<EmailError> for CoreError {
    fn from(err: EmailError) -> Self {
        match &err {
            EmailError::MissingCredentials => CoreError::Configuration(err.to_string()),
            _ => CoreError::Integration(err.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default relay (implicit TLS).
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTPS port.
const DEFAULT_SMTP_PORT: u16 = 465;

/// Configuration for the SMTP relay and sender account.
#[derive(Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Sender address, also the SMTP login.
    pub sender: Option<String>,
    /// Sender app password.
    pub password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Empty values count as unset.
    ///
    /// | Variable     | Required | Default          |
    /// |--------------|----------|------------------|
    /// | `EMAIL_USER` | to send  | —                |
    /// | `EMAIL_PASS` | to send  | —                |
    /// | `SMTP_HOST`  | no       | `smtp.gmail.com` |
    /// | `SMTP_PORT`  | no       | `465`            |
    ///
    /// # Panics
    ///
    /// Panics if `SMTP_PORT` is set but is not a valid u16.
    pub fn from_env() -> Self {
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| DEFAULT_SMTP_PORT.to_string())
                .parse()
                .expect("SMTP_PORT must be a valid u16"),
            sender: non_empty_var("EMAIL_USER"),
            password: non_empty_var("EMAIL_PASS"),
        }
    }

    /// Both halves of the sender login, or `MissingCredentials`.
    fn credentials(&self) -> Result<(&str, &str), EmailError> {
        match (self.sender.as_deref(), self.password.as_deref()) {
            (Some(sender), Some(password)) => Ok((sender, password)),
            _ => Err(EmailError::MissingCredentials),
        }
    }
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("sender", &self.sender)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends applicant confirmation emails via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Build the MIME message for `display_name` at `to`, sent from `sender`.
    pub fn compose(&self, sender: &str, to: &str, display_name: &str) -> Result<Message, EmailError> {
        let email = ConfirmationEmail::for_applicant(display_name);

        Message::builder()
            .from(sender.parse()?)
            .to(to.parse()?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    /// Send the confirmation email to `to`.
    ///
    /// Credentials are checked before any connection is opened.
    pub async fn send_confirmation(&self, to: &str, display_name: &str) -> Result<(), EmailError> {
        tracing::info!(to, "Preparing confirmation email");

        let (sender, password) = self.config.credentials()?;
        let message = self.compose(sender, to, display_name)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();
        mailer.send(message).await?;

        tracing::info!(to, "Confirmation email sent");
        Ok(())
    }
}

#[async_trait]
impl ConfirmationSender for EmailDelivery {
    async fn send(&self, recipient: &str, display_name: &str) -> Result<(), CoreError> {
        Ok(self.send_confirmation(recipient, display_name).await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn config(sender: Option<&str>, password: Option<&str>) -> EmailConfig {
        EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            // Nothing listens on the discard port, so any send attempt fails fast.
            smtp_port: 9,
            sender: sender.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn from_env_treats_empty_credentials_as_missing() {
        std::env::set_var("EMAIL_USER", "");
        std::env::remove_var("EMAIL_PASS");
        let config = EmailConfig::from_env();
        assert!(config.sender.is_none());
        assert!(config.password.is_none());
        std::env::remove_var("EMAIL_USER");
    }

    #[tokio::test]
    async fn missing_sender_skips_send() {
        let delivery = EmailDelivery::new(config(None, Some("app-password")));
        let err = delivery.send_confirmation("a@b.com", "Sara").await.unwrap_err();
        assert_matches!(err, EmailError::MissingCredentials);
    }

    #[tokio::test]
    async fn missing_password_is_configuration_error() {
        let delivery = EmailDelivery::new(config(Some("team@loomabayas.com"), None));
        let err = ConfirmationSender::send(&delivery, "a@b.com", "Sara")
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Configuration(_));
    }

    #[tokio::test]
    async fn unreachable_relay_is_integration_error() {
        let delivery = EmailDelivery::new(config(Some("team@loomabayas.com"), Some("app-password")));
        let err = ConfirmationSender::send(&delivery, "a@b.com", "Sara")
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Integration(_));
    }

    #[test]
    fn compose_addresses_message() {
        let delivery = EmailDelivery::new(config(None, None));
        let message = delivery
            .compose("team@loomabayas.com", "a@b.com", "Sara")
            .unwrap();

        let envelope = message.envelope();
        assert_eq!(envelope.to().len(), 1);
        assert_eq!(envelope.to()[0].to_string(), "a@b.com");
        assert_eq!(
            envelope.from().map(|a| a.to_string()).as_deref(),
            Some("team@loomabayas.com")
        );
    }

    #[test]
    fn compose_rejects_bad_recipient() {
        let delivery = EmailDelivery::new(config(None, None));
        let result = delivery.compose("team@loomabayas.com", "not-an-email", "Sara");
        assert_matches!(result.err(), Some(EmailError::Address(_)));
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn debug_redacts_password() {
        let debug = format!("{:?}", config(Some("team@loomabayas.com"), Some("hunter2")));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }
}
