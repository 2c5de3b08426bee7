//! Contact form handling and the outbound mail relay seam
//!
//! The site only validates and composes the message. Delivery is handed to
//! a [`MailRelay`]; the SMTP transport itself lives outside this crate and
//! the default relay just records the submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outbound relay settings (mirrored by the `contact:` config section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    /// Address the relay authenticates and sends as
    pub sender: String,
    /// Where submissions end up
    pub recipient: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            sender: String::new(),
            recipient: String::new(),
        }
    }
}

/// A contact form submission
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Reject blank fields and obviously malformed reply addresses
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.name.trim().is_empty() {
            return Err(RelayError::Invalid("name is required"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(RelayError::Invalid("a valid email address is required"));
        }
        if self.subject.trim().is_empty() {
            return Err(RelayError::Invalid("subject is required"));
        }
        if self.message.trim().is_empty() {
            return Err(RelayError::Invalid("message is required"));
        }
        Ok(())
    }
}

/// A composed email ready for the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

/// Compose the relay email for a validated submission
pub fn compose(config: &RelayConfig, msg: &ContactMessage) -> OutboundEmail {
    let body = format!(
        "From: {} <{}>\n\n{}\n",
        msg.name.trim(),
        msg.email.trim(),
        msg.message.trim()
    );

    OutboundEmail {
        from: config.sender.clone(),
        to: config.recipient.clone(),
        reply_to: msg.email.trim().to_string(),
        subject: format!("Portfolio contact: {}", msg.subject.trim()),
        body,
    }
}

/// Validate, compose and hand a submission to the relay
pub fn relay_submission(
    config: &RelayConfig,
    relay: &dyn MailRelay,
    msg: &ContactMessage,
) -> Result<(), RelayError> {
    msg.validate()?;
    if config.recipient.trim().is_empty() {
        return Err(RelayError::NotConfigured);
    }
    relay.deliver(&compose(config, msg))
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid submission: {0}")]
    Invalid(&'static str),
    #[error("mail relay is not configured")]
    NotConfigured,
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Delivery seam; the SMTP call is an external collaborator
pub trait MailRelay: Send + Sync {
    fn deliver(&self, email: &OutboundEmail) -> Result<(), RelayError>;
}

/// Default relay: logs the composed email and reports success
pub struct LogRelay;

impl MailRelay for LogRelay {
    fn deliver(&self, email: &OutboundEmail) -> Result<(), RelayError> {
        tracing::info!(
            to = %email.to,
            reply_to = %email.reply_to,
            subject = %email.subject,
            "contact submission recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site!".to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let msg = ContactMessage {
            name: "  ".to_string(),
            ..message()
        };
        assert!(matches!(msg.validate(), Err(RelayError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let msg = ContactMessage {
            email: "not-an-address".to_string(),
            ..message()
        };
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_relay_requires_recipient() {
        let config = RelayConfig::default();
        let result = relay_submission(&config, &LogRelay, &message());
        assert!(matches!(result, Err(RelayError::NotConfigured)));
    }

    #[test]
    fn test_relay_submission_delivers() {
        let config = RelayConfig {
            recipient: "me@example.com".to_string(),
            ..RelayConfig::default()
        };
        assert!(relay_submission(&config, &LogRelay, &message()).is_ok());
    }

    #[test]
    fn test_compose() {
        let config = RelayConfig {
            sender: "site@example.com".to_string(),
            recipient: "me@example.com".to_string(),
            ..RelayConfig::default()
        };
        let email = compose(&config, &message());

        assert_eq!(email.to, "me@example.com");
        assert_eq!(email.reply_to, "ada@example.com");
        assert_eq!(email.subject, "Portfolio contact: Hello");
        assert!(email.body.contains("Ada <ada@example.com>"));
        assert!(email.body.contains("Nice site!"));
    }
}
