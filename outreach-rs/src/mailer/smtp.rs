//! SMTP submission over TLS via lettre

use crate::compose::ComposedMessage;
use crate::config::{SenderConfig, SmtpConfig};
use crate::error::{OutreachError, Result};
use crate::mailer::Mailer;
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

/// Mailer that submits through an authenticated SMTP-over-TLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a transport from configuration.
    ///
    /// Uses implicit TLS on the configured port (465 for Gmail submission).
    pub fn new(sender: &SenderConfig, smtp: &SmtpConfig) -> Result<Self> {
        let from: Mailbox = format!("{} <{}>", sender.name, sender.email)
            .parse()
            .map_err(|_| OutreachError::InvalidAddress(sender.email.clone()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
            .map_err(|e| OutreachError::Transport(e.to_string()))?
            .port(smtp.port)
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        debug!("SMTP transport ready for {}:{}", smtp.host, smtp.port);
        Ok(Self { transport, from })
    }

    fn build_message(&self, message: &ComposedMessage) -> Result<Message> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|_| OutreachError::InvalidAddress(message.to.clone()))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject);

        if let Some(cc) = &message.cc {
            let cc: Mailbox = cc
                .parse()
                .map_err(|_| OutreachError::InvalidAddress(cc.clone()))?;
            builder = builder.cc(cc);
        }

        builder
            .body(message.body.clone())
            .map_err(|e| OutreachError::Transport(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &ComposedMessage) -> Result<()> {
        let email = self.build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| OutreachError::Transport(e.to_string()))?;

        info!("Sent mail to {}", message.to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_configs() -> (SenderConfig, SmtpConfig) {
        (
            SenderConfig {
                name: "Chris Low".to_string(),
                email: "chris@example.com".to_string(),
                cc_address: "el52@rice.edu".to_string(),
            },
            SmtpConfig {
                host: "smtp.gmail.com".to_string(),
                port: 465,
                username: "chris@example.com".to_string(),
                password: "app-pass".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_build_message_with_cc() {
        let (sender, smtp) = test_configs();
        let mailer = SmtpMailer::new(&sender, &smtp).unwrap();

        let msg = ComposedMessage {
            key: "jo::lee::acme.com".to_string(),
            to: "jo.lee@acme.com".to_string(),
            cc: Some("el52@rice.edu".to_string()),
            subject: "Hello".to_string(),
            body: "Hi Jo".to_string(),
            cced: true,
        };

        let email = mailer.build_message(&msg).unwrap();
        let raw = String::from_utf8(email.formatted()).unwrap();
        assert!(raw.contains("To: jo.lee@acme.com"));
        assert!(raw.contains("Cc: el52@rice.edu"));
        assert!(raw.contains("Subject: Hello"));
    }

    #[tokio::test]
    async fn test_build_message_rejects_malformed_recipient() {
        let (sender, smtp) = test_configs();
        let mailer = SmtpMailer::new(&sender, &smtp).unwrap();

        let msg = ComposedMessage {
            key: "k".to_string(),
            to: "not an address".to_string(),
            cc: None,
            subject: "s".to_string(),
            body: "b".to_string(),
            cced: false,
        };

        assert!(matches!(
            mailer.build_message(&msg).unwrap_err(),
            OutreachError::InvalidAddress(_)
        ));
    }
}
