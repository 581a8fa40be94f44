//! Mail transport
//!
//! The dispatch loop only sees the [`Mailer`] trait, so tests can substitute
//! a fake transport and the SMTP details stay in one place.

pub mod smtp;

pub use smtp::SmtpMailer;

use crate::compose::ComposedMessage;
use crate::error::Result;
use async_trait::async_trait;

/// Opaque send capability: `send(message) -> success | error`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ComposedMessage) -> Result<()>;
}
