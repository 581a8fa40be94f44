//! outreach-rs: deduplicated batch outreach mailer
//!
//! Composes personalized emails from text templates and a contacts CSV,
//! tracks what was already sent in an append-only log, and dispatches
//! sequentially over SMTP with per-row and per-run dedupe.
//!
//! # Pipeline
//!
//! - **Templates**: `{field}` placeholders filled from a contact row
//! - **Subject**: closed rule table keyed by the row's `template` field
//! - **Ledger**: persisted append-only sent-log consulted before every send
//! - **Composer**: row + template + cc policy -> ready-to-send message
//! - **Dispatch loop**: dedupe, optional preview, send, log, repeat
//!
//! # Example
//!
//! ```no_run
//! use outreach_rs::compose::Composer;
//! use outreach_rs::config::Config;
//! use outreach_rs::contacts::load_contacts;
//! use outreach_rs::dispatch::DispatchLoop;
//! use outreach_rs::ledger::SentLedger;
//! use outreach_rs::mailer::SmtpMailer;
//! use outreach_rs::templates::TemplateSource;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let rows = load_contacts(&config.paths.contacts_csv)?;
//!
//!     let composer = Composer::new(
//!         TemplateSource::Directory(config.paths.template_dir.clone().into()),
//!         config.sender.cc_address.clone(),
//!         config.defaults.cc_myself,
//!     );
//!     let mailer = Arc::new(SmtpMailer::new(&config.sender, &config.smtp)?);
//!     let ledger = SentLedger::new(&config.paths.sent_log);
//!
//!     let report = DispatchLoop::new(composer, mailer, ledger)
//!         .run(&rows, None)
//!         .await?;
//!     println!("sent {}", report.sent);
//!     Ok(())
//! }
//! ```

pub mod compose;
pub mod config;
pub mod contacts;
pub mod dispatch;
pub mod error;
pub mod ledger;
pub mod mailer;
pub mod subject;
pub mod templates;

// Re-export commonly used types
pub use config::Config;
pub use error::{OutreachError, Result};
