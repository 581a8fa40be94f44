//! Sequential dispatch over a contact list
//!
//! One row is fully composed, optionally previewed, sent, and logged before
//! the next row begins. The ledger file is the only shared mutable resource
//! and has exactly one strictly sequential writer, so append-only writes are
//! all the discipline required.

use crate::compose::Composer;
use crate::contacts::ContactRow;
use crate::dispatch::reviewer::{ReviewDecision, Reviewer};
use crate::error::Result;
use crate::ledger::SentLedger;
use crate::mailer::Mailer;
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Final counters for a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Messages dispatched and recorded in the ledger.
    pub sent: usize,
    /// Rows skipped because their key was already logged or already claimed
    /// earlier in this run.
    pub duplicates: usize,
    /// Rows declined by the reviewer. Their keys stay claimed but are not
    /// persisted, so a future run may offer them again.
    pub skipped_by_user: usize,
    /// True when the reviewer stopped the run before the last row.
    pub aborted: bool,
}

/// The orchestrating state machine.
///
/// Per row: `PENDING -> {SKIPPED_DUPLICATE | SKIPPED_BY_USER | SENT |
/// ABORTED}`. Rows are processed in contact-list order; that order is also
/// the order in which dedupe keys are first claimed within a run.
pub struct DispatchLoop {
    composer: Composer,
    mailer: Arc<dyn Mailer>,
    ledger: SentLedger,
    delay_secs: (f64, f64),
}

impl DispatchLoop {
    pub fn new(composer: Composer, mailer: Arc<dyn Mailer>, ledger: SentLedger) -> Self {
        Self {
            composer,
            mailer,
            ledger,
            // Uniform pause between sends, to stay under provider rate limits.
            delay_secs: (1.0, 3.0),
        }
    }

    /// Override the inter-send delay range (tests pass zero).
    pub fn with_delay(mut self, min_secs: f64, max_secs: f64) -> Self {
        self.delay_secs = (min_secs, max_secs);
        self
    }

    /// Process every row in order.
    ///
    /// With a reviewer, each composed message is offered for a
    /// proceed/skip/abort decision and composition errors are reported and
    /// the run continues; without one the run is unattended and a
    /// composition error is fatal.
    ///
    /// Transport and ledger errors always abort: a failed send leaves the
    /// row unrecorded so a re-run retries it, and a failed ledger append
    /// after a successful send must reach the operator rather than risk a
    /// duplicate next run.
    pub async fn run(
        &self,
        rows: &[ContactRow],
        mut reviewer: Option<&mut dyn Reviewer>,
    ) -> Result<RunReport> {
        let sent_keys = self.ledger.load()?;
        info!("Loaded {} sent emails from log", sent_keys.len());

        let mut claimed: HashSet<String> = HashSet::new();
        let mut report = RunReport::default();

        for (row_number, row) in rows.iter().enumerate() {
            let message = match self.composer.compose_row(row) {
                Ok(message) => message,
                Err(e) => {
                    if reviewer.is_some() {
                        error!("Row {}: composition failed: {}", row_number + 1, e);
                        continue;
                    }
                    error!("Row {}: composition failed, aborting: {}", row_number + 1, e);
                    return Err(e);
                }
            };

            if sent_keys.contains(&message.key) || claimed.contains(&message.key) {
                info!("Skipping {} (already sent)", message.key);
                report.duplicates += 1;
                continue;
            }

            // Claim before any I/O so a later row with the same key can
            // never be sent in this run, whatever happens to this one.
            claimed.insert(message.key.clone());

            if let Some(reviewer) = reviewer.as_deref_mut() {
                match reviewer.review(&message) {
                    ReviewDecision::Proceed => {}
                    ReviewDecision::Skip => {
                        info!("Skipped {} by user", message.key);
                        report.skipped_by_user += 1;
                        continue;
                    }
                    ReviewDecision::Abort => {
                        warn!("Run aborted by user at row {}", row_number + 1);
                        report.aborted = true;
                        break;
                    }
                }
            }

            self.mailer.send(&message).await?;

            // Strictly after a successful dispatch, so a failed send is
            // retried next run instead of silently lost.
            if let Err(e) = self.ledger.append(&message.key, message.cced, Utc::now()) {
                error!(
                    "Sent to {} but could not record it in {}: {}. \
                     Reconcile the log by hand before the next run.",
                    message.to,
                    self.ledger.path().display(),
                    e
                );
                return Err(e);
            }

            report.sent += 1;
            info!("Sent to {} ({})", message.to, message.key);

            self.pause_between_sends().await;
        }

        info!(
            "Run complete: {} sent, {} duplicates, {} skipped by user",
            report.sent, report.duplicates, report.skipped_by_user
        );
        Ok(report)
    }

    async fn pause_between_sends(&self) {
        let (min, max) = self.delay_secs;
        if max <= 0.0 {
            return;
        }
        let secs = rand::thread_rng().gen_range(min..=max);
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }
}
