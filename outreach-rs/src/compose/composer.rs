//! Joining a contact row, template, and cc policy into a ready message

use crate::compose::types::{dedupe_key, recipient_address, ComposedMessage};
use crate::contacts::{is_truthy, ContactRow};
use crate::error::Result;
use crate::subject::build_subject;
use crate::templates::{self, TemplateSource};

/// Compose a message from a row and already-loaded template text.
///
/// The row's `cced` column, when present, overrides `default_cc`; a truthy
/// value means the configured cc address is added.
pub fn compose(
    row: &ContactRow,
    template_text: &str,
    template_name: &str,
    cc_address: &str,
    default_cc: bool,
) -> Result<ComposedMessage> {
    // The cced column wins whenever it exists, even blank; otherwise the
    // run-wide default applies.
    let cced = match row.get("cced") {
        Some(value) => is_truthy(value),
        None => default_cc,
    };

    let body = templates::render(template_text, template_name, row)?;
    let subject = build_subject(row);

    Ok(ComposedMessage {
        key: dedupe_key(row),
        to: recipient_address(row),
        cc: if cced {
            Some(cc_address.to_string())
        } else {
            None
        },
        subject,
        body,
        cced,
    })
}

/// Row-to-message composer bound to a template source and cc policy.
pub struct Composer {
    source: TemplateSource,
    cc_address: String,
    default_cc: bool,
}

impl Composer {
    pub fn new(source: TemplateSource, cc_address: String, default_cc: bool) -> Self {
        Self {
            source,
            cc_address,
            default_cc,
        }
    }

    /// Resolve the row's template and compose the message.
    pub fn compose_row(&self, row: &ContactRow) -> Result<ComposedMessage> {
        let (text, name) = self.source.load_for_row(row)?;
        compose(row, &text, &name, &self.cc_address, self.default_cc)
    }
}
