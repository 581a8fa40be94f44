//! Composed message type and address/key derivation

use crate::contacts::ContactRow;

/// A fully resolved message, ready for transport.
///
/// Created per row, consumed immediately by send-or-preview, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    /// Dedupe key identifying the (person, employer) pair.
    pub key: String,
    /// Recipient address, `first.last@domain`.
    pub to: String,
    /// CC address, when the cc flag resolved true.
    pub cc: Option<String>,
    pub subject: String,
    pub body: String,
    pub cced: bool,
}

/// Dedupe key for a row: `first_name::last_name::company_domain`,
/// lower-cased.
///
/// Independent of template and cc, so two rows that would produce the same
/// recipient address always produce the same key.
pub fn dedupe_key(row: &ContactRow) -> String {
    format!(
        "{}::{}::{}",
        row.get_or_empty("first_name").to_lowercase(),
        row.get_or_empty("last_name").to_lowercase(),
        row.get_or_empty("company_domain").to_lowercase()
    )
}

/// Recipient address for a row: `first_name.last_name@company_domain`,
/// lower-cased.
///
/// No validation beyond this construction; malformed source data produces a
/// malformed address that surfaces at send time.
pub fn recipient_address(row: &ContactRow) -> String {
    format!(
        "{}.{}@{}",
        row.get_or_empty("first_name").to_lowercase(),
        row.get_or_empty("last_name").to_lowercase(),
        row.get_or_empty("company_domain").to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> ContactRow {
        ContactRow::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_dedupe_key_case_folds() {
        let a = row(&[
            ("first_name", "Jo"),
            ("last_name", "Lee"),
            ("company_domain", "Acme.COM"),
        ]);
        let b = row(&[
            ("first_name", "JO"),
            ("last_name", "lee"),
            ("company_domain", "acme.com"),
        ]);
        assert_eq!(dedupe_key(&a), dedupe_key(&b));
        assert_eq!(dedupe_key(&a), "jo::lee::acme.com");
    }

    #[test]
    fn test_recipient_address_construction() {
        let r = row(&[
            ("first_name", "Jo"),
            ("last_name", "Lee"),
            ("company_domain", "Acme.com"),
        ]);
        assert_eq!(recipient_address(&r), "jo.lee@acme.com");
    }
}
