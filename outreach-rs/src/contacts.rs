//! Contact list loading
//!
//! Contacts are rows of a CSV file with at least: first_name, last_name,
//! company, company_domain, role, template, cced. Any extra column is kept
//! and may be referenced by templates.

use crate::error::{OutreachError, Result};
use std::collections::HashMap;
use std::path::Path;

/// One row of the contacts file. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    fields: HashMap<String, String>,
}

impl ContactRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Look up a field, trimmed. Returns `None` if the column is absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|v| v.trim())
    }

    /// Look up a field, trimmed, or empty string if absent.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Whether the column exists at all (even if blank).
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The `template` field naming the per-row template, if non-blank.
    pub fn template_name(&self) -> Option<&str> {
        self.get("template").filter(|t| !t.is_empty())
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

/// True for "y", "yes", "true", "1" (case-insensitive, trimmed).
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

/// Load all contact rows from a CSV file, in file order.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<Vec<ContactRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(OutreachError::ContactsNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(ContactRow::new(fields));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn row(pairs: &[(&str, &str)]) -> ContactRow {
        ContactRow::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_truthy_values() {
        for v in ["y", "yes", "true", "1", "YES", " Y ", "True"] {
            assert!(is_truthy(v), "{v:?} should be truthy");
        }
        for v in ["", "n", "no", "false", "0", "maybe"] {
            assert!(!is_truthy(v), "{v:?} should be falsy");
        }
    }

    #[test]
    fn test_get_trims_whitespace() {
        let r = row(&[("company", "  Acme  ")]);
        assert_eq!(r.get("company"), Some("Acme"));
        assert_eq!(r.get_or_empty("missing"), "");
    }

    #[test]
    fn test_template_name_blank_is_none() {
        let r = row(&[("template", "   ")]);
        assert_eq!(r.template_name(), None);

        let r = row(&[("template", "bulls")]);
        assert_eq!(r.template_name(), Some("bulls"));
    }

    #[test]
    fn test_load_contacts_preserves_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "first_name,last_name,company_domain").unwrap();
        writeln!(file, "Jo,Lee,acme.com").unwrap();
        writeln!(file, "Amy,Chen,globex.io").unwrap();
        file.flush().unwrap();

        let rows = load_contacts(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("first_name"), Some("Jo"));
        assert_eq!(rows[1].get("company_domain"), Some("globex.io"));
    }

    #[test]
    fn test_load_contacts_missing_file() {
        let err = load_contacts("does/not/exist.csv").unwrap_err();
        assert!(matches!(
            err,
            crate::error::OutreachError::ContactsNotFound(_)
        ));
    }
}
