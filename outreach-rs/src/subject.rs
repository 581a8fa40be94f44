//! Subject line construction
//!
//! Subjects are derived from the row's `template` field via a closed rule
//! table. New campaigns add a variant here rather than a dynamic lookup, so
//! every subject format stays reviewable.

use crate::contacts::ContactRow;

/// Subject rule for a known campaign template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectRule {
    Bulls,
    Uchicago,
    Edwin,
}

impl SubjectRule {
    /// Look up the rule for a template identifier.
    pub fn for_template(name: &str) -> Option<Self> {
        match name {
            "bulls" => Some(SubjectRule::Bulls),
            "uchicago" => Some(SubjectRule::Uchicago),
            "edwin" => Some(SubjectRule::Edwin),
            _ => None,
        }
    }

    fn format(&self, row: &ContactRow) -> String {
        let first_name = row.get_or_empty("first_name");
        match self {
            SubjectRule::Bulls => {
                let company = non_blank(row.get_or_empty("company"), "your firm");
                format!(
                    "Chicago Bulls Data Analyst and UChicago Student interested in your work at {} - {}",
                    company, first_name
                )
            }
            SubjectRule::Uchicago => {
                let role = non_blank(row.get_or_empty("role"), "opportunities");
                let company = non_blank(row.get_or_empty("company"), "your company");
                format!(
                    "UChicago Student interested in {} at {} - {}",
                    role, company, first_name
                )
            }
            SubjectRule::Edwin => {
                let company = non_blank(row.get_or_empty("company"), "your company");
                format!(
                    "UChicago and Rice Twins Curious About Your Path at {} - {}",
                    company, first_name
                )
            }
        }
    }
}

fn non_blank<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Build the subject for a row.
///
/// The row's `template` field selects the rule; an unknown or missing
/// identifier falls back to a generic subject built from `company`.
pub fn build_subject(row: &ContactRow) -> String {
    let subject = match row.template_name().and_then(SubjectRule::for_template) {
        Some(rule) => rule.format(row),
        None => {
            let company = non_blank(row.get_or_empty("company"), "your company");
            format!("UChicago Student Interested in {}", company)
        }
    };

    sanitize_subject(&subject)
}

/// Normalize a subject to a single clean line.
///
/// Em/en dashes become plain hyphens and all internal whitespace (including
/// newlines) collapses to single spaces.
pub fn sanitize_subject(subject: &str) -> String {
    subject
        .replace('\u{2014}', "-")
        .replace('\u{2013}', "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
