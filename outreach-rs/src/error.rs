use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutreachError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "Missing placeholder '{field}' in contacts for template '{template}'. \
         Add column '{field}' or remove it from the template."
    )]
    MissingField { field: String, template: String },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Contacts file not found: {0}")]
    ContactsNotFound(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Sent-log write failed: {0}")]
    LedgerWrite(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OutreachError>;
