use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub sender: SenderConfig,
    pub smtp: SmtpConfig,
    pub paths: PathsConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SenderConfig {
    /// Display name used in the From header.
    pub name: String,
    /// Address used in the From header and for SMTP login.
    pub email: String,
    /// Address CC'd when a row (or the run default) asks for it.
    pub cc_address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    pub contacts_csv: String,
    pub sent_log: String,
    pub template_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// CC the configured address on every email unless the row overrides it.
    pub cc_myself: bool,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::OutreachError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::OutreachError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            sender: SenderConfig {
                name: "Outreach".to_string(),
                email: "me@example.com".to_string(),
                cc_address: "el52@rice.edu".to_string(),
            },
            smtp: SmtpConfig {
                host: "smtp.gmail.com".to_string(),
                port: 465,
                username: String::new(),
                password: String::new(),
            },
            paths: PathsConfig {
                contacts_csv: "contacts.csv".to_string(),
                sent_log: "sent_log.csv".to_string(),
                template_dir: "templates".to_string(),
            },
            defaults: DefaultsConfig { cc_myself: false },
        }
    }
}
