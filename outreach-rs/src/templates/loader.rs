//! Template resolution and loading

use crate::contacts::ContactRow;
use crate::error::{OutreachError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where template text comes from for a run.
///
/// An explicit path always wins and is used for every row; a directory
/// resolves each row's `template` field to `<dir>/<name>.tpl.txt`.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// One template file for the whole run.
    Path(PathBuf),
    /// Per-row lookup by name inside a template directory.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Resolve and read the template for a row.
    ///
    /// Returns the template text together with the identifier used in
    /// diagnostics (the file name for explicit paths, the row's template
    /// name for directory lookup).
    pub fn load_for_row(&self, row: &ContactRow) -> Result<(String, String)> {
        match self {
            TemplateSource::Path(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Ok((read_template(path)?, name))
            }
            TemplateSource::Directory(dir) => {
                let name = row.template_name().ok_or_else(|| {
                    OutreachError::TemplateNotFound(
                        "row has no 'template' field to select a template by name".to_string(),
                    )
                })?;
                let path = dir.join(format!("{}.tpl.txt", name));
                debug!("Resolved template '{}' to {}", name, path.display());
                Ok((read_template(&path)?, name.to_string()))
            }
        }
    }
}

fn read_template(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(OutreachError::TemplateNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
