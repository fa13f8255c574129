//! Loading `.eml` files by name

use crate::error::{ExtractionError, Result};
use crate::types::RawEmail;
use std::path::PathBuf;
use tracing::{debug, error};

/// A directory of `.eml` files addressed by bare file name
#[derive(Debug, Clone)]
pub struct EmailDirectory {
    root: PathBuf,
}

impl EmailDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read the email called `name`.
    ///
    /// `name` must end in `.eml` and must not contain path separators.
    pub fn load(&self, name: &str) -> Result<RawEmail> {
        validate_file_name(name)?;

        let path = self.root.join(name);
        debug!(path = %path.display(), "Reading email file");

        std::fs::read(&path).map(RawEmail::new).map_err(|source| {
            error!(path = %path.display(), error = %source, "Error reading file");
            ExtractionError::FileUnreadable {
                name: name.to_string(),
                source,
            }
        })
    }
}

#[allow(clippy::case_sensitive_file_extension_comparisons)]
fn validate_file_name(name: &str) -> Result<()> {
    if !name.ends_with(".eml") {
        return Err(ExtractionError::InvalidFileName(format!(
            "{name}: file must have .eml extension"
        )));
    }
    if name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(ExtractionError::InvalidFileName(format!(
            "{name}: must be a plain file name"
        )));
    }
    Ok(())
}
