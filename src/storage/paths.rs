//! Repository path derivation.

use std::path::{Path, PathBuf};

use crate::error::{Result, VaultError};

/// Derives the on-disk repository location for an application.
///
/// The location is a pure function of the owning organization and the
/// application: `<root>/<organization_id>/<application_id>`. Computed on
/// demand, never cached.
#[derive(Debug, Clone)]
pub struct RepoPaths {
    root: PathBuf,
}

impl RepoPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Base directory under which all application repositories live.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the repository location for one application. No I/O.
    pub fn resolve(&self, organization_id: &str, application_id: &str) -> Result<PathBuf> {
        let org = validate_identifier(organization_id)?;
        let app = validate_identifier(application_id)?;
        Ok(self.root.join(org).join(app))
    }
}

/// Identifiers become single path components; reject anything that could
/// escape the storage root or collapse to nothing.
fn validate_identifier(id: &str) -> Result<&str> {
    if id.is_empty() {
        return Err(VaultError::InvalidIdentifier("empty identifier".to_string()));
    }
    if id == "." || id == ".." || id.contains('/') || id.contains('\\') || id.contains('\0') {
        return Err(VaultError::InvalidIdentifier(id.to_string()));
    }
    Ok(id)
}
