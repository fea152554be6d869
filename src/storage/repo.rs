//! Repository lifecycle: discovery and creation.

use std::path::Path;

use git2::Repository;

use crate::error::{Result, VaultError};

/// Check whether `path` holds a usable repository.
///
/// Opens the repository rather than probing for a `.git` directory, so a
/// corrupted or half-deleted repository does not count as existing.
pub fn repository_exists(path: &Path) -> bool {
    Repository::open(path).is_ok()
}

/// Open-or-init: make sure a repository exists at `path`, creating
/// intermediate directories as needed.
///
/// Idempotent. Calling on an already-initialized path is a no-op; only
/// filesystem or corruption failures surface as errors.
pub fn ensure_repository(path: &Path) -> Result<()> {
    if repository_exists(path) {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "initializing repository");
    std::fs::create_dir_all(path).map_err(|err| VaultError::RepositoryInit {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Repository::init(path).map_err(|err| VaultError::RepositoryInit {
        path: path.to_path_buf(),
        reason: err.message().to_string(),
    })?;
    Ok(())
}

/// Caller-facing wrapper around [`ensure_repository`].
pub fn create_new_repository(path: &Path) -> Result<bool> {
    ensure_repository(path)?;
    Ok(true)
}
