//! Error taxonomy for appvault.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VaultError>;

/// All failures surfaced by appvault operations.
///
/// `NothingToCommit` is deliberately NOT here: a save with no changes is a
/// normal outcome (`CommitOutcome::NothingToCommit`), not a failure.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Organization or application identifier is empty or unsafe for path use.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Repository creation failed (permissions, corruption).
    #[error("repository init failed at {}: {reason}", path.display())]
    RepositoryInit { path: PathBuf, reason: String },

    /// No repository exists at the resolved location.
    #[error("repository not found at {}", .0.display())]
    RepositoryNotFound(PathBuf),

    /// Staging the working tree failed.
    #[error("staging failed: {0}")]
    Staging(String),

    /// Writing the commit failed.
    #[error("commit failed: {0}")]
    Commit(String),

    /// Walking or projecting the commit log failed.
    #[error("history read failed: {0}")]
    HistoryRead(String),

    /// Remote URL matches neither the SSH shorthand nor an HTTPS URL.
    #[error("malformed remote url: {0}")]
    MalformedRemoteUrl(String),

    /// Provider visibility API unreachable or answered with an
    /// unrecognized response.
    #[error("provider query failed: {0}")]
    ProviderQuery(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
