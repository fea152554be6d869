//! Commit creation with empty-change suppression.

use std::path::Path;

use git2::{IndexAddOption, Repository, Signature};

use crate::error::{Result, VaultError};
use crate::storage::repo;

/// Authorship stamped into a commit. Supplied per call, never persisted
/// elsewhere.
#[derive(Debug, Clone)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

impl CommitAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Result of a save attempt. A no-change save is a normal outcome, not an
/// error; callers must be able to tell it apart from a failed commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was written; carries its hash.
    Committed(String),
    /// Working tree matched the parent commit; nothing was written.
    NothingToCommit,
}

/// Stage the entire working tree at `path` and commit it with the given
/// message and authorship.
///
/// Creates the repository first if none exists, so this is safe as the very
/// first save of a new application. If staging produces a tree identical to
/// the parent commit's, no commit is created and `NothingToCommit` is
/// returned. Concurrent commits to the same path serialize on libgit2's
/// index lock; contention surfaces as an error, never retried here.
pub fn commit_application(
    path: &Path,
    message: &str,
    author: &CommitAuthor,
) -> Result<CommitOutcome> {
    tracing::debug!(path = %path.display(), "committing application state");
    if !repo::repository_exists(path) {
        repo::ensure_repository(path)?;
    }

    // Repository and index handles release on drop, on every exit path.
    let repository =
        Repository::open(path).map_err(|err| VaultError::RepositoryInit {
            path: path.to_path_buf(),
            reason: err.message().to_string(),
        })?;

    let tree_id = stage_all(&repository)?;
    let tree = repository
        .find_tree(tree_id)
        .map_err(|err| VaultError::Commit(err.message().to_string()))?;

    // Unborn HEAD (first ever commit) has no parent.
    let parent = repository.head().ok().and_then(|h| h.peel_to_commit().ok());

    if let Some(parent) = &parent {
        if parent.tree_id() == tree_id {
            tracing::debug!(path = %path.display(), "no staged changes, skipping commit");
            return Ok(CommitOutcome::NothingToCommit);
        }
    }

    let signature = Signature::now(&author.name, &author.email)
        .map_err(|err| VaultError::Commit(err.message().to_string()))?;
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repository
        .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .map_err(|err| VaultError::Commit(err.message().to_string()))?;

    Ok(CommitOutcome::Committed(oid.to_string()))
}

/// Stage everything under the working tree (equivalent of `git add .`) and
/// return the id of the resulting tree.
fn stage_all(repository: &Repository) -> Result<git2::Oid> {
    let mut index = repository
        .index()
        .map_err(|err| VaultError::Staging(err.message().to_string()))?;
    index
        .add_all(["."], IndexAddOption::DEFAULT, None)
        .map_err(|err| VaultError::Staging(err.message().to_string()))?;
    // add_all does not drop entries for deleted files; update_all does.
    index
        .update_all(["."], None)
        .map_err(|err| VaultError::Staging(err.message().to_string()))?;
    index
        .write()
        .map_err(|err| VaultError::Staging(err.message().to_string()))?;
    index
        .write_tree()
        .map_err(|err| VaultError::Staging(err.message().to_string()))
}
