//! Commit history retrieval.

use git2::Repository;
use serde::Serialize;

use crate::error::{Result, VaultError};
use crate::storage::paths::RepoPaths;
use crate::storage::repo;
use crate::utils::format::iso8601_utc;

/// One entry of an application's version history, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub message: String,
    /// ISO-8601 UTC instant, e.g. `2023-05-01T12:00:00Z`.
    pub committed_at: String,
}

/// Read the full commit history for an application, newest first.
///
/// The repository must already exist at the resolved location. `branch`
/// selects a single named branch; `None` walks from HEAD. The result is
/// fully materialized, bounded by the number of commits in the repository.
pub fn commit_history(
    paths: &RepoPaths,
    organization_id: &str,
    application_id: &str,
    branch: Option<&str>,
) -> Result<Vec<CommitRecord>> {
    let path = paths.resolve(organization_id, application_id)?;
    if !repo::repository_exists(&path) {
        return Err(VaultError::RepositoryNotFound(path));
    }
    tracing::debug!(path = %path.display(), "reading commit history");

    // Read-only scoped open; the handle releases on drop.
    let repository = Repository::open(&path)
        .map_err(|err| VaultError::HistoryRead(err.message().to_string()))?;

    let mut walk = repository
        .revwalk()
        .map_err(|err| VaultError::HistoryRead(err.message().to_string()))?;
    match branch {
        Some(name) => walk
            .push_ref(&format!("refs/heads/{name}"))
            .map_err(|err| VaultError::HistoryRead(err.message().to_string()))?,
        None => walk
            .push_head()
            .map_err(|err| VaultError::HistoryRead(err.message().to_string()))?,
    }

    let mut records = Vec::new();
    for oid in walk {
        let oid = oid.map_err(|err| VaultError::HistoryRead(err.message().to_string()))?;
        let commit = repository
            .find_commit(oid)
            .map_err(|err| VaultError::HistoryRead(err.message().to_string()))?;
        let author = commit.author();
        records.push(CommitRecord {
            hash: oid.to_string(),
            author_name: author.name().unwrap_or_default().to_string(),
            author_email: author.email().unwrap_or_default().to_string(),
            message: commit.message().unwrap_or_default().to_string(),
            committed_at: iso8601_utc(commit.time().seconds()),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::storage::commit::{CommitAuthor, commit_application};

    #[test]
    fn test_missing_repository_is_not_found() {
        let dir = tempdir().unwrap();
        let paths = RepoPaths::new(dir.path());
        let err = commit_history(&paths, "org", "app", None).unwrap_err();
        assert!(matches!(err, VaultError::RepositoryNotFound(_)));
    }

    #[test]
    fn test_history_newest_first() {
        let dir = tempdir().unwrap();
        let paths = RepoPaths::new(dir.path());
        let path = paths.resolve("org", "app").unwrap();
        std::fs::create_dir_all(&path).unwrap();
        let author = CommitAuthor::new("Dev", "dev@example.com");

        std::fs::write(path.join("app.json"), "{\"v\":1}").unwrap();
        commit_application(&path, "first", &author).unwrap();
        std::fs::write(path.join("app.json"), "{\"v\":2}").unwrap();
        commit_application(&path, "second", &author).unwrap();

        let records = commit_history(&paths, "org", "app", None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "second");
        assert_eq!(records[1].message, "first");
    }

    #[test]
    fn test_record_fields_projected() {
        let dir = tempdir().unwrap();
        let paths = RepoPaths::new(dir.path());
        let path = paths.resolve("org", "app").unwrap();
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("app.json"), "{}").unwrap();
        commit_application(&path, "save", &CommitAuthor::new("Jane", "jane@corp.test")).unwrap();

        let records = commit_history(&paths, "org", "app", None).unwrap();
        let record = &records[0];
        assert_eq!(record.hash.len(), 40);
        assert_eq!(record.author_name, "Jane");
        assert_eq!(record.author_email, "jane@corp.test");
        assert_eq!(record.message, "save");
        assert!(record.committed_at.ends_with('Z'));
        assert!(record.committed_at.contains('T'));
    }
}
