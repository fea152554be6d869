//! Storage layer for appvault.
//!
//! One git repository per application, laid out as
//! `<root>/<organization_id>/<application_id>`. Repository handles are
//! opened per operation and released on every exit path.

pub mod commit;
pub mod history;
pub mod paths;
pub mod repo;

pub use commit::{CommitAuthor, CommitOutcome, commit_application};
pub use history::{CommitRecord, commit_history};
pub use paths::RepoPaths;
pub use repo::{create_new_repository, ensure_repository, repository_exists};
