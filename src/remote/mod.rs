//! Remote repository concerns: URL normalization and provider visibility.

pub mod url;
pub mod visibility;

pub use url::{RemoteUrl, provider_name, repo_name, to_canonical_https_url};
pub use visibility::VisibilityClient;
