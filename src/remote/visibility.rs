//! Repository visibility lookup against provider APIs.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ProvidersConfig;
use crate::error::{Result, VaultError};
use crate::remote::url::RemoteUrl;

/// Queries a hosting provider's public API for repository visibility.
///
/// One outbound request per call, bounded by the configured timeout. The
/// client never touches the filesystem and holds no repository handle, so
/// concurrent visibility checks and repository operations never contend.
pub struct VisibilityClient {
    http: reqwest::Client,
    config: ProvidersConfig,
}

impl VisibilityClient {
    pub fn new(config: ProvidersConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!("appvault/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| VaultError::Config(format!("visibility http client: {err}")))?;
        Ok(Self { http, config })
    }

    /// Whether the repository behind `url` is private.
    ///
    /// Accepts either URL form; the canonical HTTPS form is derived first.
    /// A 404/403 from a recognized provider means the repository is not
    /// anonymously visible and counts as private. Unrecognized providers
    /// fall back to the configured default. No internal retries; transport
    /// failures surface as `ProviderQuery`.
    pub async fn is_repo_private(&self, url: &str) -> Result<bool> {
        let remote = RemoteUrl::parse(url)?;
        match remote.provider_name() {
            "github" => self.github_private(remote.owner_path()).await,
            "gitlab" => self.gitlab_private(remote.owner_path()).await,
            "bitbucket" => self.bitbucket_private(remote.owner_path()).await,
            other => {
                tracing::warn!(
                    provider = other,
                    default = self.config.default_private,
                    "unrecognized provider, using default visibility"
                );
                Ok(self.config.default_private)
            }
        }
    }

    async fn github_private(&self, owner_path: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct Repo {
            private: bool,
        }

        let endpoint = format!("{}/repos/{owner_path}", self.config.github_api);
        let response = self.get(&endpoint).await?;
        match response.status() {
            status if status.is_success() => {
                let repo: Repo = Self::decode(response, "github").await?;
                Ok(repo.private)
            }
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => Ok(true),
            status => Err(VaultError::ProviderQuery(format!("github answered {status}"))),
        }
    }

    async fn gitlab_private(&self, owner_path: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct Project {
            visibility: String,
        }

        // GitLab addresses projects by URL-encoded full path.
        let endpoint = format!(
            "{}/projects/{}",
            self.config.gitlab_api,
            urlencoding::encode(owner_path)
        );
        let response = self.get(&endpoint).await?;
        match response.status() {
            status if status.is_success() => {
                let project: Project = Self::decode(response, "gitlab").await?;
                Ok(project.visibility != "public")
            }
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => Ok(true),
            status => Err(VaultError::ProviderQuery(format!("gitlab answered {status}"))),
        }
    }

    async fn bitbucket_private(&self, owner_path: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct Repo {
            is_private: bool,
        }

        let endpoint = format!("{}/repositories/{owner_path}", self.config.bitbucket_api);
        let response = self.get(&endpoint).await?;
        match response.status() {
            status if status.is_success() => {
                let repo: Repo = Self::decode(response, "bitbucket").await?;
                Ok(repo.is_private)
            }
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => Ok(true),
            status => Err(VaultError::ProviderQuery(format!(
                "bitbucket answered {status}"
            ))),
        }
    }

    async fn get(&self, endpoint: &str) -> Result<reqwest::Response> {
        self.http
            .get(endpoint)
            .send()
            .await
            .map_err(|err| VaultError::ProviderQuery(format!("request {endpoint}: {err}")))
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        provider: &str,
    ) -> Result<T> {
        response
            .json()
            .await
            .map_err(|err| VaultError::ProviderQuery(format!("{provider} response parse: {err}")))
    }
}
