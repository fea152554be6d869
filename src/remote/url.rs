//! Remote URL normalization across hosting providers.
//!
//! Providers hand out the same repository address in two grammars:
//! SSH shorthand (`git@host:owner/repo.git`, optionally `ssh://`-prefixed)
//! and plain HTTPS. Both carry the same (host, owner path, repo name)
//! triple; everything downstream works on the canonical HTTPS form.

use crate::error::{Result, VaultError};

/// A parsed remote address in either of its two forms.
///
/// Both variants carry the same logical triple, so conversion between them
/// is lossless. The repo name is the final `/` segment of the owner path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteUrl {
    Ssh { host: String, owner_path: String },
    Https { host: String, owner_path: String },
}

impl RemoteUrl {
    /// Parse an SSH-shorthand or HTTPS remote URL.
    ///
    /// Anything carrying neither a `git@` prefix nor an `https://` scheme,
    /// or missing the `:` separator of the SSH grammar, is malformed.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if let Some(rest) = trimmed.strip_prefix("https://") {
            let rest = strip_git_suffix(rest.trim_end_matches('/'));
            let (host, owner_path) = rest
                .split_once('/')
                .ok_or_else(|| VaultError::MalformedRemoteUrl(raw.to_string()))?;
            if host.is_empty() || owner_path.is_empty() {
                return Err(VaultError::MalformedRemoteUrl(raw.to_string()));
            }
            return Ok(Self::Https {
                host: host.to_string(),
                owner_path: owner_path.to_string(),
            });
        }

        let rest = trimmed.strip_prefix("ssh://").unwrap_or(trimmed);
        let rest = rest
            .strip_prefix("git@")
            .ok_or_else(|| VaultError::MalformedRemoteUrl(raw.to_string()))?;
        let (host, owner_path) = rest
            .split_once(':')
            .ok_or_else(|| VaultError::MalformedRemoteUrl(raw.to_string()))?;
        let owner_path = strip_git_suffix(owner_path.trim_end_matches('/'));
        if host.is_empty() || owner_path.is_empty() {
            return Err(VaultError::MalformedRemoteUrl(raw.to_string()));
        }
        Ok(Self::Ssh {
            host: host.to_string(),
            owner_path: owner_path.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        match self {
            Self::Ssh { host, .. } | Self::Https { host, .. } => host,
        }
    }

    /// `/`-separated owner path (organization, optional sub-paths, repo),
    /// with any `.git` suffix already stripped.
    pub fn owner_path(&self) -> &str {
        match self {
            Self::Ssh { owner_path, .. } | Self::Https { owner_path, .. } => owner_path,
        }
    }

    /// Browser-navigable form: `https://<host>/<ownerPath>`, no trailing
    /// slash, no `.git`.
    pub fn canonical_https_url(&self) -> String {
        format!("https://{}/{}", self.host(), self.owner_path())
    }

    /// Final segment of the owner path.
    pub fn repo_name(&self) -> &str {
        let owner_path = self.owner_path();
        owner_path.rsplit('/').next().unwrap_or(owner_path)
    }

    /// First label of the host: `github` from `github.com`, `example` from
    /// `example.test.net`. A heuristic for self-hosted instances under
    /// varied subdomains, not a public-suffix-aware parse.
    pub fn provider_name(&self) -> &str {
        let host = self.host();
        host.split('.').next().unwrap_or(host)
    }
}

fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(".git").unwrap_or(path)
}

/// Convert an SSH-style remote URL to its browser-supported HTTPS form.
/// Already-HTTPS inputs pass through unchanged modulo `.git` stripping, so
/// the function is idempotent under repeated application.
pub fn to_canonical_https_url(url: &str) -> Result<String> {
    Ok(RemoteUrl::parse(url)?.canonical_https_url())
}

/// Repository name from either URL form.
pub fn repo_name(url: &str) -> Result<String> {
    Ok(RemoteUrl::parse(url)?.repo_name().to_string())
}

/// Hosting provider name from either URL form.
pub fn provider_name(url: &str) -> Result<String> {
    Ok(RemoteUrl::parse(url)?.provider_name().to_string())
}
