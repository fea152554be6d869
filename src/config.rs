use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Where application repositories live on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Base directory for all repositories. Defaults to the platform data
    /// dir when unset.
    pub root: Option<PathBuf>,
}

/// Visibility lookup behavior per hosting provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Visibility assumed for providers without a recognized API.
    pub default_private: bool,
    pub timeout_secs: u64,
    pub github_api: String,
    pub gitlab_api: String,
    pub bitbucket_api: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            default_private: true,
            timeout_secs: 10,
            github_api: "https://api.github.com".to_string(),
            gitlab_api: "https://gitlab.com/api/v4".to_string(),
            bitbucket_api: "https://api.bitbucket.org/2.0".to_string(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("APPVAULT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("appvault/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| VaultError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| VaultError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(storage) = patch.storage {
            if storage.root.is_some() {
                self.storage.root = storage.root;
            }
        }
        if let Some(providers) = patch.providers {
            if let Some(value) = providers.default_private {
                self.providers.default_private = value;
            }
            if let Some(value) = providers.timeout_secs {
                self.providers.timeout_secs = value;
            }
            if let Some(value) = providers.github_api {
                self.providers.github_api = value;
            }
            if let Some(value) = providers.gitlab_api {
                self.providers.gitlab_api = value;
            }
            if let Some(value) = providers.bitbucket_api {
                self.providers.bitbucket_api = value;
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("APPVAULT_ROOT") {
            self.storage.root = Some(PathBuf::from(root));
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigPatch {
    storage: Option<StoragePatch>,
    providers: Option<ProvidersPatch>,
}

#[derive(Debug, Clone, Deserialize)]
struct StoragePatch {
    root: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProvidersPatch {
    default_private: Option<bool>,
    timeout_secs: Option<u64>,
    github_api: Option<String>,
    gitlab_api: Option<String>,
    bitbucket_api: Option<String>,
}
