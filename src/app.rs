use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, VaultError};
use crate::storage::RepoPaths;

pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub paths: RepoPaths,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let root = resolve_root(cli.root.as_deref(), &config)?;

        Ok(Self {
            paths: RepoPaths::new(&root),
            root,
            config,
            verbosity: cli.verbose,
        })
    }
}

/// Storage root precedence: `--root` flag, then config (which already
/// absorbed `APPVAULT_ROOT`), then the platform data dir.
fn resolve_root(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(root) = &config.storage.root {
        return Ok(root.clone());
    }
    let data_dir = dirs::data_dir()
        .ok_or_else(|| VaultError::Config("data directory not found".to_string()))?;
    Ok(data_dir.join("appvault/repos"))
}
