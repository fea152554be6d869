//! appvault history - Show an application's commit history

use clap::Args;

use crate::app::AppContext;
use crate::error::{Result, VaultError};
use crate::storage;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Owning organization identifier
    #[arg(long)]
    pub org: String,

    /// Application identifier
    #[arg(long)]
    pub app: String,

    /// Read a specific branch instead of HEAD
    #[arg(long)]
    pub branch: Option<String>,

    /// Emit JSON instead of human-readable lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &AppContext, args: &HistoryArgs) -> Result<()> {
    let records =
        storage::commit_history(&ctx.paths, &args.org, &args.app, args.branch.as_deref())?;

    if args.json {
        let payload = serde_json::to_string_pretty(&records)
            .map_err(|err| VaultError::Config(format!("serialize output: {err}")))?;
        println!("{payload}");
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  {}  {} <{}>  {}",
            &record.hash[..7.min(record.hash.len())],
            record.committed_at,
            record.author_name,
            record.author_email,
            record.message.lines().next().unwrap_or_default()
        );
    }
    Ok(())
}
