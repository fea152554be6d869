//! appvault check - Check whether a remote repository is private

use clap::Args;

use crate::app::AppContext;
use crate::error::{Result, VaultError};
use crate::remote::VisibilityClient;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Remote repository URL (SSH or HTTPS form)
    pub url: String,
}

pub fn run(ctx: &AppContext, args: &CheckArgs) -> Result<()> {
    let client = VisibilityClient::new(ctx.config.providers.clone())?;
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|err| VaultError::Config(format!("tokio runtime: {err}")))?;
    let private = runtime.block_on(client.is_repo_private(&args.url))?;
    println!("{}", if private { "private" } else { "public" });
    Ok(())
}
