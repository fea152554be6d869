//! appvault url - Normalize and inspect remote repository URLs

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::error::Result;
use crate::remote;

#[derive(Args, Debug)]
pub struct UrlArgs {
    #[command(subcommand)]
    pub command: UrlCommand,
}

#[derive(Subcommand, Debug)]
pub enum UrlCommand {
    /// Convert an SSH remote URL to its browser-supported HTTPS form
    Normalize { url: String },

    /// Extract the repository name
    Name { url: String },

    /// Extract the hosting provider name
    Provider { url: String },
}

pub fn run(_ctx: &AppContext, args: &UrlArgs) -> Result<()> {
    let output = match &args.command {
        UrlCommand::Normalize { url } => remote::to_canonical_https_url(url)?,
        UrlCommand::Name { url } => remote::repo_name(url)?,
        UrlCommand::Provider { url } => remote::provider_name(url)?,
    };
    println!("{output}");
    Ok(())
}
