//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod check;
pub mod commit;
pub mod history;
pub mod init;
pub mod url;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Init(args) => init::run(ctx, args),
        Commands::Commit(args) => commit::run(ctx, args),
        Commands::History(args) => history::run(ctx, args),
        Commands::Url(args) => url::run(ctx, args),
        Commands::Check(args) => check::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an application's repository if it does not exist yet
    Init(init::InitArgs),

    /// Commit the application's current on-disk state
    Commit(commit::CommitArgs),

    /// Show an application's commit history
    History(history::HistoryArgs),

    /// Normalize and inspect remote repository URLs
    Url(url::UrlArgs),

    /// Check whether a remote repository is private
    Check(check::CheckArgs),
}
