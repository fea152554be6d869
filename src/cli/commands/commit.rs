//! appvault commit - Commit the application's current on-disk state

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::storage::{self, CommitAuthor, CommitOutcome};

#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Owning organization identifier
    #[arg(long)]
    pub org: String,

    /// Application identifier
    #[arg(long)]
    pub app: String,

    /// Commit message
    #[arg(short, long)]
    pub message: String,

    /// Author name stamped into the commit
    #[arg(long)]
    pub author_name: String,

    /// Author email stamped into the commit
    #[arg(long)]
    pub author_email: String,
}

pub fn run(ctx: &AppContext, args: &CommitArgs) -> Result<()> {
    let path = ctx.paths.resolve(&args.org, &args.app)?;
    let author = CommitAuthor::new(&args.author_name, &args.author_email);
    match storage::commit_application(&path, &args.message, &author)? {
        CommitOutcome::Committed(hash) => println!("committed {hash}"),
        CommitOutcome::NothingToCommit => println!("nothing to commit"),
    }
    Ok(())
}
