//! appvault init - Create an application's repository if absent

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::storage;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Owning organization identifier
    #[arg(long)]
    pub org: String,

    /// Application identifier
    #[arg(long)]
    pub app: String,
}

pub fn run(ctx: &AppContext, args: &InitArgs) -> Result<()> {
    let path = ctx.paths.resolve(&args.org, &args.app)?;
    storage::create_new_repository(&path)?;
    println!("{}", path.display());
    Ok(())
}
