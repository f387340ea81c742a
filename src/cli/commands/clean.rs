//! ogn clean - Remove the environment, talk directories, and notebook folder

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::conda::CondaClient;
use crate::error::Result;
use crate::utils::fs::remove_dir_if_exists;

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Name of the conda environment (default from settings)
    #[arg(long, value_name = "NAME")]
    pub env_name: Option<String>,

    /// Notebook folder to remove (default from settings)
    #[arg(long, value_name = "NAME")]
    pub folder: Option<String>,
}

pub fn run(ctx: &AppContext, args: &CleanArgs) -> Result<()> {
    let env_name = args
        .env_name
        .clone()
        .unwrap_or_else(|| ctx.settings.env_name.clone());
    let folder = args
        .folder
        .clone()
        .unwrap_or_else(|| ctx.settings.notebook_folder.clone());

    let conda = CondaClient::discover()?;
    conda.env_remove(&env_name)?;

    let talks = ctx.load_talks()?;
    for name in talks.names() {
        info!(talk = name, "removing talk directory");
        remove_dir_if_exists(ctx.root.join(name))?;
    }

    info!(folder = %folder, "removing notebook folder");
    remove_dir_if_exists(ctx.root.join(&folder))?;
    Ok(())
}
