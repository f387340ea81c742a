//! ogn environment - Create the conda environment

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::commands::build;
use crate::conda::CondaClient;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct EnvironmentArgs {
    /// Delete the environment prior to reinstallation
    #[arg(long)]
    pub clean: bool,

    /// Name of the environment to install (default from settings)
    #[arg(long, value_name = "NAME")]
    pub env_name: Option<String>,
}

pub fn run(ctx: &AppContext, args: &EnvironmentArgs) -> Result<()> {
    let env_name = args
        .env_name
        .clone()
        .unwrap_or_else(|| ctx.settings.env_name.clone());
    let conda = CondaClient::discover()?;

    if args.clean {
        info!(env = %env_name, "deleting environment");
        conda.env_remove(&env_name)?;
    }

    info!(env = %env_name, "creating environment");
    conda.env_create(&env_name, &ctx.root.join(&ctx.settings.environment_file))?;

    build::execute(ctx, &conda, &env_name, true)
}
