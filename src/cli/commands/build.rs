//! ogn build - Install lab extensions and rebuild JupyterLab

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::conda::CondaClient;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Name of the environment to build (default from settings)
    #[arg(long, value_name = "NAME")]
    pub env_name: Option<String>,

    /// Skip installing the IPython kernel
    #[arg(long)]
    pub no_kernel: bool,
}

pub fn run(ctx: &AppContext, args: &BuildArgs) -> Result<()> {
    let env_name = args
        .env_name
        .clone()
        .unwrap_or_else(|| ctx.settings.env_name.clone());
    let conda = CondaClient::discover()?;
    execute(ctx, &conda, &env_name, !args.no_kernel)
}

/// Build an environment with the appropriate extensions.
///
/// Also run by `environment` after creating the environment.
pub fn execute(ctx: &AppContext, conda: &CondaClient, env_name: &str, kernel: bool) -> Result<()> {
    for extension in &ctx.settings.labextensions {
        info!(extension = %extension, "installing lab extension");
        conda.run_in(
            env_name,
            "jupyter",
            &["labextension", "install", extension.as_str(), "--no-build"],
        )?;
    }

    info!(env = env_name, "rebuilding JupyterLab");
    conda.run_in(env_name, "jupyter", &["lab", "clean"])?;
    conda.run_in(
        env_name,
        "jupyter",
        &["lab", "build", "--dev-build=False", "--minimize=False"],
    )?;

    if kernel {
        info!(env = env_name, "installing kernel");
        conda.run_in(
            env_name,
            "ipython",
            &[
                "kernel",
                "install",
                "--name",
                env_name,
                "--display-name",
                env_name,
                "--sys-prefix",
            ],
        )?;
    }
    Ok(())
}
