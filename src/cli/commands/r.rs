//! ogn r - Install the R kernel and associated libs

use clap::Args;

use crate::app::AppContext;
use crate::conda::CondaClient;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct RArgs {
    /// Name of the environment to install into (default from settings)
    #[arg(long, value_name = "NAME")]
    pub env_name: Option<String>,
}

pub fn run(ctx: &AppContext, args: &RArgs) -> Result<()> {
    let env_name = args
        .env_name
        .clone()
        .unwrap_or_else(|| ctx.settings.env_name.clone());
    let conda = CondaClient::discover()?;
    conda.install(&env_name, "conda-forge", &["r-irkernel", "r-ggplot2"])
}
