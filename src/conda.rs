//! Conda CLI client.
//!
//! Wraps the `conda` binary for environment management and for running
//! tools inside an environment. Always uses `conda run -n <env>` argument
//! vectors instead of shell `activate` chains.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{OgnError, Result};

/// Client for interacting with the conda package manager.
pub struct CondaClient {
    /// Path to conda binary (default: discovered on PATH).
    conda_bin: PathBuf,
}

impl CondaClient {
    /// Create a client, honoring `OGN_CONDA_BIN` before PATH lookup.
    pub fn discover() -> Result<Self> {
        if let Ok(bin) = std::env::var("OGN_CONDA_BIN") {
            return Ok(Self::with_binary(bin));
        }
        let conda_bin = which::which("conda")
            .map_err(|err| OgnError::CondaUnavailable(format!("conda not found on PATH: {err}")))?;
        Ok(Self::with_binary(conda_bin))
    }

    /// Create a client with a custom binary path.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            conda_bin: binary.into(),
        }
    }

    /// Check if conda is available and responsive.
    pub fn is_available(&self) -> bool {
        Command::new(&self.conda_bin)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Create an environment from a definition file.
    pub fn env_create(&self, env: &str, file: &Path) -> Result<()> {
        info!(env, file = %file.display(), "creating environment");
        self.run_conda(&[
            "env",
            "create",
            "-f",
            &file.to_string_lossy(),
            "-n",
            env,
        ])
    }

    /// Remove an environment and everything in it.
    pub fn env_remove(&self, env: &str) -> Result<()> {
        info!(env, "removing environment");
        self.run_conda(&["remove", "-n", env, "--all", "--yes"])
    }

    /// Install packages into an environment from a channel.
    pub fn install(&self, env: &str, channel: &str, packages: &[&str]) -> Result<()> {
        info!(env, channel, ?packages, "installing packages");
        let mut args = vec!["install", "-n", env, "-c", channel, "--yes"];
        args.extend_from_slice(packages);
        self.run_conda(&args)
    }

    /// Run a program inside an environment via `conda run`.
    pub fn run_in(&self, env: &str, program: &str, args: &[&str]) -> Result<()> {
        debug!(env, program, ?args, "conda run");
        let mut full = vec!["run", "-n", env, "--no-capture-output", program];
        full.extend_from_slice(args);
        self.run_conda(&full)
    }

    fn run_conda(&self, args: &[&str]) -> Result<()> {
        if !self.is_available() {
            return Err(OgnError::CondaUnavailable(
                "conda binary not found or not executable".into(),
            ));
        }

        let output = Command::new(&self.conda_bin).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(OgnError::CommandFailed {
                program: format!("conda {}", args.first().copied().unwrap_or_default()),
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }
        Ok(())
    }
}
