//! Tool settings with environment-variable overrides.
//!
//! The only on-disk configuration is `talks.yml` (see [`crate::talks`]);
//! everything else is defaults plus `OGN_*` overrides.

use serde::{Deserialize, Serialize};

use crate::error::{OgnError, Result};

/// JupyterLab extensions installed by the build step, in install order.
pub const DEFAULT_LABEXTENSIONS: &[&str] = &[
    "@jupyter-widgets/jupyterlab-manager",
    "@jupyter-voila/jupyterlab-preview",
    "jupyter-leaflet",
];

/// Companion repositories cloned into the notebook folder.
pub const DEFAULT_REPOS: &[&str] = &[
    "Piphi5/MHM-Groups-Dashboard",
    "IGES-Geospatial/Mosquito-Habitat-Scripts",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the conda environment.
    #[serde(default)]
    pub env_name: String,
    /// Folder the notebook collection is cloned into.
    #[serde(default)]
    pub notebook_folder: String,
    /// Talk table file name, resolved against the project root.
    #[serde(default)]
    pub talks_file: String,
    /// Conda environment definition file.
    #[serde(default)]
    pub environment_file: String,
    /// Repositories of the notebook collection, `owner/name` or full URL.
    #[serde(default)]
    pub repos: Vec<String>,
    /// JupyterLab extensions installed by `build`.
    #[serde(default)]
    pub labextensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_name: "observer_geospatial".to_string(),
            notebook_folder: "observer-geospatial-notebooks".to_string(),
            talks_file: "talks.yml".to_string(),
            environment_file: "binder/environment.yml".to_string(),
            repos: DEFAULT_REPOS.iter().map(ToString::to_string).collect(),
            labextensions: DEFAULT_LABEXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Settings {
    /// Defaults with `OGN_*` environment overrides applied.
    pub fn load() -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_env_overrides()?;
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("OGN_ENV_NAME") {
            self.env_name = value;
        }
        if let Some(value) = env_string("OGN_NOTEBOOK_FOLDER") {
            self.notebook_folder = value;
        }
        if let Some(value) = env_string("OGN_TALKS_FILE") {
            self.talks_file = value;
        }
        if let Some(value) = env_string("OGN_ENVIRONMENT_FILE") {
            self.environment_file = value;
        }
        if let Some(values) = env_list("OGN_REPOS")? {
            self.repos = values;
        }
        if let Some(values) = env_list("OGN_LABEXTENSIONS")? {
            self.labextensions = values;
        }
        Ok(())
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_list(key: &str) -> Result<Option<Vec<String>>> {
    match std::env::var(key) {
        Ok(value) => {
            let list = value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            if list.is_empty() {
                return Err(OgnError::Config(format!("{key} is set but empty")));
            }
            Ok(Some(list))
        }
        Err(_) => Ok(None),
    }
}
