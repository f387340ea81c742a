use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::notebooks::NotebookCollection;
use crate::talks::TalkTable;

/// Per-invocation context threaded into every command.
pub struct AppContext {
    /// Project root all relative paths resolve against. Never chdir'd into.
    pub root: PathBuf,
    pub settings: Settings,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let settings = Settings::load()?;

        Ok(Self {
            root,
            settings,
            verbosity: cli.verbose,
        })
    }

    /// Load the talk table from `<root>/<talks_file>`.
    pub fn load_talks(&self) -> Result<TalkTable> {
        TalkTable::load(self.root.join(&self.settings.talks_file))
    }

    /// Notebook collection rooted at the project root.
    pub fn notebook_collection(&self) -> NotebookCollection {
        NotebookCollection::new(
            &self.root,
            self.settings.notebook_folder.clone(),
            self.settings.repos.clone(),
        )
    }
}
