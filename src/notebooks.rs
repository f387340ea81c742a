//! Notebook collection fetcher.
//!
//! Ensures the companion notebook repositories exist as subdirectories of
//! the notebook folder, shallow-cloning any that are missing.

use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks};
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::error::{OgnError, Result};
use crate::utils::fs::{ensure_dir, remove_dir_if_exists};

/// On-demand provider of the notebook collection, consumed by the
/// bundle assembler when a talk references files inside it.
pub trait NotebookSource {
    /// Name of the folder the collection lives under.
    fn folder_name(&self) -> &str;

    /// Make the collection available locally; no-op if already present.
    fn ensure_available(&self) -> Result<()>;
}

/// Git-backed notebook collection under `<root>/<folder>`.
pub struct NotebookCollection {
    root: PathBuf,
    folder: String,
    repos: Vec<String>,
}

impl NotebookCollection {
    pub fn new(root: impl Into<PathBuf>, folder: impl Into<String>, repos: Vec<String>) -> Self {
        Self {
            root: root.into(),
            folder: folder.into(),
            repos,
        }
    }

    /// Full path of the collection folder.
    pub fn folder_path(&self) -> PathBuf {
        self.root.join(&self.folder)
    }

    /// Clone every missing repository into the collection folder.
    ///
    /// With `clean`, the folder is removed first. Each repository must exist
    /// as a directory afterwards or the fetch fails naming it.
    pub fn fetch(&self, clean: bool) -> Result<()> {
        let folder = self.folder_path();
        if clean {
            info!(folder = %folder.display(), "cleaning notebook folder");
            remove_dir_if_exists(&folder)?;
        }
        ensure_dir(&folder)?;

        info!(folder = %folder.display(), repos = self.repos.len(), "cloning repos into folder");
        for repo in &self.repos {
            let dest = folder.join(repo_dir_name(repo));
            if dest.is_dir() {
                debug!(repo = %repo, "already cloned, skipping");
            } else {
                clone_shallow(repo, &dest)?;
            }
            if !dest.is_dir() {
                return Err(OgnError::FetchFailed { repo: repo.clone() });
            }
        }
        Ok(())
    }
}

impl NotebookSource for NotebookCollection {
    fn folder_name(&self) -> &str {
        &self.folder
    }

    fn ensure_available(&self) -> Result<()> {
        if self.folder_path().exists() {
            return Ok(());
        }
        self.fetch(false)
    }
}

/// Directory name a repository clones into: last path segment, `.git` stripped.
fn repo_dir_name(repo: &str) -> &str {
    let tail = repo
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(repo);
    tail.strip_suffix(".git").unwrap_or(tail)
}

/// Expand `owner/name` shorthand to a GitHub URL; URLs and local paths pass
/// through verbatim.
fn repo_url(repo: &str) -> String {
    if repo.contains("://") || Path::new(repo).exists() {
        repo.to_string()
    } else {
        format!("https://github.com/{repo}.git")
    }
}

fn clone_shallow(repo: &str, dest: &Path) -> Result<()> {
    let url = repo_url(repo);
    info!(repo = %repo, url = %url, dest = %dest.display(), "cloning");

    let spinner = ProgressBar::new_spinner().with_message(format!("cloning {repo}"));

    let mut callbacks = RemoteCallbacks::new();
    callbacks.transfer_progress(|progress| {
        spinner.set_message(format!(
            "cloning {repo}: {}/{} objects",
            progress.received_objects(),
            progress.total_objects()
        ));
        spinner.tick();
        true
    });

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    // The local transport has no shallow support; only network clones get depth 1.
    if url.contains("://") {
        fetch_options.depth(1);
    }

    let result = RepoBuilder::new()
        .fetch_options(fetch_options)
        .clone(&url, dest);

    match result {
        Ok(_) => {
            spinner.finish_with_message(format!("cloned {repo}"));
            Ok(())
        }
        Err(err) => {
            spinner.finish_and_clear();
            Err(err.into())
        }
    }
}
