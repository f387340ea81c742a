//! Summary of one bundle assembly run.

use std::path::PathBuf;

/// What the assembler did for one talk, for display to the caller.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Talk name the bundle was assembled for.
    pub talk: String,
    /// Destination directory of the bundle.
    pub dest: PathBuf,
    /// Basenames of files copied into the bundle.
    pub files_copied: Vec<String>,
    /// Destination subpaths of folder trees copied.
    pub folders_copied: Vec<String>,
    /// Destination subpaths skipped because they already existed.
    pub folders_skipped: Vec<String>,
    /// (old, new) rename pairs applied.
    pub renames_applied: Vec<(String, String)>,
}

impl BundleReport {
    pub fn new(talk: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            talk: talk.into(),
            dest: dest.into(),
            files_copied: Vec::new(),
            folders_copied: Vec::new(),
            folders_skipped: Vec::new(),
            renames_applied: Vec::new(),
        }
    }

    /// Total filesystem mutations performed.
    pub fn mutations(&self) -> usize {
        self.files_copied.len() + self.folders_copied.len() + self.renames_applied.len()
    }
}
