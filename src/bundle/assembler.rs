//! Bundle assembly steps.

use std::path::Path;

use tracing::{debug, info};

use crate::bundle::report::BundleReport;
use crate::error::{OgnError, Result};
use crate::notebooks::NotebookSource;
use crate::talks::{TalkSpec, TalkTable};
use crate::utils::fs::{basename, copy_tree, ensure_dir, remove_dir_if_exists};

/// Assembles talk bundles from a loaded talk table.
///
/// All paths resolve against an explicit project root; the process working
/// directory is never changed. Steps run strictly in order - files, folders,
/// renames - and the first failure aborts the remainder.
pub struct BundleAssembler<'a> {
    root: &'a Path,
    table: &'a TalkTable,
    notebooks: &'a dyn NotebookSource,
}

impl<'a> BundleAssembler<'a> {
    pub fn new(root: &'a Path, table: &'a TalkTable, notebooks: &'a dyn NotebookSource) -> Self {
        Self {
            root,
            table,
            notebooks,
        }
    }

    /// Produce the populated `<root>/<talk_name>` directory.
    ///
    /// With `clean`, an existing destination is removed first. Without it,
    /// files are re-copied unconditionally while folder destinations that
    /// already exist are left untouched.
    pub fn assemble(&self, talk_name: &str, clean: bool) -> Result<BundleReport> {
        let spec = self.table.get(talk_name)?;
        let dest = self.root.join(talk_name);

        if clean {
            info!(talk = talk_name, "cleaning talk directory");
            remove_dir_if_exists(&dest)?;
        }
        ensure_dir(&dest)?;

        let mut report = BundleReport::new(talk_name, &dest);
        self.copy_files(spec, &dest, &mut report)?;
        self.copy_folders(spec, &dest, &mut report)?;
        self.apply_renames(spec, &dest, &mut report)?;

        info!(
            talk = talk_name,
            mutations = report.mutations(),
            "bundle assembled"
        );
        Ok(report)
    }

    fn copy_files(&self, spec: &TalkSpec, dest: &Path, report: &mut BundleReport) -> Result<()> {
        for file in &spec.files {
            if first_segment(file) == Some(self.notebooks.folder_name()) {
                self.notebooks.ensure_available()?;
            }

            let source = self.root.join(file);
            let copied = dest.join(basename(file));
            debug!(source = %source.display(), dest = %copied.display(), "copying file");
            std::fs::copy(&source, &copied)?;
            if !copied.is_file() {
                return Err(OgnError::CopyPostcondition {
                    source_path: source,
                    dest: copied,
                });
            }
            report.files_copied.push(basename(file).to_string());
        }
        Ok(())
    }

    fn copy_folders(&self, spec: &TalkSpec, dest: &Path, report: &mut BundleReport) -> Result<()> {
        for (src, subpath) in &spec.folders {
            let target = dest.join(subpath);
            if target.exists() {
                debug!(target = %target.display(), "folder destination exists, skipping");
                report.folders_skipped.push(subpath.clone());
                continue;
            }
            debug!(src = %src, target = %target.display(), "copying folder tree");
            copy_tree(self.root.join(src), &target)?;
            report.folders_copied.push(subpath.clone());
        }
        Ok(())
    }

    fn apply_renames(&self, spec: &TalkSpec, dest: &Path, report: &mut BundleReport) -> Result<()> {
        for (old, new) in &spec.rename {
            let moved = dest.join(basename(old));
            let target = dest.join(new);
            if moved.is_file() {
                debug!(from = %moved.display(), to = %target.display(), "renaming in place");
                std::fs::rename(&moved, &target)?;
            } else if self.root.join(old).is_file() {
                debug!(from = %old, to = %target.display(), "copying renamed source");
                std::fs::copy(self.root.join(old), &target)?;
            } else {
                debug!(old = %old, "rename source missing, skipping");
                continue;
            }
            report.renames_applied.push((old.clone(), new.clone()));
        }
        Ok(())
    }
}

/// First path segment of a relative path entry.
fn first_segment(entry: &str) -> Option<&str> {
    Path::new(entry)
        .components()
        .next()
        .and_then(|component| component.as_os_str().to_str())
}
