//! The `talks.yml` talk table.
//!
//! A talk maps to an optional list of files, an optional source→destination
//! folder mapping, and an optional old→new rename mapping:
//!
//! ```yaml
//! talk_name:
//!     folders:
//!         src0: dest0
//!         src1: dest1
//!     files:
//!         - file0
//!         - file1
//!     rename:
//!         oldname: newname
//! ```

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OgnError, Result};

/// Spec for a single talk. All fields optional; read-only once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TalkSpec {
    /// Relative source paths copied into the bundle, flattened to basename.
    #[serde(default)]
    pub files: Vec<String>,
    /// Source directory → destination-relative subpath.
    #[serde(default)]
    pub folders: BTreeMap<String, String>,
    /// Old basename/path → new basename, applied after files/folders.
    #[serde(default)]
    pub rename: BTreeMap<String, String>,
}

/// All talks, keyed by talk name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalkTable {
    talks: BTreeMap<String, TalkSpec>,
}

impl TalkTable {
    /// Load and validate the talk table from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| OgnError::Talks {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::parse_str(&raw, path)
    }

    /// Parse and validate talk table YAML. `path` is only used in errors.
    pub fn parse_str(raw: &str, path: &Path) -> Result<Self> {
        let table: Self = serde_yaml::from_str(raw).map_err(|err| OgnError::Talks {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        table.validate(path)?;
        Ok(table)
    }

    /// Look up a talk by name.
    pub fn get(&self, name: &str) -> Result<&TalkSpec> {
        self.talks.get(name).ok_or_else(|| OgnError::UnknownTalk {
            name: name.to_string(),
            available: self.names().map(ToString::to_string).collect(),
        })
    }

    /// Talk names in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.talks.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for (name, spec) in &self.talks {
            for file in &spec.files {
                check_relative(path, name, file)?;
            }
            for (src, dst) in &spec.folders {
                check_relative(path, name, src)?;
                check_relative(path, name, dst)?;
            }
            for (old, new) in &spec.rename {
                check_relative(path, name, old)?;
                check_relative(path, name, new)?;
            }
        }
        Ok(())
    }
}

/// Reject absolute paths and `..` traversal in talk entries.
fn check_relative(table_path: &Path, talk: &str, entry: &str) -> Result<()> {
    let path = PathBuf::from(entry);
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|component| matches!(component, Component::ParentDir));
    if entry.is_empty() || escapes {
        return Err(OgnError::Talks {
            path: table_path.to_path_buf(),
            message: format!("talk '{talk}': invalid path entry '{entry}'"),
        });
    }
    Ok(())
}
