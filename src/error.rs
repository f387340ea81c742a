//! Error types for ogn.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OgnError>;

#[derive(Debug, Error)]
pub enum OgnError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to load talks from {path}: {message}")]
    Talks { path: PathBuf, message: String },

    #[error("unknown talk '{name}' (available: {})", available.join(", "))]
    UnknownTalk {
        name: String,
        available: Vec<String>,
    },

    #[error("{} failed to copy into {}", source_path.display(), dest.display())]
    CopyPostcondition { source_path: PathBuf, dest: PathBuf },

    #[error("{repo} failed download")]
    FetchFailed { repo: String },

    #[error("conda unavailable: {0}")]
    CondaUnavailable(String),

    #[error("{program} exited with status {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },
}
