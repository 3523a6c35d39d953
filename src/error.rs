use std::path::PathBuf;
use thiserror::Error;

/// Terminal outcomes of the fragment wizard. None of these are retried.
#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("{} directory not found. Are you in the project root?", .dir.display())]
    WrongDirectory { dir: PathBuf },

    #[error("gh error: {output}: {reason}")]
    Resolver { output: String, reason: String },

    #[error("no open pull requests found for current branch")]
    NotFound,

    #[error("{} already exists", .path.display())]
    DuplicateFragment { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terminated")]
    Cancelled,
}

/// Failures outside the wizard itself: settings and terminal I/O
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
