//! Open pull request lookup for the current branch
//!
//! The lookup is an external command (`gh` by default) that prints one PR
//! number per line. It runs once, at startup, after checking that the
//! changelog directory exists.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::config::{LookupCommand, Settings};
use crate::FragmentError;

/// What the lookup found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one open PR, no need to ask
    Single(String),
    /// Several open PRs, the operator picks one
    Multiple(Vec<String>),
}

/// Runs the configured lookup command
#[derive(Debug, Clone)]
pub struct PrResolver {
    changelog_dir: PathBuf,
    lookup: LookupCommand,
}

impl PrResolver {
    pub fn new(changelog_dir: impl Into<PathBuf>, lookup: LookupCommand) -> Self {
        Self {
            changelog_dir: changelog_dir.into(),
            lookup,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.changelog_dir.clone(), settings.lookup.clone())
    }

    pub async fn resolve(&self) -> Result<Resolution, FragmentError> {
        ensure_changelog_dir(&self.changelog_dir)?;

        tracing::info!(command = %self.lookup.display(), "Looking up open pull requests");

        let output = Command::new(&self.lookup.program)
            .args(&self.lookup.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| FragmentError::Resolver {
                output: String::new(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let combined = format!("{}{}", stdout, stderr);
            tracing::warn!(status = %output.status, "Lookup command failed");
            return Err(FragmentError::Resolver {
                output: combined.trim().to_string(),
                reason: output.status.to_string(),
            });
        }

        let resolution = parse_lookup_output(&stdout)?;
        tracing::info!(?resolution, "Lookup finished");
        Ok(resolution)
    }
}

/// Fail early when not run from the project root.
pub fn ensure_changelog_dir(dir: &Path) -> Result<(), FragmentError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(FragmentError::WrongDirectory {
            dir: dir.to_path_buf(),
        })
    }
}

/// Turn newline-separated PR identifiers into a [`Resolution`].
pub fn parse_lookup_output(raw: &str) -> Result<Resolution, FragmentError> {
    let mut prs: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    match prs.len() {
        0 => Err(FragmentError::NotFound),
        // Most branches have at most one open PR
        1 => Ok(Resolution::Single(prs.remove(0))),
        _ => Ok(Resolution::Multiple(prs)),
    }
}
