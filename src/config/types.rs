use serde::Deserialize;
use std::path::PathBuf;

use crate::{ChangelogError, Result};

/// Directory fragments are written into, relative to the working directory
pub const DEFAULT_CHANGELOG_DIR: &str = ".changelog";

/// `gh` search for open PRs whose head is the current branch.
/// `-X=GET` is required since passing `-F` defaults the request to POST.
pub const DEFAULT_LOOKUP_COMMAND: &[&str] = &[
    "gh",
    "api",
    "-X=GET",
    "search/issues",
    "-F",
    "q=repo:{owner}/{repo} is:open type:pr head:{branch}",
    "-q",
    ".items.[].number",
];

/// On-disk settings file (YAML). Every key is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Where fragments live
    #[serde(default)]
    pub changelog_dir: Option<PathBuf>,

    /// Full lookup command line, shell-quoted
    #[serde(default)]
    pub lookup_command: Option<String>,
}

/// Resolved settings the wizard runs with
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub changelog_dir: PathBuf,
    pub lookup: LookupCommand,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            changelog_dir: PathBuf::from(DEFAULT_CHANGELOG_DIR),
            lookup: LookupCommand::default(),
        }
    }
}

/// Program plus argv for the PR lookup
#[derive(Debug, Clone, PartialEq)]
pub struct LookupCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LookupCommand {
    /// Split a shell-quoted command line into program and arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = shell_words::split(line).map_err(|e| {
            ChangelogError::Config(format!("Invalid lookup command '{}': {}", line, e))
        })?;

        if words.is_empty() {
            return Err(ChangelogError::Config(
                "Lookup command must not be empty".to_string(),
            ));
        }

        let program = words.remove(0);
        Ok(Self {
            program,
            args: words,
        })
    }

    /// Shell-quoted form, for logging
    pub fn display(&self) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }
}

impl Default for LookupCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_LOOKUP_COMMAND[0].to_string(),
            args: DEFAULT_LOOKUP_COMMAND[1..]
                .iter()
                .map(|arg| arg.to_string())
                .collect(),
        }
    }
}
