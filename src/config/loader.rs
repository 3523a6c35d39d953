use super::types::{LookupCommand, Settings, SettingsFile};
use crate::{ChangelogError, Result};
use std::path::{Path, PathBuf};

/// Builds [`Settings`] from defaults, an optional YAML file and CLI overrides.
///
/// Precedence is override > file > default.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    changelog_dir: Option<PathBuf>,
    lookup_command: Option<String>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from this YAML file
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_changelog_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.changelog_dir = dir;
        self
    }

    pub fn with_lookup_command(mut self, command: Option<String>) -> Self {
        self.lookup_command = command;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let file = match &self.file {
            Some(path) => Self::read_file(path)?,
            None => SettingsFile::default(),
        };

        let mut settings = Settings::default();

        if let Some(dir) = self.changelog_dir.or(file.changelog_dir) {
            settings.changelog_dir = dir;
        }

        if let Some(line) = self.lookup_command.or(file.lookup_command) {
            settings.lookup = LookupCommand::parse(&line)?;
        }

        tracing::debug!(
            changelog_dir = %settings.changelog_dir.display(),
            lookup = %settings.lookup.display(),
            "Resolved settings"
        );

        Ok(settings)
    }

    fn read_file(path: &Path) -> Result<SettingsFile> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChangelogError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        // An empty document deserializes as unit, not as an empty map
        if contents.trim().is_empty() {
            return Ok(SettingsFile::default());
        }

        serde_yaml_ng::from_str(&contents).map_err(|e| {
            ChangelogError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
