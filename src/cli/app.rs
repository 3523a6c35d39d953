use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Writes a changelog fragment for the pull request of the current branch
#[derive(Parser, Debug)]
#[command(name = "changelog-fragment")]
#[command(version)]
#[command(about = "Write a changelog fragment for the current branch's pull request")]
#[command(
    long_about = "Looks up the open pull request for the current branch with `gh`, asks for a release-note type and a body, and writes .changelog/<PR>.txt."
)]
pub struct Cli {
    /// Directory fragments are written into
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Command used to list open PR numbers for the current branch
    #[arg(long)]
    pub lookup: Option<String>,

    /// YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, default_value = "off")]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
