/// Terminal User Interface module for interactive commands
pub mod fragment;

use crate::config::Settings;
use crate::Result;

/// Run the interactive fragment wizard
pub async fn run_fragment_wizard(settings: Settings) -> Result<fragment::Outcome> {
    fragment::run(settings).await
}
