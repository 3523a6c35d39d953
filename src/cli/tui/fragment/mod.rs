/// Interactive changelog fragment wizard
pub mod app;
pub mod components;
pub mod document;
pub mod events;
pub mod resolver;
pub mod state;
pub mod theme;
pub mod view;

pub use state::Outcome;

use crate::config::Settings;
use crate::Result;

/// Entry point for the fragment wizard
pub async fn run(settings: Settings) -> Result<Outcome> {
    let app = app::App::new(settings);
    app.run().await
}
