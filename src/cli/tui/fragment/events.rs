use ratatui::crossterm::event::KeyEvent;

use super::resolver::Resolution;
use crate::FragmentError;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Background lookup events
    Resolved(Resolution),
    Failed(FragmentError),
}

impl From<Result<Resolution, FragmentError>> for AppEvent {
    fn from(result: Result<Resolution, FragmentError>) -> Self {
        match result {
            Ok(resolution) => AppEvent::Resolved(resolution),
            Err(err) => AppEvent::Failed(err),
        }
    }
}
