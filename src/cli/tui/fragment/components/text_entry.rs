use ratatui::crossterm::event::{Event, KeyEvent};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Single-line text buffer with a cursor, backed by tui-input.
#[derive(Debug, Default)]
pub struct TextEntry {
    input: Input,
}

impl TextEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Feed a key to the buffer. Returns true if the content or cursor moved.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.input.handle_event(&Event::Key(key)).is_some()
    }
}
