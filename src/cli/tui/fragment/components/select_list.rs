use ratatui::crossterm::event::{KeyCode, KeyEvent};

/// Pick one of a fixed list of labels.
///
/// Items never change after construction; a new list is built for each
/// scene. Navigation clamps at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectList {
    title: String,
    items: Vec<String>,
    selected_index: usize,
}

impl SelectList {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            items,
            selected_index: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.selected_index)
        }
    }

    /// Highlighted label, `None` for an empty list
    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.selected_index).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
        }
    }

    /// Apply a navigation key. Returns false for keys the list ignores.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.selected_index = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected_index = self.items.len().saturating_sub(1)
            }
            _ => return false,
        }
        true
    }

    /// At most `max` items around the highlighted one, with their indices.
    pub fn visible(&self, max: usize) -> impl Iterator<Item = (usize, &str)> + '_ {
        let max = max.max(1);
        let start = (self.selected_index + 1).saturating_sub(max);
        self.items
            .iter()
            .enumerate()
            .skip(start)
            .take(max)
            .map(|(idx, item)| (idx, item.as_str()))
    }
}
