//! Projection of the wizard onto the terminal

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::components::{SelectList, TextEntry};
use super::document::{FOOTER, HEADER};
use super::state::{Scene, Wizard};
use super::theme;

pub const BODY_HINT: &str = "(enter to save or ctrl+c to exit)";

/// Title and blank line above list items
const LIST_CHROME_ROWS: usize = 2;

pub fn render(frame: &mut Frame, wizard: &Wizard) {
    let area = frame.area();
    frame.render_widget(Paragraph::new(view(wizard, area)), area);
}

/// Lines for `wizard` laid out to fit `area`. Nothing is shown before it is
/// known. Lists are windowed to the rows left over and the body entry scrolls
/// horizontally to keep the cursor visible.
pub fn view(wizard: &Wizard, area: Rect) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(path) = wizard.file_name() {
        lines.push(Line::styled(path.display().to_string(), theme::file_path()));
    }

    if let Some(category) = wizard.target_type() {
        lines.push(Line::styled(
            format!("{}{}", HEADER, category),
            theme::category_header(),
        ));
    }

    if let Some(list) = wizard.list() {
        if !list.is_empty() {
            let rows = usize::from(area.height)
                .saturating_sub(lines.len() + LIST_CHROME_ROWS)
                .max(1);
            push_list(&mut lines, list, rows);
        }
    }

    if wizard.scene() == Scene::BodyInput {
        if wizard.written() {
            lines.push(Line::raw(wizard.body().value().to_string()));
            lines.push(Line::raw(FOOTER));
        } else if !wizard.is_finished() {
            lines.push(entry_line(wizard.body(), usize::from(area.width)));
            lines.push(Line::raw(FOOTER));
            lines.push(Line::raw(""));
            lines.push(Line::styled(BODY_HINT, theme::muted()));
        }
    }

    if wizard.written() {
        lines.push(Line::styled("File written.", theme::success()));
    }

    if let Some(err) = wizard.error() {
        lines.push(Line::styled(err.to_string(), theme::error()));
    }

    if lines.is_empty() {
        lines.push(Line::styled("loading...", theme::muted()));
    }

    Text::from(lines)
}

fn push_list(lines: &mut Vec<Line<'static>>, list: &SelectList, rows: usize) {
    lines.push(Line::raw(list.title().to_string()));
    lines.push(Line::raw(""));

    let selected = list.selected_index();
    for (idx, item) in list.visible(rows) {
        if Some(idx) == selected {
            lines.push(Line::styled(format!("> {}", item), theme::selected()));
        } else {
            lines.push(Line::raw(format!("  {}", item)));
        }
    }
}

fn entry_line(entry: &TextEntry, width: usize) -> Line<'static> {
    let chars: Vec<char> = entry.value().chars().collect();
    let cursor = entry.cursor().min(chars.len());

    // One cell is kept for the cursor when it sits past the last char
    let start = if width == 0 {
        0
    } else {
        (cursor + 1).saturating_sub(width)
    };
    let end = if width == 0 {
        chars.len()
    } else {
        chars.len().min(start + width)
    };

    let before: String = chars[start..cursor].iter().collect();
    let under_cursor = chars
        .get(cursor)
        .filter(|_| cursor < end)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".into());
    let after: String = chars
        .get(cursor + 1..end)
        .map(|rest| rest.iter().collect())
        .unwrap_or_default();

    Line::from(vec![
        Span::raw(before),
        Span::styled(under_cursor, theme::cursor()),
        Span::raw(after),
    ])
}
