//! Text input widget
//!
//! A single-line text input with cursor support. The state lives in the
//! app for the whole session; [`InputView`] wraps a reference to it for
//! rendering with the active theme.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::tui::theme::Theme;

/// Editable single-line text state
///
/// The cursor is a character index, not a byte index, so editing works on
/// any text the terminal can deliver.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with initial content, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Replace the content, moving the cursor to the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Byte offset corresponding to the character cursor
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// Renders a [`TextInput`] as a labeled, bordered field
pub struct InputView<'a> {
    input: &'a TextInput,
    label: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputView<'a> {
    /// Create a view over an input's state
    pub fn new(input: &'a TextInput, label: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            input,
            label,
            focused,
            theme,
        }
    }
}

impl Widget for InputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(Style::default().fg(self.theme.label))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .style(Style::default().bg(self.theme.input_bg));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let text_style = Style::default()
            .fg(self.theme.input_fg)
            .bg(self.theme.input_bg);

        let line = if self.focused {
            // Split around the cursor so it can render reversed
            let before: String = self.input.content.chars().take(self.input.cursor).collect();
            let at: String = self
                .input
                .content
                .chars()
                .nth(self.input.cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = self
                .input
                .content
                .chars()
                .skip(self.input.cursor + 1)
                .collect();

            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled(at, text_style.add_modifier(Modifier::REVERSED)),
                Span::styled(after, text_style),
            ])
        } else {
            Line::from(Span::styled(self.input.content.clone(), text_style))
        };

        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
