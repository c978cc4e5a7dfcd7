//! Single-line text editor with a fixed prompt prefix.

use std::io;

use ratatui::style::Style;

use crate::drivers::SurfaceDriver;
use crate::drivers::keyboard::KeyInput;
use crate::theme;
use crate::window::{PanelId, WindowRegistry};

use super::draw_frame;

/// What one handled key did to the edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Still editing; redraw and keep polling.
    Editing,
    /// Enter pressed; carries the entered text with the prefix stripped.
    Committed(String),
    /// Escape pressed; the content is discarded.
    Cancelled,
}

/// Editor state for one prompt session.
///
/// `content` always starts with the immutable prefix and holds ASCII only
/// (the key vocabulary admits nothing else), so byte offsets are character
/// offsets. Boundary conditions clamp: backspace at the prefix, arrows past
/// either end and forward delete at the tail are silent no-ops.
#[derive(Debug)]
pub struct TextInput {
    panel: PanelId,
    title: String,
    content: String,
    cursor: usize,
    scroll: usize,
    prefix_len: usize,
}

impl TextInput {
    pub fn new<T: Into<String>>(panel: PanelId, title: T, prefix: &str) -> Self {
        Self {
            panel,
            title: title.into(),
            content: prefix.to_string(),
            cursor: prefix.len(),
            scroll: 0,
            prefix_len: prefix.len(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Applies one key against the view width the prompt currently has.
    /// Keys outside the edit vocabulary are ignored.
    pub fn handle_key(&mut self, key: KeyInput, view_cols: u16) -> EditOutcome {
        match key {
            KeyInput::Char(c) => {
                self.content.insert(self.cursor, c);
                self.cursor += 1;
            }
            KeyInput::Backspace => {
                if self.cursor > self.prefix_len {
                    self.cursor -= 1;
                    self.content.remove(self.cursor);
                }
            }
            KeyInput::Delete => {
                if self.cursor < self.content.len() {
                    self.content.remove(self.cursor);
                }
            }
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1).max(self.prefix_len);
            }
            KeyInput::Right => {
                self.cursor = (self.cursor + 1).min(self.content.len());
            }
            KeyInput::Home => self.cursor = self.prefix_len,
            KeyInput::End => self.cursor = self.content.len(),
            KeyInput::Enter => {
                return EditOutcome::Committed(self.content[self.prefix_len..].to_string());
            }
            KeyInput::Escape => return EditOutcome::Cancelled,
            _ => {}
        }
        self.follow_cursor(view_cols);
        EditOutcome::Editing
    }

    /// The slice visible after horizontal scroll.
    pub fn visible(&self, view_cols: u16) -> &str {
        let end = (self.scroll + view_cols as usize).min(self.content.len());
        &self.content[self.scroll.min(end)..end]
    }

    /// Caret column relative to the visible slice.
    pub fn caret_col(&self) -> u16 {
        (self.cursor - self.scroll).min(usize::from(u16::MAX)) as u16
    }

    /// Draws the prompt frame, the visible slice, and parks the terminal
    /// caret at the cursor. A dark prompt window draws nothing.
    pub fn render(&self, driver: &mut impl SurfaceDriver, registry: &WindowRegistry) -> io::Result<()> {
        let window = registry.get(self.panel);
        let Some(handle) = window.handle() else {
            return Ok(());
        };
        let rect = window.rect();
        if rect.width < 3 || rect.height < 3 {
            return Ok(());
        }
        let view = rect.width - 2;
        driver.fill(handle, Style::default())?;
        draw_frame(driver, handle, rect, Some(&self.title), theme::prompt_border(), theme::panel_title())?;
        driver.write_text(handle, 1, 1, self.visible(view), theme::prompt_text())?;
        driver.set_cursor(handle, 1, 1 + self.caret_col())?;
        Ok(())
    }

    fn follow_cursor(&mut self, view_cols: u16) {
        let view = view_cols as usize;
        if view == 0 {
            self.scroll = self.cursor;
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + view {
            self.scroll = self.cursor + 1 - view;
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::prelude::Rect;

    use crate::constants::PROMPT_PREFIX;
    use crate::drivers::memory::MemorySurfaceDriver;

    use super::*;

    const VIEW: u16 = 20;

    fn editor() -> TextInput {
        TextInput::new(PanelId::Prompt, "add file", PROMPT_PREFIX)
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            assert_eq!(input.handle_key(KeyInput::Char(c), VIEW), EditOutcome::Editing);
        }
    }

    #[test]
    fn typing_inserts_after_the_prefix() {
        let mut input = editor();
        assert_eq!(input.content(), "> ");
        assert_eq!(input.cursor(), 2);

        type_str(&mut input, "abc");

        assert_eq!(input.content(), "> abc");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn three_backspaces_restore_the_bare_prompt() {
        let mut input = editor();
        type_str(&mut input, "abc");

        for _ in 0..3 {
            input.handle_key(KeyInput::Backspace, VIEW);
        }

        assert_eq!(input.content(), "> ");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_the_prefix_is_a_no_op() {
        let mut input = editor();
        input.handle_key(KeyInput::Backspace, VIEW);

        assert_eq!(input.content(), "> ");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn arrows_clamp_to_prefix_and_end() {
        let mut input = editor();
        type_str(&mut input, "hi");

        for _ in 0..5 {
            input.handle_key(KeyInput::Left, VIEW);
        }
        assert_eq!(input.cursor(), 2);

        for _ in 0..5 {
            input.handle_key(KeyInput::Right, VIEW);
        }
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn home_and_end_jump_to_the_clamp_bounds() {
        let mut input = editor();
        type_str(&mut input, "hello");

        input.handle_key(KeyInput::Home, VIEW);
        assert_eq!(input.cursor(), 2);
        input.handle_key(KeyInput::End, VIEW);
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn forward_delete_eats_under_the_cursor_and_clamps_at_the_tail() {
        let mut input = editor();
        type_str(&mut input, "abc");
        input.handle_key(KeyInput::Home, VIEW);

        input.handle_key(KeyInput::Delete, VIEW);
        assert_eq!(input.content(), "> bc");

        input.handle_key(KeyInput::End, VIEW);
        input.handle_key(KeyInput::Delete, VIEW);
        assert_eq!(input.content(), "> bc");
    }

    #[test]
    fn enter_commits_without_the_prefix() {
        let mut input = editor();
        type_str(&mut input, "notes.txt");

        assert_eq!(
            input.handle_key(KeyInput::Enter, VIEW),
            EditOutcome::Committed("notes.txt".to_string())
        );
    }

    #[test]
    fn escape_cancels() {
        let mut input = editor();
        type_str(&mut input, "whatever");
        assert_eq!(input.handle_key(KeyInput::Escape, VIEW), EditOutcome::Cancelled);
    }

    #[test]
    fn long_input_scrolls_to_keep_the_caret_visible() {
        let mut input = editor();
        let view: u16 = 6;
        for c in "abcdefgh".chars() {
            input.handle_key(KeyInput::Char(c), view);
        }

        // content "> abcdefgh" (10 chars), cursor 10, view 6
        assert_eq!(input.scroll(), 5);
        assert_eq!(input.visible(view), "defgh");
        assert_eq!(input.caret_col(), 5);

        input.handle_key(KeyInput::Home, view);
        assert_eq!(input.scroll(), 2);
        assert_eq!(input.visible(view), "abcdef");
        assert_eq!(input.caret_col(), 0);
    }

    #[test]
    fn render_parks_the_caret_inside_the_prompt() {
        let mut driver = MemorySurfaceDriver::new(24, 80);
        let mut registry = WindowRegistry::new();
        registry.create(&mut driver, PanelId::Prompt, Rect::new(10, 10, 24, 3)).unwrap();

        let mut input = editor();
        type_str(&mut input, "abc");
        input.render(&mut driver, &registry).unwrap();

        let handle = registry.get(PanelId::Prompt).handle().unwrap();
        let surface = driver.surface(handle).unwrap();
        assert!(surface.row_text(1).starts_with("│> abc"));
        assert_eq!(driver.cursor(), Some((handle, 1, 6)));
    }
}
