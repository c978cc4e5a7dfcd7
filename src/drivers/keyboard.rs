//! Key decoding and raw-event normalization.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputEvent;
use super::mouse;

/// Decoded key vocabulary consumed by the state loops.
///
/// Printable input is restricted to ASCII so byte and character offsets
/// coincide inside the text editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Maps one crossterm key press to the engine vocabulary. Chords with
/// control-style modifiers and non-ASCII characters decode to `None`.
pub fn key_input(key: KeyEvent) -> Option<KeyInput> {
    match key.code {
        KeyCode::Char(c) if c == ' ' || c.is_ascii_graphic() => {
            let plain =
                key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
            plain.then_some(KeyInput::Char(c))
        }
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Esc => Some(KeyInput::Escape),
        KeyCode::Tab => Some(KeyInput::Tab),
        // shift-tab arrives pre-decoded
        KeyCode::BackTab => Some(KeyInput::BackTab),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        KeyCode::PageUp => Some(KeyInput::PageUp),
        KeyCode::PageDown => Some(KeyInput::PageDown),
        _ => None,
    }
}

/// Collapses raw crossterm events into [`InputEvent`]s.
///
/// Key releases are dropped everywhere; on Windows the console additionally
/// reports Esc twice per press, so a second Esc press without an
/// intervening release is swallowed.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer {
    esc_down: bool,
}

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when the event carries nothing the engine reacts to.
    pub fn normalize(&mut self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(mut key) => {
                // Some terminals report shift-tab as Tab with the modifier
                // still attached rather than as BackTab.
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                if !self.accept(&key) {
                    return None;
                }
                key_input(key).map(InputEvent::Key)
            }
            Event::Mouse(pointer) => mouse::pointer_event(pointer),
            Event::Resize(cols, lines) => Some(InputEvent::Resize { lines, cols }),
            _ => None,
        }
    }

    fn accept(&mut self, key: &KeyEvent) -> bool {
        if cfg!(windows) {
            match key.kind {
                KeyEventKind::Release => {
                    if key.code == KeyCode::Esc {
                        self.esc_down = false;
                    }
                    return false;
                }
                KeyEventKind::Repeat => return false,
                KeyEventKind::Press => {}
            }
            if key.code == KeyCode::Esc {
                if self.esc_down {
                    return false;
                }
                self.esc_down = true;
            } else {
                self.esc_down = false;
            }
            true
        } else {
            key.kind != KeyEventKind::Release
        }
    }
}
