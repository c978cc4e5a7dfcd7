//! Pointer decoding.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::InputEvent;
use super::keyboard::KeyInput;

/// One decoded pointer press: screen position plus which button went down.
/// Motion, drags, and releases never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    pub line: u16,
    pub column: u16,
    pub button: PointerButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Maps one crossterm mouse event to the engine vocabulary. Wheel steps
/// read as selection nudges.
pub(crate) fn pointer_event(pointer: MouseEvent) -> Option<InputEvent> {
    match pointer.kind {
        MouseEventKind::Down(button) => Some(InputEvent::Pointer(PointerInput {
            line: pointer.row,
            column: pointer.column,
            button: match button {
                MouseButton::Left => PointerButton::Left,
                MouseButton::Right => PointerButton::Right,
                MouseButton::Middle => PointerButton::Middle,
            },
        })),
        MouseEventKind::ScrollUp => Some(InputEvent::Key(KeyInput::Up)),
        MouseEventKind::ScrollDown => Some(InputEvent::Key(KeyInput::Down)),
        _ => None,
    }
}
