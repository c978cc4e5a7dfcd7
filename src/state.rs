//! Session state shared by the state loops.

use crate::window::PanelId;

/// Which list panel keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Themes,
}

impl Focus {
    pub fn panel(self) -> PanelId {
        match self {
            Focus::Files => PanelId::Files,
            Focus::Themes => PanelId::Themes,
        }
    }

    pub fn toggled(self) -> Focus {
        match self {
            Focus::Files => Focus::Themes,
            Focus::Themes => Focus::Files,
        }
    }
}

/// Flags the browse loop consults every tick. Mutated only by the active
/// state loop; there is no other writer.
#[derive(Debug)]
pub struct SessionState {
    pub focus: Focus,
    pub needs_redraw: bool,
    pub quit: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self { focus: Focus::Files, needs_redraw: true, quit: false }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
