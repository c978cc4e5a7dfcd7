//! Panel identities and the window arena.

pub mod hit;
mod registry;

pub use registry::WindowRegistry;

use ratatui::prelude::Rect;

use crate::drivers::SurfaceHandle;

/// The closed set of panels the deck can show.
///
/// Every panel the engine will ever materialize is named here, which is what
/// lets the registry be a fixed arena instead of a growable table: lookups
/// cannot miss and there is no id recycling to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelId {
    /// Whole-terminal reference window. Never materialized; its rect records
    /// the size the current layout was computed against.
    Root,
    /// Banner art across the top of the screen.
    Banner,
    /// Saved-file list, the wide left panel.
    Files,
    /// Theme list, the fixed-width right panel.
    Themes,
    /// Page-back button sitting on the file panel's bottom border.
    FilesPrev,
    /// Page-forward button sitting on the file panel's bottom border.
    FilesNext,
    /// Transient input popup. Placed only while a prompt is open and torn
    /// down by the state that opened it.
    Prompt,
}

impl PanelId {
    pub const ALL: [PanelId; 7] = [
        PanelId::Root,
        PanelId::Banner,
        PanelId::Files,
        PanelId::Themes,
        PanelId::FilesPrev,
        PanelId::FilesNext,
        PanelId::Prompt,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            PanelId::Root => "root",
            PanelId::Banner => "banner",
            PanelId::Files => "files",
            PanelId::Themes => "themes",
            PanelId::FilesPrev => "files-prev",
            PanelId::FilesNext => "files-next",
            PanelId::Prompt => "prompt",
        }
    }

    /// Buttons occupy a single border line and hit-test on that line only.
    pub fn is_button(self) -> bool {
        matches!(self, PanelId::FilesPrev | PanelId::FilesNext)
    }
}

/// One arena entry: a panel's target geometry plus its live surface when the
/// panel is currently materialized.
#[derive(Debug)]
pub struct Window {
    id: PanelId,
    handle: Option<SurfaceHandle>,
    rect: Rect,
}

impl Window {
    fn new(id: PanelId) -> Self {
        Self { id, handle: None, rect: Rect::default() }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Live surface handle. Absent while the panel is infeasible at the
    /// current terminal size or simply not open.
    pub fn handle(&self) -> Option<SurfaceHandle> {
        self.handle
    }

    /// Current geometry: the live allocation, or the candidate most
    /// recently recorded by the layout engine while the panel is dark.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_panel_once() {
        for (slot, id) in PanelId::ALL.into_iter().enumerate() {
            assert_eq!(id.slot(), slot);
        }
        assert_eq!(PanelId::COUNT, 7);
    }

    #[test]
    fn only_the_arrows_are_buttons() {
        let buttons: Vec<PanelId> =
            PanelId::ALL.into_iter().filter(|id| id.is_button()).collect();
        assert_eq!(buttons, [PanelId::FilesPrev, PanelId::FilesNext]);
    }
}
