//! Pointer target resolution.

use crate::layout::rect_contains;

use super::{PanelId, WindowRegistry};

/// Panels a click can land on, most specific first. The arrow buttons sit
/// on the file panel's bottom border, so they must be probed before the
/// panel hosting them; the prompt floats over everything else it overlaps.
const PROBE_ORDER: [PanelId; 5] = [
    PanelId::FilesPrev,
    PanelId::FilesNext,
    PanelId::Prompt,
    PanelId::Files,
    PanelId::Themes,
];

/// Resolves a screen position to the topmost live panel under it. `None`
/// means the click landed on bare terminal and is simply ignored.
pub fn resolve_target(registry: &WindowRegistry, line: u16, column: u16) -> Option<PanelId> {
    PROBE_ORDER.into_iter().find(|&id| {
        let window = registry.get(id);
        if !window.is_live() {
            return false;
        }
        let rect = window.rect();
        if id.is_button() {
            line == rect.y
                && column >= rect.x
                && column < rect.x.saturating_add(rect.width)
        } else {
            rect_contains(rect, column, line)
        }
    })
}
