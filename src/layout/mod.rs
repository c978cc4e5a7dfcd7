//! Geometry math shared by the layout engine and the hit tester.

pub mod engine;

pub use engine::{layout_all, place_prompt};

use ratatui::prelude::Rect;

/// One layout decision: where a panel would go and whether each axis fits.
///
/// The rect is computed unconditionally; feasibility is judged per axis so a
/// panel that is wide enough but too short (or the reverse) reports which
/// constraint failed. Infeasible candidates are still recorded in the
/// registry, keeping geometry that siblings position against valid while
/// the panel itself is dark.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub rect: Rect,
    pub cols_ok: bool,
    pub lines_ok: bool,
}

impl Candidate {
    pub fn feasible(&self) -> bool {
        self.cols_ok && self.lines_ok
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
