//! Candidate geometry and feasibility for every panel.
//!
//! Re-running [`layout_all`] is the only recovery path after a resize: each
//! panel gets a fresh candidate computed from the current terminal size,
//! feasible panels are recreated and infeasible ones torn down. There is no
//! incremental diffing, which is what makes the pass idempotent.

use std::io;

use ratatui::prelude::Rect;
use tracing::debug;

use crate::constants::{
    ARROW_COLS, ARROW_INSET, BANNER_LINES, BANNER_MIN_COLS, FILE_PANEL_MIN_COLS,
    FILE_PANEL_MIN_LINES, PANEL_GAP, PROMPT_LINES, PROMPT_MAX_COLS, PROMPT_MIN_COLS,
    THEME_PANEL_COLS, THEME_PANEL_MIN_LINES,
};
use crate::drivers::SurfaceDriver;
use crate::window::{PanelId, Window, WindowRegistry};

use super::Candidate;

/// Runs the full static layout against `screen`.
///
/// The screen size is recorded as the root window's geometry, which is what
/// the session loop compares against to detect the next resize. The prompt
/// is owned by the text-entry state and is never touched here.
pub fn layout_all(
    driver: &mut impl SurfaceDriver,
    registry: &mut WindowRegistry,
    screen: Rect,
) -> io::Result<()> {
    registry.set_target(PanelId::Root, screen);

    apply(driver, registry, PanelId::Banner, banner_candidate(screen))?;
    apply(driver, registry, PanelId::Files, files_candidate(screen))?;
    apply(driver, registry, PanelId::Themes, themes_candidate(screen))?;

    // arrow buttons ride on the file panel and follow it out
    let prev = prev_button_candidate(registry.get(PanelId::Files));
    apply(driver, registry, PanelId::FilesPrev, prev)?;
    let next = next_button_candidate(registry.get(PanelId::Files));
    apply(driver, registry, PanelId::FilesNext, next)?;

    Ok(())
}

/// Lays out the transient prompt popup, centered on the screen. The
/// text-entry state calls this when it opens and destroys the prompt on
/// exit; the static pass never places it.
pub fn place_prompt(
    driver: &mut impl SurfaceDriver,
    registry: &mut WindowRegistry,
    screen: Rect,
) -> io::Result<()> {
    apply(driver, registry, PanelId::Prompt, prompt_candidate(screen))
}

/// Realizes one candidate: feasible panels are recreated at the fresh rect,
/// infeasible ones torn down, and the candidate geometry recorded either
/// way.
fn apply(
    driver: &mut impl SurfaceDriver,
    registry: &mut WindowRegistry,
    id: PanelId,
    candidate: Candidate,
) -> io::Result<()> {
    if candidate.feasible() {
        registry.create(driver, id, candidate.rect)?;
    } else {
        if registry.is_live(id) {
            debug!(
                panel = id.name(),
                cols_ok = candidate.cols_ok,
                lines_ok = candidate.lines_ok,
                "panel no longer fits"
            );
        }
        registry.destroy(driver, id)?;
        registry.set_target(id, candidate.rect);
    }
    Ok(())
}

pub fn banner_candidate(screen: Rect) -> Candidate {
    Candidate {
        rect: Rect::new(0, 0, screen.width, BANNER_LINES),
        cols_ok: screen.width >= BANNER_MIN_COLS,
        lines_ok: screen.height >= BANNER_LINES,
    }
}

pub fn files_candidate(screen: Rect) -> Candidate {
    let body = screen.height.saturating_sub(BANNER_LINES);
    let height = body / 2;
    let width = screen.width.saturating_sub(THEME_PANEL_COLS + PANEL_GAP);
    Candidate {
        rect: Rect::new(0, BANNER_LINES, width, height),
        cols_ok: width >= FILE_PANEL_MIN_COLS,
        lines_ok: height >= FILE_PANEL_MIN_LINES,
    }
}

pub fn themes_candidate(screen: Rect) -> Candidate {
    let body = screen.height.saturating_sub(BANNER_LINES);
    Candidate {
        rect: Rect::new(
            screen.width.saturating_sub(THEME_PANEL_COLS),
            BANNER_LINES,
            THEME_PANEL_COLS,
            body,
        ),
        cols_ok: screen.width >= THEME_PANEL_COLS,
        lines_ok: body >= THEME_PANEL_MIN_LINES,
    }
}

pub fn prompt_candidate(screen: Rect) -> Candidate {
    let width =
        (screen.width.saturating_mul(2) / 3).clamp(PROMPT_MIN_COLS, PROMPT_MAX_COLS);
    Candidate {
        rect: Rect::new(
            screen.width.saturating_sub(width) / 2,
            screen.height.saturating_sub(PROMPT_LINES) / 2,
            width,
            PROMPT_LINES,
        ),
        cols_ok: screen.width >= PROMPT_MIN_COLS,
        lines_ok: screen.height >= PROMPT_LINES,
    }
}

/// Back arrow, sitting on the file panel's bottom border near its left
/// corner. Feasible only while the parent panel is itself live.
pub fn prev_button_candidate(files: &Window) -> Candidate {
    arrow_candidate(files, files.rect().x.saturating_add(ARROW_INSET))
}

/// Forward arrow, mirrored near the right corner.
pub fn next_button_candidate(files: &Window) -> Candidate {
    let rect = files.rect();
    let col = rect
        .x
        .saturating_add(rect.width)
        .saturating_sub(ARROW_INSET + ARROW_COLS);
    arrow_candidate(files, col)
}

fn arrow_candidate(files: &Window, col: u16) -> Candidate {
    let rect = files.rect();
    let line = rect.y.saturating_add(rect.height).saturating_sub(1);
    let fits_between_corners = rect.width >= (ARROW_INSET + ARROW_COLS) * 2 + 2;
    Candidate {
        rect: Rect::new(col, line, ARROW_COLS, 1),
        cols_ok: files.is_live() && fits_between_corners,
        lines_ok: files.is_live() && rect.height >= 2,
    }
}

#[cfg(test)]
mod tests {
    use crate::drivers::memory::MemorySurfaceDriver;

    use super::*;

    fn screen(lines: u16, cols: u16) -> Rect {
        Rect::new(0, 0, cols, lines)
    }

    fn rects(registry: &WindowRegistry) -> Vec<(PanelId, bool, Rect)> {
        PanelId::ALL
            .into_iter()
            .map(|id| (id, registry.is_live(id), registry.get(id).rect()))
            .collect()
    }

    #[test]
    fn standard_screen_materializes_every_static_panel() {
        let mut driver = MemorySurfaceDriver::new(40, 120);
        let mut registry = WindowRegistry::new();

        layout_all(&mut driver, &mut registry, screen(40, 120)).unwrap();

        assert!(!registry.is_live(PanelId::Root));
        assert_eq!(registry.get(PanelId::Root).rect(), screen(40, 120));
        assert_eq!(registry.get(PanelId::Banner).rect(), Rect::new(0, 0, 120, 6));
        assert_eq!(registry.get(PanelId::Files).rect(), Rect::new(0, 6, 94, 17));
        assert_eq!(registry.get(PanelId::Themes).rect(), Rect::new(96, 6, 24, 34));
        assert_eq!(registry.get(PanelId::FilesPrev).rect(), Rect::new(2, 22, 3, 1));
        assert_eq!(registry.get(PanelId::FilesNext).rect(), Rect::new(89, 22, 3, 1));
        for id in [PanelId::Banner, PanelId::Files, PanelId::Themes, PanelId::FilesPrev, PanelId::FilesNext] {
            assert!(registry.is_live(id), "{id:?} should be live");
        }
        assert!(!registry.is_live(PanelId::Prompt));
    }

    #[test]
    fn infeasible_panel_goes_dark_but_keeps_candidate_geometry() {
        let mut driver = MemorySurfaceDriver::new(6, 40);
        let mut registry = WindowRegistry::new();

        layout_all(&mut driver, &mut registry, screen(6, 40)).unwrap();

        let files = registry.get(PanelId::Files);
        assert!(!files.is_live());
        assert_eq!(files.rect(), Rect::new(0, 6, 14, 0));
        assert!(!registry.is_live(PanelId::Themes));
        assert!(!registry.is_live(PanelId::FilesPrev));
    }

    #[test]
    fn layout_is_idempotent_at_a_fixed_size() {
        let mut driver = MemorySurfaceDriver::new(40, 120);
        let mut registry = WindowRegistry::new();

        layout_all(&mut driver, &mut registry, screen(40, 120)).unwrap();
        let first = rects(&registry);
        let surfaces = driver.live_surfaces();

        layout_all(&mut driver, &mut registry, screen(40, 120)).unwrap();

        assert_eq!(rects(&registry), first);
        assert_eq!(driver.live_surfaces(), surfaces);
    }

    #[test]
    fn shrink_then_regrow_restores_the_original_geometry() {
        let mut driver = MemorySurfaceDriver::new(40, 120);
        let mut registry = WindowRegistry::new();

        layout_all(&mut driver, &mut registry, screen(40, 120)).unwrap();
        let original = rects(&registry);

        driver.set_size(6, 40);
        layout_all(&mut driver, &mut registry, screen(6, 40)).unwrap();
        assert!(!registry.is_live(PanelId::Files));

        driver.set_size(40, 120);
        layout_all(&mut driver, &mut registry, screen(40, 120)).unwrap();

        assert_eq!(rects(&registry), original);
    }

    #[test]
    fn arrows_follow_the_file_panel_out() {
        let mut driver = MemorySurfaceDriver::new(40, 120);
        let mut registry = WindowRegistry::new();
        layout_all(&mut driver, &mut registry, screen(40, 120)).unwrap();
        assert!(registry.is_live(PanelId::FilesPrev));

        // tall enough for themes, too narrow for files
        layout_all(&mut driver, &mut registry, screen(40, 60)).unwrap();

        assert!(!registry.is_live(PanelId::Files));
        assert!(registry.is_live(PanelId::Themes));
        assert!(!registry.is_live(PanelId::FilesPrev));
        assert!(!registry.is_live(PanelId::FilesNext));
    }

    #[test]
    fn prompt_is_centered_and_clamped() {
        let mut driver = MemorySurfaceDriver::new(40, 120);
        let mut registry = WindowRegistry::new();

        place_prompt(&mut driver, &mut registry, screen(40, 120)).unwrap();

        let prompt = registry.get(PanelId::Prompt);
        assert!(prompt.is_live());
        assert_eq!(prompt.rect(), Rect::new(28, 18, 64, 3));
    }

    #[test]
    fn prompt_stays_dark_on_a_tiny_screen() {
        let mut driver = MemorySurfaceDriver::new(2, 120);
        let mut registry = WindowRegistry::new();

        place_prompt(&mut driver, &mut registry, screen(2, 120)).unwrap();

        assert!(!registry.is_live(PanelId::Prompt));
        assert_eq!(registry.get(PanelId::Prompt).rect().height, PROMPT_LINES);
    }
}
