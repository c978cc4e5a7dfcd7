//! Widgets that draw into registry-held windows.
//!
//! Components are plain values owning their own view state and naming the
//! [`PanelId`](crate::window::PanelId) they render into; no trait objects.
//! Rendering goes through the surface driver so the same code runs against
//! the console and the in-memory driver.

pub mod list_view;
pub mod text_input;

pub use list_view::ListView;
pub use text_input::{EditOutcome, TextInput};

use std::io;

use ratatui::prelude::Rect;
use ratatui::style::Style;

use crate::drivers::{SurfaceDriver, SurfaceHandle};

/// Draws a single-cell box border with an optional title overlaid on the
/// top edge. Degenerate rects (too small to carry a border) draw nothing.
pub(crate) fn draw_frame(
    driver: &mut impl SurfaceDriver,
    handle: SurfaceHandle,
    rect: Rect,
    title: Option<&str>,
    border_style: Style,
    title_style: Style,
) -> io::Result<()> {
    if rect.width < 2 || rect.height < 2 {
        return Ok(());
    }
    let span = (rect.width - 2) as usize;
    let top = format!("┌{}┐", "─".repeat(span));
    let bottom = format!("└{}┘", "─".repeat(span));
    driver.write_text(handle, 0, 0, &top, border_style)?;
    for line in 1..rect.height - 1 {
        driver.write_text(handle, line, 0, "│", border_style)?;
        driver.write_text(handle, line, rect.width - 1, "│", border_style)?;
    }
    driver.write_text(handle, rect.height - 1, 0, &bottom, border_style)?;

    if let Some(title) = title {
        let label = format!(" {title} ");
        // Leave the trailing corner cell untouched even on an exact fit.
        if label.chars().count() + 3 <= rect.width as usize {
            driver.write_text(handle, 0, 2, &label, title_style)?;
        }
    }
    Ok(())
}
