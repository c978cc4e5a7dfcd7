//! Paginating list renderer with column wrap-around.

use std::io;

use ratatui::style::Style;
use tracing::warn;

use crate::constants::COLUMN_STRIDE;
use crate::drivers::SurfaceDriver;
use crate::theme;
use crate::window::{PanelId, WindowRegistry};

use super::draw_frame;

/// Placement of one rendered item inside the panel interior, recorded by
/// the last render pass. Powers click-to-select and page flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSlot {
    pub index: usize,
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

/// A numbered, highlightable list drawn into one panel.
///
/// Items flow down the panel interior; when the usable height is exhausted
/// the pass wraps to a new column group offset by a fixed stride, and stops
/// entirely once an item no longer fits the remaining width.
#[derive(Debug)]
pub struct ListView {
    panel: PanelId,
    title: String,
    items: Vec<String>,
    viewport_offset: usize,
    highlight: Option<usize>,
    slots: Vec<ItemSlot>,
    page_starts: Vec<usize>,
    widest_label: u16,
    stride_warned: bool,
}

impl ListView {
    pub fn new<T: Into<String>>(panel: PanelId, title: T) -> Self {
        Self {
            panel,
            title: title.into(),
            items: Vec::new(),
            viewport_offset: 0,
            highlight: None,
            slots: Vec::new(),
            page_starts: Vec::new(),
            widest_label: 0,
            stride_warned: false,
        }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn viewport_offset(&self) -> usize {
        self.viewport_offset
    }

    /// Slots rendered by the last pass, in render order.
    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    /// Replaces the backing items, rebuilding all view state. The column
    /// stride is validated against the widest label here so an oversized
    /// entry is reported the moment it enters the list.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if self.items.is_empty() {
            self.highlight = None;
        } else if let Some(index) = self.highlight {
            self.highlight = Some(index.min(self.items.len() - 1));
        }
        self.viewport_offset = 0;
        self.page_starts.clear();
        self.slots.clear();
        self.widest_label = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| label_width(index, item))
            .max()
            .unwrap_or(0);
        if self.widest_label >= COLUMN_STRIDE && !self.stride_warned {
            self.stride_warned = true;
            warn!(
                panel = self.panel.name(),
                widest = self.widest_label,
                stride = COLUMN_STRIDE,
                "label wider than the column stride; widening stride for this list"
            );
        }
    }

    pub fn set_highlight(&mut self, highlight: Option<usize>) {
        self.highlight = match highlight {
            Some(index) if !self.items.is_empty() => Some(index.min(self.items.len() - 1)),
            _ => None,
        };
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.highlight = Some(match self.highlight {
            Some(index) => (index + 1).min(self.items.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.highlight = Some(match self.highlight {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }

    /// Advances to the next page using the count the last render produced.
    /// The highlight jumps to the first item of the new page so the view
    /// does not snap back on the following render.
    pub fn page_forward(&mut self) {
        let rendered = self.slots.len();
        if rendered == 0 {
            return;
        }
        let next = self.viewport_offset + rendered;
        if next >= self.items.len() {
            return;
        }
        self.page_starts.push(self.viewport_offset);
        self.viewport_offset = next;
        self.highlight = Some(next);
    }

    /// Returns to the previous page start exactly as it was rendered.
    pub fn page_back(&mut self) {
        let Some(restored) = self.page_starts.pop() else {
            return;
        };
        self.viewport_offset = restored;
        if !self.items.is_empty() {
            self.highlight = Some(restored);
        }
    }

    /// Maps window-local coordinates (border included) to the rendered item
    /// under them.
    pub fn item_at(&self, line: u16, col: u16) -> Option<usize> {
        let row = line.checked_sub(1)?;
        let col = col.checked_sub(1)?;
        self.slots
            .iter()
            .find(|slot| {
                slot.row == row && col >= slot.col && col < slot.col.saturating_add(slot.width)
            })
            .map(|slot| slot.index)
    }

    /// Click-to-select; returns the newly highlighted index if the click
    /// landed on an item.
    pub fn select_at(&mut self, line: u16, col: u16) -> Option<usize> {
        let index = self.item_at(line, col)?;
        self.highlight = Some(index);
        Some(index)
    }

    /// Draws the panel frame and the current page of items, recording each
    /// item's slot. A dark panel clears the slots and draws nothing.
    pub fn render(
        &mut self,
        driver: &mut impl SurfaceDriver,
        registry: &WindowRegistry,
        focused: bool,
    ) -> io::Result<()> {
        let window = registry.get(self.panel);
        let Some(handle) = window.handle() else {
            self.slots.clear();
            return Ok(());
        };
        let rect = window.rect();
        if rect.width < 3 || rect.height < 3 {
            self.slots.clear();
            return Ok(());
        }
        let usable_lines = rect.height - 2;
        let usable_cols = rect.width - 2;
        let stride = self.effective_stride();

        self.follow_highlight(usable_lines, usable_cols, stride);
        self.slots =
            paginate(&self.items, self.viewport_offset, usable_lines, usable_cols, stride);

        driver.fill(handle, Style::default())?;
        let border = if focused { theme::panel_border_focused() } else { theme::panel_border() };
        let title =
            if focused { format!("{} (focus)", self.title) } else { self.title.clone() };
        draw_frame(driver, handle, rect, Some(&title), border, theme::panel_title())?;

        for slot in &self.slots {
            let label = entry_label(slot.index, &self.items[slot.index]);
            let style = if self.highlight == Some(slot.index) {
                theme::list_highlight()
            } else {
                theme::list_entry()
            };
            driver.write_text(handle, 1 + slot.row, 1 + slot.col, &label, style)?;
        }
        Ok(())
    }

    /// The configured stride, widened when a label would overlap the next
    /// column group.
    fn effective_stride(&self) -> u16 {
        COLUMN_STRIDE.max(self.widest_label.saturating_add(1))
    }

    /// Pulls the viewport to the highlighted item before a render pass, so
    /// keyboard selection walks across page boundaries. Backward moves
    /// restore recorded page starts; forward moves page ahead one rendered
    /// page at a time.
    fn follow_highlight(&mut self, usable_lines: u16, usable_cols: u16, stride: u16) {
        let Some(target) = self.highlight else {
            return;
        };
        while target < self.viewport_offset {
            self.viewport_offset = self.page_starts.pop().unwrap_or(0);
        }
        loop {
            let page =
                paginate(&self.items, self.viewport_offset, usable_lines, usable_cols, stride);
            if page.is_empty() || target < self.viewport_offset + page.len() {
                break;
            }
            self.page_starts.push(self.viewport_offset);
            self.viewport_offset += page.len();
        }
    }
}

/// Single-pass pagination: rows fill downward, wrap into a new column group
/// offset by `stride` when the height is exhausted, and the pass stops at
/// the first item whose label no longer fits the remaining width.
fn paginate(
    items: &[String],
    first: usize,
    usable_lines: u16,
    usable_cols: u16,
    stride: u16,
) -> Vec<ItemSlot> {
    let mut slots = Vec::new();
    if usable_lines == 0 || usable_cols == 0 {
        return slots;
    }
    let mut row: u16 = 0;
    let mut col: u16 = 0;
    for (index, item) in items.iter().enumerate().skip(first) {
        if row == usable_lines {
            row = 0;
            col = col.saturating_add(stride);
        }
        let width = label_width(index, item);
        if col.saturating_add(width) > usable_cols {
            break;
        }
        slots.push(ItemSlot { index, row, col, width });
        row += 1;
    }
    slots
}

/// 1-based numbering, zero-padded to two characters below 100.
fn entry_label(index: usize, item: &str) -> String {
    format!("{:02}. {}", index + 1, item)
}

fn label_width(index: usize, item: &str) -> u16 {
    entry_label(index, item).chars().count().min(usize::from(u16::MAX)) as u16
}
