//! In-memory surface driver backing tests and the bench harness.

use std::collections::BTreeMap;
use std::io;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::{SurfaceDriver, SurfaceHandle};

/// One simulated surface: its screen rect plus a cell buffer in
/// surface-local coordinates.
#[derive(Debug)]
pub struct MemorySurface {
    rect: Rect,
    buffer: Buffer,
}

impl MemorySurface {
    fn new(rect: Rect) -> Self {
        let local = Rect::new(0, 0, rect.width, rect.height);
        Self { rect, buffer: Buffer::empty(local) }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Text content of one surface-local row, trailing blanks included.
    pub fn row_text(&self, line: u16) -> String {
        (0..self.rect.width)
            .filter_map(|col| self.buffer.cell((col, line)))
            .map(|cell| cell.symbol())
            .collect()
    }

    pub fn style_at(&self, line: u16, col: u16) -> Option<Style> {
        self.buffer.cell((col, line)).map(|cell| cell.style())
    }
}

/// Surface driver that draws into per-surface buffers instead of a live
/// terminal. Resizes are simulated with [`set_size`](Self::set_size).
///
/// Shares the console driver's failure contract: a destroy or write through
/// a handle that is not live panics.
#[derive(Debug)]
pub struct MemorySurfaceDriver {
    screen: Rect,
    next_raw: u32,
    surfaces: BTreeMap<SurfaceHandle, MemorySurface>,
    cursor: Option<(SurfaceHandle, u16, u16)>,
    cursor_visible: bool,
    flushes: usize,
}

impl MemorySurfaceDriver {
    pub fn new(lines: u16, cols: u16) -> Self {
        Self {
            screen: Rect::new(0, 0, cols, lines),
            next_raw: 1,
            surfaces: BTreeMap::new(),
            cursor: None,
            cursor_visible: false,
            flushes: 0,
        }
    }

    /// Pretends the terminal was resized. The session loop picks this up on
    /// its next size poll.
    pub fn set_size(&mut self, lines: u16, cols: u16) {
        self.screen = Rect::new(0, 0, cols, lines);
    }

    pub fn live_surfaces(&self) -> usize {
        self.surfaces.len()
    }

    pub fn surface(&self, handle: SurfaceHandle) -> Option<&MemorySurface> {
        self.surfaces.get(&handle)
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Surface-local cursor position, if one was parked.
    pub fn cursor(&self) -> Option<(SurfaceHandle, u16, u16)> {
        self.cursor
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    fn surface_mut(&mut self, handle: SurfaceHandle) -> &mut MemorySurface {
        self.surfaces
            .get_mut(&handle)
            .unwrap_or_else(|| panic!("surface {handle:?} is not live"))
    }
}

impl SurfaceDriver for MemorySurfaceDriver {
    fn size(&mut self) -> io::Result<Rect> {
        Ok(self.screen)
    }

    fn create(&mut self, rect: Rect) -> io::Result<SurfaceHandle> {
        let handle = SurfaceHandle::new(self.next_raw);
        self.next_raw += 1;
        self.surfaces.insert(handle, MemorySurface::new(rect));
        Ok(handle)
    }

    fn destroy(&mut self, handle: SurfaceHandle) -> io::Result<()> {
        if self.surfaces.remove(&handle).is_none() {
            panic!("surface {handle:?} destroyed twice or never created");
        }
        if matches!(self.cursor, Some((parked, _, _)) if parked == handle) {
            self.cursor = None;
        }
        Ok(())
    }

    fn write_text(
        &mut self,
        handle: SurfaceHandle,
        line: u16,
        col: u16,
        text: &str,
        style: Style,
    ) -> io::Result<()> {
        let surface = self.surface_mut(handle);
        if line >= surface.rect.height || col >= surface.rect.width {
            return Ok(());
        }
        let available = (surface.rect.width - col) as usize;
        let clipped: String = text.chars().take(available).collect();
        surface.buffer.set_string(col, line, clipped, style);
        Ok(())
    }

    fn fill(&mut self, handle: SurfaceHandle, style: Style) -> io::Result<()> {
        let surface = self.surface_mut(handle);
        for line in 0..surface.rect.height {
            for col in 0..surface.rect.width {
                if let Some(cell) = surface.buffer.cell_mut((col, line)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
        Ok(())
    }

    fn set_cursor(&mut self, handle: SurfaceHandle, line: u16, col: u16) -> io::Result<()> {
        self.surface_mut(handle);
        self.cursor = Some((handle, line, col));
        Ok(())
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
