//! Terminal collaborator seams.
//!
//! The engine core never talks to a real terminal directly. Input arrives
//! through [`InputDriver`] as already-decoded [`InputEvent`]s, and every
//! painted cell goes out through [`SurfaceDriver`]. The console drivers wire
//! these to crossterm; [`memory::MemorySurfaceDriver`] backs tests and the
//! bench harness with the same contract.

pub mod console;
pub mod keyboard;
pub mod memory;
pub mod mouse;

use std::io;
use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::Style;

use keyboard::KeyInput;
use mouse::PointerInput;

/// Opaque identity of one allocated terminal surface.
///
/// Minted by [`SurfaceDriver::create`] and retired by
/// [`SurfaceDriver::destroy`]; the window registry is the only long-term
/// holder. A handle says nothing about geometry, which the registry tracks
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SurfaceHandle(u32);

impl SurfaceHandle {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }
}

/// Decoded input fed to the state loops.
///
/// Escape-sequence parsing and event filtering stay inside the drivers; the
/// core only ever sees this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    Pointer(PointerInput),
    /// Size report from the backend. Treated as a redraw hint only; the
    /// authoritative resize check is the per-tick size comparison in the
    /// session loop.
    Resize { lines: u16, cols: u16 },
}

/// Source of decoded terminal input.
pub trait InputDriver {
    /// Returns `true` when at least one raw event is ready within `timeout`.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Reads one pending raw event. `None` means the event normalized to
    /// nothing the engine reacts to (key release, pointer drag); callers
    /// just continue their loop.
    fn read(&mut self) -> io::Result<Option<InputEvent>>;

    /// Enables or disables pointer reporting. Drivers without a pointer
    /// source ignore this.
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Option<InputEvent>> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

/// Allocation and drawing of rectangular terminal surfaces.
///
/// Surface-local coordinates are `(line, col)` with the origin at the
/// surface's top-left cell. Writes that start outside the surface are
/// dropped and writes that overrun the right edge are clipped, so renderers
/// can paint without re-checking bounds.
///
/// Handle misuse, destroying or drawing through a handle that is not live,
/// is a programming error and panics. Only real terminal I/O surfaces as
/// [`io::Error`].
pub trait SurfaceDriver {
    /// Current terminal size as a rect anchored at the origin.
    fn size(&mut self) -> io::Result<Rect>;

    /// Allocates a surface covering `rect` in screen coordinates.
    fn create(&mut self, rect: Rect) -> io::Result<SurfaceHandle>;

    /// Retires `handle` and blanks the cells it covered.
    fn destroy(&mut self, handle: SurfaceHandle) -> io::Result<()>;

    /// Writes `text` at a surface-local position, clipped to the surface.
    fn write_text(
        &mut self,
        handle: SurfaceHandle,
        line: u16,
        col: u16,
        text: &str,
        style: Style,
    ) -> io::Result<()>;

    /// Blanks the whole surface with `style`.
    fn fill(&mut self, handle: SurfaceHandle, style: Style) -> io::Result<()>;

    /// Parks the terminal caret at a surface-local position. Applied on the
    /// next [`flush`](Self::flush).
    fn set_cursor(&mut self, handle: SurfaceHandle, line: u16, col: u16) -> io::Result<()>;

    fn show_cursor(&mut self, visible: bool) -> io::Result<()>;

    /// Pushes all queued drawing to the backend in one burst.
    fn flush(&mut self) -> io::Result<()>;
}

impl<T: SurfaceDriver + ?Sized> SurfaceDriver for &mut T {
    fn size(&mut self) -> io::Result<Rect> {
        (**self).size()
    }

    fn create(&mut self, rect: Rect) -> io::Result<SurfaceHandle> {
        (**self).create(rect)
    }

    fn destroy(&mut self, handle: SurfaceHandle) -> io::Result<()> {
        (**self).destroy(handle)
    }

    fn write_text(
        &mut self,
        handle: SurfaceHandle,
        line: u16,
        col: u16,
        text: &str,
        style: Style,
    ) -> io::Result<()> {
        (**self).write_text(handle, line, col, text, style)
    }

    fn fill(&mut self, handle: SurfaceHandle, style: Style) -> io::Result<()> {
        (**self).fill(handle, style)
    }

    fn set_cursor(&mut self, handle: SurfaceHandle, line: u16, col: u16) -> io::Result<()> {
        (**self).set_cursor(handle, line, col)
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        (**self).show_cursor(visible)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
