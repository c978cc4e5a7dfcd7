//! Live-terminal drivers built on crossterm.
//!
//! Drawing is queued per surface write and pushed out in one burst on
//! [`SurfaceDriver::flush`], so a full redraw reaches the terminal as a
//! single update instead of a visible paint-over.

use std::collections::BTreeMap;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{
    Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use super::keyboard::KeyboardNormalizer;
use super::{InputDriver, InputEvent, SurfaceDriver, SurfaceHandle};

/// Input driver reading from the process's controlling terminal.
#[derive(Debug, Default)]
pub struct ConsoleInputDriver {
    normalizer: KeyboardNormalizer,
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Option<InputEvent>> {
        let raw = event::read()?;
        Ok(self.normalizer.normalize(raw))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Surface driver writing to the real terminal through crossterm.
///
/// Surfaces are tracked as screen rects; writes are translated to absolute
/// cursor moves. [`enter`](Self::enter) switches to the alternate screen
/// and raw mode, and `Drop` restores the terminal even on panic unwind.
#[derive(Debug)]
pub struct ConsoleSurfaceDriver {
    stdout: Stdout,
    surfaces: BTreeMap<SurfaceHandle, Rect>,
    next_raw: u32,
    pending_cursor: Option<(u16, u16)>,
    entered: bool,
}

impl ConsoleSurfaceDriver {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            surfaces: BTreeMap::new(),
            next_raw: 1,
            pending_cursor: None,
            entered: false,
        }
    }

    pub fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide)?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(self.stdout, DisableMouseCapture, LeaveAlternateScreen)?;
        execute!(self.stdout, cursor::Show)?;
        self.entered = false;
        Ok(())
    }

    fn rect_of(&self, handle: SurfaceHandle) -> Rect {
        *self
            .surfaces
            .get(&handle)
            .unwrap_or_else(|| panic!("surface {handle:?} is not live"))
    }

    fn blank_region(&mut self, rect: Rect) -> io::Result<()> {
        let blanks = " ".repeat(rect.width as usize);
        for line in 0..rect.height {
            queue!(
                self.stdout,
                MoveTo(rect.x, rect.y + line),
                SetAttribute(Attribute::Reset),
                Print(&blanks)
            )?;
        }
        Ok(())
    }
}

impl Default for ConsoleSurfaceDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceDriver for ConsoleSurfaceDriver {
    fn size(&mut self) -> io::Result<Rect> {
        let (cols, lines) = terminal::size()?;
        Ok(Rect::new(0, 0, cols, lines))
    }

    fn create(&mut self, rect: Rect) -> io::Result<SurfaceHandle> {
        let handle = SurfaceHandle::new(self.next_raw);
        self.next_raw += 1;
        self.surfaces.insert(handle, rect);
        self.blank_region(rect)?;
        Ok(handle)
    }

    fn destroy(&mut self, handle: SurfaceHandle) -> io::Result<()> {
        let rect = self
            .surfaces
            .remove(&handle)
            .unwrap_or_else(|| panic!("surface {handle:?} destroyed twice or never created"));
        self.blank_region(rect)
    }

    fn write_text(
        &mut self,
        handle: SurfaceHandle,
        line: u16,
        col: u16,
        text: &str,
        style: Style,
    ) -> io::Result<()> {
        let rect = self.rect_of(handle);
        if line >= rect.height || col >= rect.width {
            return Ok(());
        }
        let available = (rect.width - col) as usize;
        let clipped: String = text.chars().take(available).collect();
        queue!(self.stdout, MoveTo(rect.x + col, rect.y + line))?;
        queue_style(&mut self.stdout, style)?;
        queue!(self.stdout, Print(clipped), SetAttribute(Attribute::Reset))
    }

    fn fill(&mut self, handle: SurfaceHandle, style: Style) -> io::Result<()> {
        let rect = self.rect_of(handle);
        let blanks = " ".repeat(rect.width as usize);
        for line in 0..rect.height {
            queue!(self.stdout, MoveTo(rect.x, rect.y + line))?;
            queue_style(&mut self.stdout, style)?;
            queue!(self.stdout, Print(&blanks), SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn set_cursor(&mut self, handle: SurfaceHandle, line: u16, col: u16) -> io::Result<()> {
        let rect = self.rect_of(handle);
        self.pending_cursor = Some((rect.x + col, rect.y + line));
        Ok(())
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.stdout, cursor::Show)
        } else {
            queue!(self.stdout, cursor::Hide)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some((x, y)) = self.pending_cursor {
            queue!(self.stdout, MoveTo(x, y))?;
        }
        self.stdout.flush()
    }
}

impl Drop for ConsoleSurfaceDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

fn queue_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(map_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(map_color(bg)))?;
    }
    let flags = style.add_modifier;
    if flags.contains(Modifier::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if flags.contains(Modifier::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if flags.contains(Modifier::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if flags.contains(Modifier::UNDERLINED) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if flags.contains(Modifier::REVERSED) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn map_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Ct;
    match color {
        Color::Reset => Ct::Reset,
        Color::Black => Ct::Black,
        Color::Red => Ct::DarkRed,
        Color::Green => Ct::DarkGreen,
        Color::Yellow => Ct::DarkYellow,
        Color::Blue => Ct::DarkBlue,
        Color::Magenta => Ct::DarkMagenta,
        Color::Cyan => Ct::DarkCyan,
        Color::Gray => Ct::Grey,
        Color::DarkGray => Ct::DarkGrey,
        Color::LightRed => Ct::Red,
        Color::LightGreen => Ct::Green,
        Color::LightYellow => Ct::Yellow,
        Color::LightBlue => Ct::Blue,
        Color::LightMagenta => Ct::Magenta,
        Color::LightCyan => Ct::Cyan,
        Color::White => Ct::White,
        Color::Rgb(r, g, b) => Ct::Rgb { r, g, b },
        Color::Indexed(value) => Ct::AnsiValue(value),
    }
}
