//! Session wiring: the browse loop and the transient add-file state.
//!
//! States are mutually exclusive and entered in sequence. The browse loop
//! owns the registry for its whole life; entering the add-file state runs a
//! nested poll loop that places the prompt window, drives the editor, and
//! tears the prompt down on every exit path before control returns here.

use std::io;

use ratatui::style::Style;
use tracing::{debug, info, warn};

use crate::components::{EditOutcome, ListView, TextInput};
use crate::constants::PROMPT_PREFIX;
use crate::drivers::keyboard::KeyInput;
use crate::drivers::mouse::{PointerButton, PointerInput};
use crate::drivers::{InputDriver, InputEvent, SurfaceDriver};
use crate::event_loop::EventLoop;
use crate::layout;
use crate::state::{Focus, SessionState};
use crate::store::Catalog;
use crate::theme;
use crate::window::{PanelId, WindowRegistry, hit};

/// Cap on events handled per tick before a redraw is forced.
const EVENT_BURST_MAX: usize = 32;

/// Everything one interactive session owns: the window arena, the two list
/// views, the catalog, and the banner art handed in by the caller.
pub struct Session<C> {
    registry: WindowRegistry,
    files: ListView,
    themes: ListView,
    state: SessionState,
    catalog: C,
    banner_art: Vec<String>,
}

impl<C: Catalog> Session<C> {
    pub fn new(catalog: C, banner_art: Vec<String>) -> Self {
        let mut files = ListView::new(PanelId::Files, "files");
        files.set_items(catalog.files());
        let mut themes = ListView::new(PanelId::Themes, "themes");
        themes.set_items(catalog.themes());
        Self {
            registry: WindowRegistry::new(),
            files,
            themes,
            state: SessionState::new(),
            catalog,
            banner_art,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn files(&self) -> &ListView {
        &self.files
    }

    pub fn themes(&self) -> &ListView {
        &self.themes
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Relayouts when the terminal size no longer matches the root window.
    /// The root rect starts zeroed, so the first tick lays out through the
    /// same path as every later resize.
    fn check_resize(&mut self, surface: &mut impl SurfaceDriver) -> io::Result<()> {
        let screen = surface.size()?;
        if screen != self.registry.get(PanelId::Root).rect() {
            debug!(lines = screen.height, cols = screen.width, "terminal size changed");
            layout::layout_all(surface, &mut self.registry, screen)?;
            self.state.needs_redraw = true;
        }
        Ok(())
    }

    fn draw_all(&mut self, surface: &mut impl SurfaceDriver) -> io::Result<()> {
        self.draw_banner(surface)?;
        let focus = self.state.focus;
        self.files.render(surface, &self.registry, focus == Focus::Files)?;
        self.themes.render(surface, &self.registry, focus == Focus::Themes)?;
        self.draw_buttons(surface)?;
        surface.flush()
    }

    fn draw_banner(&mut self, surface: &mut impl SurfaceDriver) -> io::Result<()> {
        let window = self.registry.get(PanelId::Banner);
        let Some(handle) = window.handle() else {
            return Ok(());
        };
        surface.fill(handle, Style::default())?;
        let lines = window.rect().height as usize;
        for (line, art) in self.banner_art.iter().take(lines).enumerate() {
            surface.write_text(handle, line as u16, 0, art, theme::banner())?;
        }
        Ok(())
    }

    fn draw_buttons(&mut self, surface: &mut impl SurfaceDriver) -> io::Result<()> {
        for (id, label) in [(PanelId::FilesPrev, "<--"), (PanelId::FilesNext, "-->")] {
            if let Some(handle) = self.registry.get(id).handle() {
                surface.write_text(handle, 0, 0, label, theme::button())?;
            }
        }
        Ok(())
    }

    fn focused_list_mut(&mut self) -> &mut ListView {
        match self.state.focus {
            Focus::Files => &mut self.files,
            Focus::Themes => &mut self.themes,
        }
    }

    fn dispatch<S: SurfaceDriver, D: InputDriver>(
        &mut self,
        surface: &mut S,
        events: &mut EventLoop<D>,
        event: InputEvent,
    ) -> io::Result<()> {
        match event {
            // redraw hint; the authoritative relayout happens on the next
            // size poll
            InputEvent::Resize { .. } => self.state.needs_redraw = true,
            InputEvent::Key(key) => self.handle_browse_key(surface, events, key)?,
            InputEvent::Pointer(pointer) => self.handle_browse_click(pointer),
        }
        Ok(())
    }

    fn handle_browse_key<S: SurfaceDriver, D: InputDriver>(
        &mut self,
        surface: &mut S,
        events: &mut EventLoop<D>,
        key: KeyInput,
    ) -> io::Result<()> {
        match key {
            KeyInput::Char('q') | KeyInput::Escape => self.state.quit = true,
            KeyInput::Char('a') => self.begin_add_file(surface, events)?,
            KeyInput::Tab | KeyInput::BackTab => {
                self.state.focus = self.state.focus.toggled();
                self.state.needs_redraw = true;
            }
            KeyInput::Down => {
                self.focused_list_mut().select_next();
                self.state.needs_redraw = true;
            }
            KeyInput::Up => {
                self.focused_list_mut().select_prev();
                self.state.needs_redraw = true;
            }
            KeyInput::PageDown => {
                self.focused_list_mut().page_forward();
                self.state.needs_redraw = true;
            }
            KeyInput::PageUp => {
                self.focused_list_mut().page_back();
                self.state.needs_redraw = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_browse_click(&mut self, pointer: PointerInput) {
        if pointer.button != PointerButton::Left {
            return;
        }
        // a miss is not an error; in the browse state there is nothing to
        // leave, so the click is simply ignored
        let Some(target) = hit::resolve_target(&self.registry, pointer.line, pointer.column)
        else {
            return;
        };
        match target {
            PanelId::FilesPrev => self.files.page_back(),
            PanelId::FilesNext => self.files.page_forward(),
            PanelId::Files => {
                self.state.focus = Focus::Files;
                let rect = self.registry.get(PanelId::Files).rect();
                self.files.select_at(pointer.line - rect.y, pointer.column - rect.x);
            }
            PanelId::Themes => {
                self.state.focus = Focus::Themes;
                let rect = self.registry.get(PanelId::Themes).rect();
                self.themes.select_at(pointer.line - rect.y, pointer.column - rect.x);
            }
            // the prompt is never live in the browse state, and the banner
            // and root are not probe targets
            _ => {}
        }
        self.state.needs_redraw = true;
    }

    /// Opens the prompt, runs the nested edit loop, and tears the prompt
    /// down on every exit path. A committed name goes to the catalog; the
    /// file list is rebuilt from the catalog's snapshot on success.
    fn begin_add_file<S: SurfaceDriver, D: InputDriver>(
        &mut self,
        surface: &mut S,
        events: &mut EventLoop<D>,
    ) -> io::Result<()> {
        let screen = self.registry.get(PanelId::Root).rect();
        layout::place_prompt(surface, &mut self.registry, screen)?;
        if !self.registry.is_live(PanelId::Prompt) {
            debug!("screen too small for the add-file prompt");
            self.state.needs_redraw = true;
            return Ok(());
        }
        debug!("add-file prompt opened");
        let mut input = TextInput::new(PanelId::Prompt, "add file", PROMPT_PREFIX);
        surface.show_cursor(true)?;
        let outcome = self.run_add_file(surface, events, &mut input);
        surface.show_cursor(false)?;
        self.registry.destroy(surface, PanelId::Prompt)?;
        self.state.needs_redraw = true;

        if let EditOutcome::Committed(name) = outcome? {
            match self.catalog.add_file(name) {
                Ok(()) => {
                    self.files.set_items(self.catalog.files());
                    info!(count = self.files.items().len(), "file saved");
                }
                Err(err) => warn!(%err, "rejected file entry"),
            }
        }
        Ok(())
    }

    /// The add-file state loop. Exits on commit, cancel, outside click, or
    /// a detected resize; the caller owns prompt teardown.
    fn run_add_file<S: SurfaceDriver, D: InputDriver>(
        &mut self,
        surface: &mut S,
        events: &mut EventLoop<D>,
        input: &mut TextInput,
    ) -> io::Result<EditOutcome> {
        input.render(surface, &self.registry)?;
        surface.flush()?;
        loop {
            // a resize invalidates the prompt geometry; cancel and let the
            // browse loop relayout
            if surface.size()? != self.registry.get(PanelId::Root).rect() {
                debug!("resize during prompt; cancelling");
                return Ok(EditOutcome::Cancelled);
            }
            let Some(event) = events.poll()? else {
                continue;
            };
            match event {
                InputEvent::Resize { .. } => return Ok(EditOutcome::Cancelled),
                InputEvent::Pointer(pointer) => {
                    let target =
                        hit::resolve_target(&self.registry, pointer.line, pointer.column);
                    if target != Some(PanelId::Prompt) {
                        debug!("click outside the prompt; cancelling");
                        return Ok(EditOutcome::Cancelled);
                    }
                }
                InputEvent::Key(key) => {
                    let view =
                        self.registry.get(PanelId::Prompt).rect().width.saturating_sub(2);
                    match input.handle_key(key, view) {
                        EditOutcome::Editing => {
                            input.render(surface, &self.registry)?;
                            surface.flush()?;
                        }
                        done => return Ok(done),
                    }
                }
            }
        }
    }
}

/// Drives a session until quit: per tick, detect resize, redraw if needed,
/// then handle at most one burst of input.
pub fn run_session<C: Catalog, S: SurfaceDriver, D: InputDriver>(
    session: &mut Session<C>,
    surface: &mut S,
    events: &mut EventLoop<D>,
) -> io::Result<()> {
    info!("session started");
    while !session.state.quit {
        session.check_resize(surface)?;
        if session.state.needs_redraw {
            session.draw_all(surface)?;
            session.state.needs_redraw = false;
        }
        let Some(event) = events.poll()? else {
            continue;
        };
        session.dispatch(surface, events, event)?;
        let mut budget = EVENT_BURST_MAX - 1;
        while budget > 0 && !session.state.quit {
            let Some(event) = events.poll_ready()? else {
                break;
            };
            session.dispatch(surface, events, event)?;
            budget -= 1;
        }
    }
    session.registry.destroy_all(surface)?;
    surface.flush()?;
    info!("session ended");
    Ok(())
}
