//! The window arena: single owner of every panel surface.

use std::io;

use ratatui::prelude::Rect;
use tracing::debug;

use crate::drivers::SurfaceDriver;

use super::{PanelId, Window};

/// Owns one [`Window`] per [`PanelId`] and brokers every surface create and
/// destroy. Nothing else holds a surface handle across ticks, so panel
/// teardown has exactly one code path.
#[derive(Debug)]
pub struct WindowRegistry {
    windows: [Window; PanelId::COUNT],
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self { windows: PanelId::ALL.map(Window::new) }
    }

    pub fn get(&self, id: PanelId) -> &Window {
        &self.windows[id.slot()]
    }

    pub fn is_live(&self, id: PanelId) -> bool {
        self.get(id).is_live()
    }

    /// Panels that currently own a surface, in declaration order.
    pub fn live_panels(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.windows.iter().filter(|window| window.is_live()).map(Window::id)
    }

    /// Materializes `id` at `rect`, replacing any surface it already owns.
    /// Replacement goes through [`destroy`](Self::destroy), so re-running a
    /// layout converges instead of leaking surfaces.
    pub fn create(
        &mut self,
        driver: &mut impl SurfaceDriver,
        id: PanelId,
        rect: Rect,
    ) -> io::Result<()> {
        self.destroy(driver, id)?;
        let handle = driver.create(rect)?;
        let window = &mut self.windows[id.slot()];
        window.handle = Some(handle);
        window.rect = rect;
        debug!(panel = id.name(), ?rect, "opened window");
        Ok(())
    }

    /// Releases `id`'s surface if it is live and zeroes its geometry; a
    /// dark panel is left alone. The layout engine records a fresh
    /// candidate rect afterwards via [`set_target`](Self::set_target).
    pub fn destroy(&mut self, driver: &mut impl SurfaceDriver, id: PanelId) -> io::Result<()> {
        let window = &mut self.windows[id.slot()];
        if let Some(handle) = window.handle.take() {
            debug!(panel = id.name(), "closing window");
            driver.destroy(handle)?;
            window.rect = Rect::default();
        }
        Ok(())
    }

    /// Records candidate geometry for a panel without materializing it.
    /// This is how an infeasible panel still tracks where it would go.
    pub fn set_target(&mut self, id: PanelId, rect: Rect) {
        self.windows[id.slot()].rect = rect;
    }

    /// Tears down every live surface. Runs at session exit and before a
    /// full relayout of a shrunk screen.
    pub fn destroy_all(&mut self, driver: &mut impl SurfaceDriver) -> io::Result<()> {
        for id in PanelId::ALL {
            self.destroy(driver, id)?;
        }
        Ok(())
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::drivers::memory::MemorySurfaceDriver;

    use super::*;

    #[test]
    fn create_materializes_and_records_geometry() {
        let mut driver = MemorySurfaceDriver::new(24, 80);
        let mut registry = WindowRegistry::new();
        let rect = Rect::new(2, 1, 30, 10);

        registry.create(&mut driver, PanelId::Files, rect).unwrap();

        assert!(registry.is_live(PanelId::Files));
        assert_eq!(registry.get(PanelId::Files).rect(), rect);
        assert_eq!(driver.live_surfaces(), 1);
    }

    #[test]
    fn recreate_releases_the_previous_surface() {
        let mut driver = MemorySurfaceDriver::new(24, 80);
        let mut registry = WindowRegistry::new();

        registry.create(&mut driver, PanelId::Files, Rect::new(0, 0, 10, 5)).unwrap();
        let first = registry.get(PanelId::Files).handle();
        registry.create(&mut driver, PanelId::Files, Rect::new(0, 0, 20, 8)).unwrap();

        assert_ne!(registry.get(PanelId::Files).handle(), first);
        assert_eq!(driver.live_surfaces(), 1);
    }

    #[test]
    fn destroy_is_a_no_op_for_a_dark_panel() {
        let mut driver = MemorySurfaceDriver::new(24, 80);
        let mut registry = WindowRegistry::new();

        registry.destroy(&mut driver, PanelId::Prompt).unwrap();
        registry.destroy(&mut driver, PanelId::Prompt).unwrap();

        assert!(!registry.is_live(PanelId::Prompt));
    }

    #[test]
    fn set_target_records_geometry_without_a_surface() {
        let mut driver = MemorySurfaceDriver::new(24, 80);
        let mut registry = WindowRegistry::new();
        let candidate = Rect::new(0, 6, 44, 3);

        registry.set_target(PanelId::Themes, candidate);

        assert!(!registry.is_live(PanelId::Themes));
        assert_eq!(registry.get(PanelId::Themes).rect(), candidate);
        assert_eq!(driver.live_surfaces(), 0);
    }

    #[test]
    fn destroy_all_sweeps_every_live_panel() {
        let mut driver = MemorySurfaceDriver::new(24, 80);
        let mut registry = WindowRegistry::new();
        registry.create(&mut driver, PanelId::Banner, Rect::new(0, 0, 80, 6)).unwrap();
        registry.create(&mut driver, PanelId::Files, Rect::new(0, 6, 44, 12)).unwrap();

        registry.destroy_all(&mut driver).unwrap();

        assert_eq!(registry.live_panels().count(), 0);
        assert_eq!(driver.live_surfaces(), 0);
        assert_eq!(registry.get(PanelId::Files).rect(), Rect::default());
    }
}
