use ratatui::prelude::Rect;

use themedeck::drivers::memory::MemorySurfaceDriver;
use themedeck::layout;
use themedeck::window::{PanelId, WindowRegistry};

fn screen(lines: u16, cols: u16) -> Rect {
    Rect::new(0, 0, cols, lines)
}

fn layout_at(
    driver: &mut MemorySurfaceDriver,
    registry: &mut WindowRegistry,
    lines: u16,
    cols: u16,
) {
    driver.set_size(lines, cols);
    layout::layout_all(driver, registry, screen(lines, cols)).unwrap();
}

fn geometry(registry: &WindowRegistry) -> Vec<(PanelId, bool, Rect)> {
    PanelId::ALL
        .into_iter()
        .map(|id| (id, registry.is_live(id), registry.get(id).rect()))
        .collect()
}

#[test]
fn shrink_drops_the_file_panel_and_regrow_restores_it() {
    let mut driver = MemorySurfaceDriver::new(40, 120);
    let mut registry = WindowRegistry::new();

    layout_at(&mut driver, &mut registry, 40, 120);
    let comfortable = geometry(&registry);
    assert!(registry.is_live(PanelId::Files));
    assert_eq!(registry.get(PanelId::Files).rect(), Rect::new(0, 6, 94, 17));

    layout_at(&mut driver, &mut registry, 6, 40);
    assert!(!registry.is_live(PanelId::Files));
    assert!(!registry.is_live(PanelId::Themes));
    assert!(!registry.is_live(PanelId::FilesPrev));
    assert!(!registry.is_live(PanelId::FilesNext));
    // the banner alone still fits a 6-line, 40-column terminal
    assert!(registry.is_live(PanelId::Banner));

    layout_at(&mut driver, &mut registry, 40, 120);
    assert_eq!(geometry(&registry), comfortable);
}

#[test]
fn intermediate_sizes_do_not_poison_the_restore() {
    let mut driver = MemorySurfaceDriver::new(40, 120);
    let mut registry = WindowRegistry::new();

    layout_at(&mut driver, &mut registry, 40, 120);
    let comfortable = geometry(&registry);

    for (lines, cols) in [(30, 100), (12, 50), (6, 40), (3, 10), (40, 60)] {
        layout_at(&mut driver, &mut registry, lines, cols);
    }
    layout_at(&mut driver, &mut registry, 40, 120);

    assert_eq!(geometry(&registry), comfortable);
}

#[test]
fn surface_count_tracks_live_panels_across_the_walk() {
    let mut driver = MemorySurfaceDriver::new(40, 120);
    let mut registry = WindowRegistry::new();

    for (lines, cols) in [(40, 120), (6, 40), (40, 60), (10, 10), (40, 120)] {
        layout_at(&mut driver, &mut registry, lines, cols);
        assert_eq!(
            driver.live_surfaces(),
            registry.live_panels().count(),
            "stray surfaces at {lines}x{cols}"
        );
    }
}

#[test]
fn dark_panels_keep_fresh_candidates() {
    let mut driver = MemorySurfaceDriver::new(6, 40);
    let mut registry = WindowRegistry::new();

    layout_at(&mut driver, &mut registry, 6, 40);

    // the file panel is dark yet its candidate tracks the current screen,
    // and the arrows position against that candidate
    let files = registry.get(PanelId::Files);
    assert!(!files.is_live());
    assert_eq!(files.rect(), Rect::new(0, 6, 14, 0));
    assert_eq!(registry.get(PanelId::FilesPrev).rect(), Rect::new(2, 5, 3, 1));
    assert_eq!(registry.get(PanelId::FilesNext).rect(), Rect::new(9, 5, 3, 1));
}

#[test]
fn growing_from_a_tiny_start_materializes_the_full_deck() {
    let mut driver = MemorySurfaceDriver::new(4, 16);
    let mut registry = WindowRegistry::new();

    layout_at(&mut driver, &mut registry, 4, 16);
    assert_eq!(registry.live_panels().count(), 0);

    layout_at(&mut driver, &mut registry, 40, 120);
    let live: Vec<PanelId> = registry.live_panels().collect();
    assert_eq!(
        live,
        [PanelId::Banner, PanelId::Files, PanelId::Themes, PanelId::FilesPrev, PanelId::FilesNext]
    );
}

#[test]
fn root_records_the_screen_without_materializing() {
    let mut driver = MemorySurfaceDriver::new(40, 120);
    let mut registry = WindowRegistry::new();

    layout_at(&mut driver, &mut registry, 40, 120);
    assert!(!registry.is_live(PanelId::Root));
    assert_eq!(registry.get(PanelId::Root).rect(), screen(40, 120));

    layout_at(&mut driver, &mut registry, 12, 50);
    assert_eq!(registry.get(PanelId::Root).rect(), screen(12, 50));
}
