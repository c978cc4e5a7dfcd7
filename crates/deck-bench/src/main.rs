use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use ratatui::prelude::Rect;

use themedeck::components::ListView;
use themedeck::drivers::memory::MemorySurfaceDriver;
use themedeck::layout;
use themedeck::tracing_sub;
use themedeck::window::{PanelId, WindowRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "deck-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Layout/render stress bench driving the engine across random terminal sizes"
)]
struct BenchCli {
    /// Number of resize+render passes to run.
    #[arg(short = 'p', long = "passes", value_name = "COUNT", default_value_t = 10_000)]
    passes: u32,

    /// Seed for the pseudo-random size walk, for repeatable runs.
    #[arg(short = 's', long = "seed", value_name = "SEED", default_value_t = 0x5DEECE66D)]
    seed: u64,

    /// Items seeded into each list.
    #[arg(short = 'i', long = "items", value_name = "COUNT", default_value_t = 250)]
    items: usize,

    /// Log window lifecycle events to stderr while the bench runs.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Linear congruential step (Knuth's MMIX constants); deterministic across
/// runs for a fixed seed.
fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

fn main() -> io::Result<()> {
    let cli = BenchCli::parse();
    if cli.verbose {
        tracing_sub::init_default();
    }

    let mut driver = MemorySurfaceDriver::new(40, 120);
    let mut registry = WindowRegistry::new();
    let mut files = ListView::new(PanelId::Files, "files");
    files.set_items((0..cli.items).map(|n| format!("file-{n:04}.txt")).collect());
    let mut themes = ListView::new(PanelId::Themes, "themes");
    themes.set_items((0..cli.items).map(|n| format!("theme-{n:03}")).collect());

    let mut state = cli.seed;
    let mut layout_time = Duration::ZERO;
    let mut render_time = Duration::ZERO;
    let mut live_total: u64 = 0;
    let started = Instant::now();

    for _ in 0..cli.passes {
        // walk sizes from well below the feasibility thresholds to well
        // above them so both hysteresis directions get exercised
        let lines = 4 + (lcg_next(&mut state) % 76) as u16;
        let cols = 10 + (lcg_next(&mut state) % 190) as u16;
        driver.set_size(lines, cols);

        let pass = Instant::now();
        layout::layout_all(&mut driver, &mut registry, Rect::new(0, 0, cols, lines))?;
        layout_time += pass.elapsed();

        let pass = Instant::now();
        files.render(&mut driver, &registry, true)?;
        themes.render(&mut driver, &registry, false)?;
        render_time += pass.elapsed();

        live_total += registry.live_panels().count() as u64;
    }

    let elapsed = started.elapsed();
    let per_pass = |total: Duration| total.as_secs_f64() * 1e6 / f64::from(cli.passes.max(1));
    println!(
        "deck-bench: {} passes, {} items/list, {:.3}s total",
        cli.passes,
        cli.items,
        elapsed.as_secs_f64()
    );
    println!("  layout: {:.3}s ({:.2}us/pass)", layout_time.as_secs_f64(), per_pass(layout_time));
    println!("  render: {:.3}s ({:.2}us/pass)", render_time.as_secs_f64(), per_pass(render_time));
    println!("  avg live panels: {:.2}", live_total as f64 / f64::from(cli.passes.max(1)));
    Ok(())
}
