use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;

use themedeck::constants::DEFAULT_TICK_MS;
use themedeck::drivers::InputDriver;
use themedeck::drivers::console::{ConsoleInputDriver, ConsoleSurfaceDriver};
use themedeck::event_loop::EventLoop;
use themedeck::runner::{Session, run_session};
use themedeck::store::MemoryCatalog;
use themedeck::tracing_sub;

const BANNER_ART: &str = indoc! {r"
     _   _                        _           _
    | |_| |__   ___ _ __ ___   __| | ___  ___| | __
    | __| '_ \ / _ \ '_ ` _ \ / _` |/ _ \/ __| |/ /
    | |_| | | |  __/ | | | | | (_| |  __/ (__|   <
     \__|_| |_|\___|_| |_| |_|\__,_|\___|\___|_|\_\
      q quit   a add file   tab focus   click to pick
"};

const DEMO_FILES: [&str; 12] = [
    "notes/today.md",
    "notes/reading-list.md",
    "projects/deck/README.md",
    "projects/deck/roadmap.md",
    "recipes/flatbread.txt",
    "recipes/daal.txt",
    "dotfiles/bashrc",
    "dotfiles/vimrc",
    "journal/2026-08.md",
    "journal/2026-07.md",
    "scratch/ideas.txt",
    "scratch/links.txt",
];

const DEMO_THEMES: [&str; 10] = [
    "gruvbox-dark",
    "gruvbox-light",
    "solarized-dark",
    "solarized-light",
    "nord",
    "dracula",
    "monokai",
    "tokyonight",
    "one-dark",
    "zenburn",
];

#[derive(Parser, Debug)]
#[command(
    name = "themedeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Character-cell dashboard for browsing saved files and terminal color themes"
)]
struct Cli {
    /// Poll interval for the session loop, in milliseconds.
    #[arg(short = 't', long = "tick", value_name = "MS", default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Write debug logs to this file; without it logs are discarded so the
    /// screen stays clean.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Seed the file list (repeatable). Defaults to a demo set.
    #[arg(long = "file", value_name = "NAME")]
    files: Vec<String>,

    /// Seed the theme list (repeatable). Defaults to a demo set.
    #[arg(long = "theme", value_name = "NAME")]
    themes: Vec<String>,
}

impl Cli {
    fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.clamp(5, 1000))
    }

    fn seed_files(&self) -> Vec<String> {
        if self.files.is_empty() {
            DEMO_FILES.map(str::to_string).to_vec()
        } else {
            self.files.clone()
        }
    }

    fn seed_themes(&self) -> Vec<String> {
        if self.themes.is_empty() {
            DEMO_THEMES.map(str::to_string).to_vec()
        } else {
            self.themes.clone()
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        tracing_sub::init_file(path)?;
    }

    let catalog = MemoryCatalog::new(cli.seed_files(), cli.seed_themes());
    let banner = BANNER_ART.lines().map(str::to_string).collect();
    let mut session = Session::new(catalog, banner);

    let mut surface = ConsoleSurfaceDriver::new();
    surface.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;
    let mut events = EventLoop::new(input, cli.tick());

    let result = run_session(&mut session, &mut surface, &mut events);

    surface.exit()?;
    result
}
