//! Tracing subscriber setup.
//!
//! The session owns the terminal screen, so log output must never reach
//! stdout. The binary routes logs to a file when asked; headless tools and
//! tests use the stderr variant. Both are safe to call more than once.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Compact subscriber writing to stderr. Used by headless runs where the
/// alternate screen is not in play.
pub fn init_default() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}

/// Compact subscriber appending to `path`, keeping the interactive screen
/// clean.
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
