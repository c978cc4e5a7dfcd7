//! Shared crate-wide constants.

/// Rows reserved at the top of the screen for the banner window. The file
/// and theme panels always start below this margin, whether or not the
/// banner itself is materialized.
pub const BANNER_LINES: u16 = 6;

/// Minimum width before the banner window is worth materializing.
pub const BANNER_MIN_COLS: u16 = 20;

/// Columns of padding between the file panel and the theme panel.
pub const PANEL_GAP: u16 = 2;

/// Feasibility thresholds for the file panel. Below either bound the panel
/// is dropped entirely rather than drawn truncated.
pub const FILE_PANEL_MIN_LINES: u16 = 10;
pub const FILE_PANEL_MIN_COLS: u16 = 44;

/// Feasibility thresholds for the theme panel.
pub const THEME_PANEL_MIN_LINES: u16 = 8;

/// The theme panel is a fixed-width column on the right edge; this is both
/// its rendered width and its feasibility threshold.
pub const THEME_PANEL_COLS: u16 = 24;

/// Width of one paging arrow button, label included.
pub const ARROW_COLS: u16 = 3;

/// Columns between a panel corner and the arrow button sitting on its
/// bottom border.
pub const ARROW_INSET: u16 = 2;

/// Horizontal cell advance between column groups when a list wraps past the
/// bottom of its viewport.
///
/// Units: terminal columns. The paginator validates this against the widest
/// `label + entry` it is asked to render; see
/// [`crate::components::list_view::ListView::set_items`].
pub const COLUMN_STRIDE: u16 = 36;

/// Geometry of the text-entry popup.
pub const PROMPT_LINES: u16 = 3;
pub const PROMPT_MIN_COLS: u16 = 24;
pub const PROMPT_MAX_COLS: u16 = 64;

/// Fixed, non-editable lead-in for the text-entry popup. Backspace and the
/// left arrow never cross into it.
pub const PROMPT_PREFIX: &str = "> ";

/// Default pause between event-loop iterations, in milliseconds. Polling
/// with this timeout doubles as the sleep that paces the cooperative loop.
pub const DEFAULT_TICK_MS: u64 = 25;
