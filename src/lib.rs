//! Terminal window layout and input-dispatch engine behind a character-cell
//! browser for saved files and color themes.
//!
//! The core pieces: a [`window::WindowRegistry`] arena owning every panel
//! surface, a [`layout`] engine that recomputes geometry with
//! delete/recreate hysteresis on resize, a hit tester mapping pointer
//! presses to panels, a paginating [`components::ListView`], and a
//! [`components::TextInput`] prompt editor. Terminal access is behind the
//! [`drivers`] traits, so the whole engine also runs against an in-memory
//! driver in tests and benches.

pub mod components;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod layout;
pub mod runner;
pub mod state;
pub mod store;
pub mod theme;
pub mod tracing_sub;
pub mod window;
