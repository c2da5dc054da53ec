//! # UI Module
//!
//! Terminal user interface for mdpeek.
//!
//! ## Components
//!
//! - [`App`] - Page controller: browsing vs. viewing, selection, notices
//! - [`viewport`] - Scrollable window over the loaded file
//! - [`notifier`] - Auto-expiring error notice
//! - [`events`] - Event and effect types, terminal input, timers
//! - [`runtime`] - The single-consumer event loop
//! - [`mod@render`] - Drawing the current page
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                                              │
//! │          ┌──── a.md ──────────┐              │
//! │          │  # Title           │              │
//! │          │  ...               │   padding    │
//! │          │                42% │              │
//! │          └────────────────────┘              │
//! │                                              │
//! ├──────────────────────────────────────────────┤
//! │ Footer (key hints)                           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The panel is 40% of the terminal width; its text area is the terminal
//! height minus twice the padding.

pub mod app;
pub mod config;
pub mod events;
pub mod notifier;
pub mod render;
pub mod runtime;
pub mod theme;
pub mod viewport;

pub use app::App;
pub use render::render;
