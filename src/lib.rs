//! mdpeek - browse a directory and read markdown files in the terminal
//!
//! The library holds the browser, the page controller and its event loop so
//! the binary and the integration tests share one implementation.

pub mod browser;
pub mod logging;
pub mod ui;
