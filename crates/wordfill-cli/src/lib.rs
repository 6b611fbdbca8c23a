//! wordfill CLI Library
//!
//! Terminal host for the autocomplete input widget.
//! Provides both TUI (ratatui) and headless modes.

pub mod app;
pub mod headless;
pub mod source;
pub mod tui;
pub mod ui;
