//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the form with ratatui and maps crossterm key events
//! onto form operations.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
