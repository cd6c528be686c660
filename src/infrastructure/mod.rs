//! Infrastructure layer providing process-level integrations.
//!
//! This module contains command-line configuration and log output setup,
//! the only concerns that reach outside the form itself.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
