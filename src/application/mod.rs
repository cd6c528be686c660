//! Application layer managing form state and submission workflows.
//!
//! This module sits between the BMI engine in the domain layer and the
//! terminal front end, owning the single form instance and its transitions.

pub mod state;
pub mod headless;
pub mod errors;

pub use state::*;
pub use headless::*;
pub use errors::*;
