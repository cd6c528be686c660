//! BMI Calculator Library
//!
//! A terminal Body Mass Index calculator: a two-field form that computes
//! BMI from height and weight and classifies it into a health category.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::{BmiCategory, BmiEngine, BmiReading};
pub use application::App;
