//! BMI computation and field constraint services.
//!
//! The engine is deliberately unguarded: a zero height divides by zero and
//! negative inputs are used as given. Constraint checks live in a separate
//! validator that callers may choose to apply before computing.

use super::errors::{ConstraintResult, ConstraintViolation};
use super::models::{BmiCategory, BmiReading, NumericField};
use super::numeric::try_parse_numeric;

/// Lower bounds of every category above `Underweight`, in ascending order.
pub const CATEGORY_THRESHOLDS: [(f64, BmiCategory); 5] = [
    (18.5, BmiCategory::Normal),
    (25.0, BmiCategory::Overweight),
    (30.0, BmiCategory::Obesity),
    (35.0, BmiCategory::ObesityClass2),
    (40.0, BmiCategory::ObesityClass3),
];

/// Step every submitted value must be a multiple of.
pub const FIELD_STEP: f64 = 0.01;

/// Pure BMI arithmetic and classification.
///
/// # Examples
///
/// ```
/// use bmi_calc::domain::{BmiCategory, BmiEngine};
///
/// let reading = BmiEngine::evaluate(1.8, 70.0);
/// assert_eq!(reading.category, BmiCategory::Normal);
/// assert!((reading.bmi - 21.6049).abs() < 1e-4);
/// ```
pub struct BmiEngine;

impl BmiEngine {
    /// Returns `weight / height²`.
    ///
    /// A zero height yields an infinite or NaN result rather than an error.
    pub fn compute_bmi(height: f64, weight: f64) -> f64 {
        weight / (height * height)
    }

    /// Maps a BMI onto its category using half-open bands.
    ///
    /// Each boundary belongs to the higher band. Values that fail every
    /// "less than" test, including NaN and positive infinity, land in the
    /// top band.
    pub fn classify(bmi: f64) -> BmiCategory {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::Obesity
        } else if bmi < 40.0 {
            BmiCategory::ObesityClass2
        } else {
            BmiCategory::ObesityClass3
        }
    }

    /// Computes and classifies in one step.
    pub fn evaluate(height: f64, weight: f64) -> BmiReading {
        let bmi = Self::compute_bmi(height, weight);
        BmiReading {
            bmi,
            category: Self::classify(bmi),
        }
    }
}

/// Constraint checks for a required numeric field with a 0.01 step.
pub struct FieldValidator;

impl FieldValidator {
    /// Validates a field and returns its value when it may be submitted.
    ///
    /// Checks run in order: unparsable text, missing value (empty text or
    /// the `0` sentinel), then step alignment.
    pub fn validate(field: &NumericField) -> ConstraintResult<f64> {
        Self::validate_text(field.text())
    }

    pub fn validate_text(text: &str) -> ConstraintResult<f64> {
        if text.trim().is_empty() {
            return Err(ConstraintViolation::ValueMissing);
        }
        let value = try_parse_numeric(text).ok_or(ConstraintViolation::BadInput)?;
        if value == 0.0 {
            return Err(ConstraintViolation::ValueMissing);
        }
        Self::check_step(value)?;
        Ok(value)
    }

    fn check_step(value: f64) -> ConstraintResult<()> {
        let steps_per_unit = FIELD_STEP.recip().round();
        let scaled = value * steps_per_unit;
        if scaled.round() / steps_per_unit == value {
            return Ok(());
        }
        let lower = scaled.floor();
        Err(ConstraintViolation::StepMismatch {
            lower: lower / steps_per_unit,
            upper: (lower + 1.0) / steps_per_unit,
        })
    }
}
