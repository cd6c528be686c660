//! One-shot computation without the terminal UI.

use super::errors::{AppError, AppResult};
use crate::domain::{
    BmiEngine, BmiReport, FieldKind, FieldValidator, NumericField, format_fixed2,
};
use tracing::{info, warn};

/// Runs a single submission from raw argument text.
///
/// Both arguments go through the same coercion as typed input. With
/// `validate` set, the same constraint checks as the interactive form apply
/// and the first violation is returned as [`AppError::Rejected`].
pub fn run_headless(height_text: &str, weight_text: &str, validate: bool) -> AppResult<BmiReport> {
    let mut height = NumericField::new(FieldKind::Height);
    let mut weight = NumericField::new(FieldKind::Weight);
    height.set_text(height_text);
    weight.set_text(weight_text);

    if validate {
        for field in [&height, &weight] {
            FieldValidator::validate(field).map_err(|violation| {
                warn!(field = field.kind.name(), %violation, "submission blocked");
                AppError::Rejected {
                    field: field.kind,
                    violation,
                }
            })?;
        }
    }

    let reading = BmiEngine::evaluate(height.value(), weight.value());
    info!(
        height = height.value(),
        weight = weight.value(),
        bmi = reading.bmi,
        category = %reading.category,
        "headless bmi computed"
    );
    Ok(BmiReport::new(height.value(), weight.value(), reading))
}

/// Formats a report as a single line of text or as JSON.
pub fn render_report(report: &BmiReport, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string(report)?);
    }
    Ok(format!("BMI: {} ({})", format_fixed2(report.bmi), report.category))
}
