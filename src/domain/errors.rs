use thiserror::Error;

/// A reason a numeric field refuses to take part in a submission.
///
/// These mirror the constraint checks a host form applies to a `required`
/// number input with a fixed step. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintViolation {
    #[error("Please enter a number.")]
    BadInput,
    #[error("Please fill out this field.")]
    ValueMissing,
    #[error("Please enter a valid value. The two nearest valid values are {lower} and {upper}.")]
    StepMismatch { lower: f64, upper: f64 },
}

pub type ConstraintResult<T> = Result<T, ConstraintViolation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        assert_eq!(ConstraintViolation::BadInput.to_string(), "Please enter a number.");
        assert_eq!(
            ConstraintViolation::ValueMissing.to_string(),
            "Please fill out this field."
        );
        let step = ConstraintViolation::StepMismatch { lower: 1.8, upper: 1.81 };
        assert_eq!(
            step.to_string(),
            "Please enter a valid value. The two nearest valid values are 1.8 and 1.81."
        );
    }
}
