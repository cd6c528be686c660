use serde::Serialize;
use std::fmt;

use super::numeric::parse_numeric;

/// Health category assigned to a BMI value.
///
/// Variants are listed in ascending threshold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
    ObesityClass2,
    ObesityClass3,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obesity,
        BmiCategory::ObesityClass2,
        BmiCategory::ObesityClass3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
            BmiCategory::ObesityClass2 => "Class 2 obesity",
            BmiCategory::ObesityClass3 => "Class 3 obesity",
        }
    }
}

impl Serialize for BmiCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI together with its category.
///
/// The two values are only ever produced together, so a reading can never
/// carry a category that belongs to another BMI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Serializable summary of one computation, used by headless output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    pub fn new(height: f64, weight: f64, reading: BmiReading) -> Self {
        Self {
            height,
            weight,
            bmi: reading.bmi,
            category: reading.category,
        }
    }
}

/// Which of the two numeric inputs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Height,
    Weight,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Height => "Height:",
            FieldKind::Weight => "Weight:",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Height => "Enter your height in m.",
            FieldKind::Weight => "Enter your weight in kg.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Height => "height",
            FieldKind::Weight => "weight",
        }
    }
}

/// A numeric text input.
///
/// The field keeps the text the user typed and the number it coerces to.
/// Text that is empty or not a number coerces to `0.0`, the "unset" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    pub kind: FieldKind,
    text: String,
    value: f64,
}

impl NumericField {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            text: String::new(),
            value: 0.0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the text and re-parses the value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.value = parse_numeric(&self.text);
    }

    /// Sets the value directly; the text becomes its shortest decimal form,
    /// or empty for the sentinel.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.text = if value == 0.0 { String::new() } else { value.to_string() };
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.value = 0.0;
    }

    /// Text shown when the field is not being edited.
    ///
    /// The sentinel renders as an empty string so the placeholder shows
    /// instead of a literal `0`.
    pub fn display_text(&self) -> &str {
        if self.value == 0.0 || self.value.is_nan() {
            ""
        } else {
            self.text.trim()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = BmiCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Underweight",
                "Normal",
                "Overweight",
                "Obesity",
                "Class 2 obesity",
                "Class 3 obesity"
            ]
        );
        assert_eq!(BmiCategory::ObesityClass2.to_string(), "Class 2 obesity");
    }

    #[test]
    fn test_category_serializes_as_label() {
        for category in BmiCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = NumericField::new(FieldKind::Height);
        assert_eq!(field.text(), "");
        assert_eq!(field.value(), 0.0);
        assert_eq!(field.display_text(), "");
    }

    #[test]
    fn test_set_text_parses_value() {
        let mut field = NumericField::new(FieldKind::Weight);
        field.set_text("72.5");
        assert_eq!(field.value(), 72.5);
        assert_eq!(field.display_text(), "72.5");
    }

    #[test]
    fn test_non_numeric_text_is_zero_not_previous() {
        let mut field = NumericField::new(FieldKind::Weight);
        field.set_text("70");
        field.set_text("seventy");
        assert_eq!(field.value(), 0.0);
        assert_eq!(field.text(), "seventy");
        assert_eq!(field.display_text(), "");
    }

    #[test]
    fn test_zero_renders_empty() {
        let mut field = NumericField::new(FieldKind::Height);
        field.set_text("0");
        assert_eq!(field.value(), 0.0);
        assert_eq!(field.display_text(), "");
    }

    #[test]
    fn test_set_value_and_clear() {
        let mut field = NumericField::new(FieldKind::Height);
        field.set_value(1.75);
        assert_eq!(field.text(), "1.75");
        field.set_value(0.0);
        assert_eq!(field.text(), "");
        field.set_text("2");
        field.clear();
        assert_eq!(field.text(), "");
        assert_eq!(field.value(), 0.0);
    }

    #[test]
    fn test_report_serializes_category_label() {
        let report = BmiReport::new(
            1.8,
            70.0,
            BmiReading { bmi: 21.6, category: BmiCategory::Normal },
        );
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"height":1.8,"weight":70.0,"bmi":21.6,"category":"Normal"}"#);
    }

    #[test]
    fn test_field_kind_labels() {
        assert_eq!(FieldKind::Height.label(), "Height:");
        assert_eq!(FieldKind::Weight.placeholder(), "Enter your weight in kg.");
        assert_eq!(FieldKind::Weight.name(), "weight");
    }
}
