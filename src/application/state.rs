//! Application state for the BMI form.
//!
//! This module contains the form state machine, focus handling and the
//! text-editing operations the terminal front end drives.

use crate::domain::{
    BmiEngine, BmiReading, ConstraintViolation, FieldKind, FieldValidator, NumericField,
    format_fixed2,
};
use tracing::{debug, info, warn};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The form is interactive
    Normal,
    /// Key-binding help is displayed
    Help,
}

/// Lifecycle of the form's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing has been submitted yet
    Idle,
    /// At least one submission has populated the result
    Submitted,
}

/// Which control of the form currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Height,
    Weight,
    Calculate,
}

impl Focus {
    const ORDER: [Focus; 3] = [Focus::Height, Focus::Weight, Focus::Calculate];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn field(self) -> Option<FieldKind> {
        match self {
            Focus::Height => Some(FieldKind::Height),
            Focus::Weight => Some(FieldKind::Weight),
            Focus::Calculate => None,
        }
    }
}

impl From<FieldKind> for Focus {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Height => Focus::Height,
            FieldKind::Weight => Focus::Weight,
        }
    }
}

/// Main application state: the two inputs, the last result and UI state.
///
/// Inputs change only through the editing methods, and the result changes
/// only through [`App::submit`], which also empties both inputs.
///
/// # Examples
///
/// ```
/// use bmi_calc::application::{App, FormState};
///
/// let mut app = App::default();
/// assert_eq!(app.form_state(), FormState::Idle);
///
/// app.height.set_text("1.8");
/// app.weight.set_text("70");
/// app.submit();
///
/// assert_eq!(app.result_text(), "21.60");
/// assert_eq!(app.category_text(), "Normal");
/// assert_eq!(app.height.value(), 0.0);
/// ```
#[derive(Debug)]
pub struct App {
    /// Height input, meters
    pub height: NumericField,
    /// Weight input, kilograms
    pub weight: NumericField,
    /// Last computed reading; `None` until the first submission
    reading: Option<BmiReading>,
    /// Control receiving keystrokes
    pub focus: Focus,
    /// Cursor position within the focused field, in characters
    pub cursor_position: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Whether submissions pass through constraint validation first
    pub validate: bool,
    /// Set once the user asks to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

impl App {
    pub fn new(validate: bool) -> Self {
        Self {
            height: NumericField::new(FieldKind::Height),
            weight: NumericField::new(FieldKind::Weight),
            reading: None,
            focus: Focus::Height,
            cursor_position: 0,
            mode: AppMode::Normal,
            status_message: None,
            validate,
            should_quit: false,
        }
    }

    pub fn form_state(&self) -> FormState {
        if self.reading.is_some() {
            FormState::Submitted
        } else {
            FormState::Idle
        }
    }

    pub fn reading(&self) -> Option<BmiReading> {
        self.reading
    }

    /// Last BMI, or the `0.0` sentinel before any submission.
    pub fn bmi(&self) -> f64 {
        self.reading.map(|r| r.bmi).unwrap_or(0.0)
    }

    /// BMI formatted for display; empty while the value is the sentinel.
    pub fn result_text(&self) -> String {
        let bmi = self.bmi();
        if bmi == 0.0 { String::new() } else { format_fixed2(bmi) }
    }

    /// Category label, or an empty string before any submission.
    pub fn category_text(&self) -> &'static str {
        self.reading.map(|r| r.category.label()).unwrap_or("")
    }

    pub fn field(&self, kind: FieldKind) -> &NumericField {
        match kind {
            FieldKind::Height => &self.height,
            FieldKind::Weight => &self.weight,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut NumericField {
        match kind {
            FieldKind::Height => &mut self.height,
            FieldKind::Weight => &mut self.weight,
        }
    }

    pub fn focused_field(&self) -> Option<&NumericField> {
        self.focus.field().map(|kind| self.field(kind))
    }

    /// Computes a reading from the current inputs, stores it and empties
    /// both inputs.
    ///
    /// This is the form's only result transition and never fails: a zero
    /// height stores a non-finite BMI.
    pub fn submit(&mut self) -> BmiReading {
        let height = self.height.value();
        let weight = self.weight.value();
        let reading = BmiEngine::evaluate(height, weight);
        info!(height, weight, bmi = reading.bmi, category = %reading.category, "bmi computed");

        self.reading = Some(reading);
        self.height.clear();
        self.weight.clear();
        self.cursor_position = 0;
        reading
    }

    /// Submits the form if both inputs pass constraint validation.
    ///
    /// On the first violation the offending field gains focus, the message
    /// is shown in the status bar, and nothing else changes.
    pub fn request_submit(&mut self) -> Result<BmiReading, (FieldKind, ConstraintViolation)> {
        if self.validate {
            if let Err((kind, violation)) = self.check_constraints() {
                warn!(field = kind.name(), %violation, "submission blocked");
                self.set_focus(kind.into());
                self.status_message = Some(violation.to_string());
                return Err((kind, violation));
            }
        }
        self.status_message = None;
        Ok(self.submit())
    }

    fn check_constraints(&self) -> Result<(), (FieldKind, ConstraintViolation)> {
        for kind in [FieldKind::Height, FieldKind::Weight] {
            FieldValidator::validate(self.field(kind)).map_err(|v| (kind, v))?;
        }
        Ok(())
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor_position = self.focused_field().map(|f| f.text().chars().count()).unwrap_or(0);
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }

    /// Inserts a character at the cursor of the focused field.
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_position;
        self.edit_focused(|text| {
            let at = byte_offset(text, cursor);
            text.insert(at, c);
            Some(cursor + 1)
        });
    }

    /// Removes the character before the cursor.
    pub fn delete_backward(&mut self) {
        let cursor = self.cursor_position;
        if cursor == 0 {
            return;
        }
        self.edit_focused(|text| {
            let at = byte_offset(text, cursor - 1);
            text.remove(at);
            Some(cursor - 1)
        });
    }

    /// Removes the character under the cursor.
    pub fn delete_forward(&mut self) {
        let cursor = self.cursor_position;
        self.edit_focused(|text| {
            if cursor >= text.chars().count() {
                return None;
            }
            let at = byte_offset(text, cursor);
            text.remove(at);
            Some(cursor)
        });
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.focused_len();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.focused_len();
    }

    fn focused_len(&self) -> usize {
        self.focused_field().map(|f| f.text().chars().count()).unwrap_or(0)
    }

    /// Applies `edit` to a copy of the focused field's text and stores the
    /// result back through `set_text`, so the value is re-parsed on every
    /// keystroke. `edit` returns the new cursor, or `None` for no change.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String) -> Option<usize>) {
        let Some(kind) = self.focus.field() else {
            return;
        };
        let field = self.field_mut(kind);
        let mut text = field.text().to_string();
        let Some(cursor) = edit(&mut text) else {
            return;
        };
        field.set_text(text);
        debug!(field = kind.name(), text = field.text(), value = field.value(), "field edited");
        self.cursor_position = cursor;
        self.status_message = None;
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
