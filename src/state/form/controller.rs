//! Form controller: field aggregation, focus, submit and reset

use super::field::{AgeField, ConsentField, FieldSlot, NameField};
use super::rules;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Record produced by a successful submit
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub accepted_terms: bool,
    pub submitted_at: DateTime<Utc>,
}

/// The intake form: three owned fields plus focus state.
///
/// Focus rows are name, age, consent, then the buttons row. On the
/// buttons row `selected_button` picks Reset (0) or Submit (1).
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub name: NameField,
    pub age: AgeField,
    pub consent: ConsentField,
    pub active_field_index: usize,
    pub selected_button: usize,
}

/// Focus row index of the buttons row
pub const BUTTONS_ROW: usize = 3;
/// Focus rows: three fields plus the buttons row
pub const FOCUS_ROW_COUNT: usize = 4;
/// Buttons on the buttons row (Reset, Submit)
pub const BUTTON_COUNT: usize = 2;

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            name: NameField::new(),
            age: AgeField::new(),
            consent: ConsentField::new(),
            active_field_index: 0,
            selected_button: 1, // Default to "Submit"
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FOCUS_ROW_COUNT;
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FOCUS_ROW_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FOCUS_ROW_COUNT - 1);
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Route a typed character to the focused text field.
    ///
    /// Marks that field touched and revalidates it; other fields'
    /// state is not disturbed.
    pub fn input_char(&mut self, c: char) {
        match self.active_field_index {
            0 => self.name.push_char(c),
            1 => self.age.push_char(c),
            _ => {}
        }
    }

    /// Route a backspace to the focused text field
    pub fn backspace(&mut self) {
        match self.active_field_index {
            0 => self.name.pop_char(),
            1 => self.age.pop_char(),
            _ => {}
        }
    }

    pub fn toggle_consent(&mut self) {
        self.consent.toggle();
    }

    /// Programmatic field change (used by tests and scripted flows)
    #[allow(dead_code)]
    pub fn set_name(&mut self, text: &str) {
        self.name.set_text(text);
    }

    #[allow(dead_code)]
    pub fn set_age(&mut self, text: &str) {
        self.age.set_text(text);
    }

    /// Overall validity, recomputed from the current values.
    ///
    /// Never stored: stored per-field errors lag behind edits to
    /// untouched fields, so this always re-applies the rules.
    pub fn is_valid(&self) -> bool {
        rules::validate_name(self.name.text()).is_none()
            && rules::validate_age(self.age.text()).is_none()
            && rules::validate_consent(self.consent.is_accepted()).is_none()
    }

    /// Attempt to submit the form.
    ///
    /// Marks every field touched and revalidates all of them, even
    /// untouched ones. Returns `None` without side effects if any field
    /// errors; on success the field values are left unchanged.
    pub fn submit(&mut self) -> Option<Submission> {
        self.name.touch_and_revalidate();
        self.age.touch_and_revalidate();
        self.consent.touch_and_revalidate();

        if self.name.error().is_some()
            || self.age.error().is_some()
            || self.consent.error().is_some()
        {
            return None;
        }

        // Validation passed, so the same parse cannot fail here
        let age = rules::parse_age(self.age.text()).ok()?;
        Some(Submission {
            id: Uuid::new_v4(),
            name: self.name.text().trim().to_string(),
            age,
            accepted_terms: self.consent.is_accepted(),
            submitted_at: Utc::now(),
        })
    }

    /// Unconditionally restore every field to its initial state.
    ///
    /// Values, touched flags, and errors all clear in one step; the
    /// consent toggle returns to not-accepted. Never fails.
    pub fn reset(&mut self) {
        self.name.reset();
        self.age.reset();
        self.consent.reset();
        self.active_field_index = 0;
        self.selected_button = 1;
    }

    /// `(touched, error)` pair for one field, for the presenter
    pub fn message_inputs(&self, slot: FieldSlot) -> (bool, Option<rules::ErrorKind>) {
        match slot {
            FieldSlot::Name => (self.name.is_touched(), self.name.error()),
            FieldSlot::Age => (self.age.is_touched(), self.age.error()),
            FieldSlot::Consent => (self.consent.is_touched(), self.consent.error()),
        }
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::field::FieldPhase;
    use crate::state::form::rules::ErrorKind;
    use pretty_assertions::assert_eq;

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_name_field() {
            let form = IntakeForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, 1); // Submit
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = IntakeForm::new();
            for _ in 0..FOCUS_ROW_COUNT {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = IntakeForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, BUTTONS_ROW);
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = IntakeForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, BUTTONS_ROW);
        }

        #[test]
        fn test_button_navigation_wraps() {
            let mut form = IntakeForm::new();
            form.next_button();
            assert_eq!(form.selected_button, 0);
            form.prev_button();
            assert_eq!(form.selected_button, 1);
        }
    }

    mod field_changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_char_goes_to_active_field() {
            let mut form = IntakeForm::new();
            form.input_char('J');
            assert_eq!(form.name.text(), "J");
            assert_eq!(form.age.text(), "");
        }

        #[test]
        fn test_typing_does_not_disturb_other_fields() {
            let mut form = IntakeForm::new();
            form.set_age("abc");
            assert_eq!(form.age.error(), Some(ErrorKind::InvalidFormat));

            form.set_active_field(0);
            form.input_char('J');

            // Age keeps its prior error; name alone was revalidated
            assert_eq!(form.age.error(), Some(ErrorKind::InvalidFormat));
            assert_eq!(form.name.error(), None);
        }

        #[test]
        fn test_input_char_on_buttons_row_is_noop() {
            let mut form = IntakeForm::new();
            form.set_active_field(BUTTONS_ROW);
            form.input_char('x');
            assert_eq!(form.name.text(), "");
            assert_eq!(form.age.text(), "");
        }

        #[test]
        fn test_backspace_routes_to_age_field() {
            let mut form = IntakeForm::new();
            form.set_age("25");
            form.set_active_field(1);
            form.backspace();
            assert_eq!(form.age.text(), "2");
        }
    }

    mod validity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fresh_form_is_invalid_but_silent() {
            let form = IntakeForm::new();
            assert!(!form.is_valid());
            assert_eq!(form.name.phase(), FieldPhase::Pristine);
            assert_eq!(form.age.phase(), FieldPhase::Pristine);
            assert_eq!(form.consent.phase(), FieldPhase::Pristine);
        }

        #[test]
        fn test_is_valid_recomputed_not_stored() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");
            assert!(form.is_valid());

            form.set_age("-1");
            assert!(!form.is_valid());
        }

        #[test]
        fn test_consent_does_not_gate_validity() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");
            assert!(!form.consent.is_accepted());
            assert!(form.is_valid());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blocked_submit_touches_every_field() {
            let mut form = IntakeForm::new();
            let result = form.submit();

            assert!(result.is_none());
            assert_eq!(form.name.phase(), FieldPhase::TouchedInvalid);
            assert_eq!(form.age.phase(), FieldPhase::TouchedInvalid);
            assert_eq!(form.consent.phase(), FieldPhase::TouchedValid);
        }

        #[test]
        fn test_blocked_submit_reports_all_errors_not_just_first() {
            let mut form = IntakeForm::new();
            form.submit();
            assert_eq!(form.name.error(), Some(ErrorKind::Empty));
            assert_eq!(form.age.error(), Some(ErrorKind::Empty));
        }

        #[test]
        fn test_successful_submit_returns_record() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");
            form.toggle_consent();

            let submission = form.submit().expect("submit should succeed");
            assert_eq!(submission.name, "John Doe");
            assert_eq!(submission.age, 25);
            assert!(submission.accepted_terms);
        }

        #[test]
        fn test_successful_submit_does_not_clear_values() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");
            form.toggle_consent();
            form.submit().expect("submit should succeed");

            assert_eq!(form.name.text(), "John Doe");
            assert_eq!(form.age.text(), "25");
            assert!(form.consent.is_accepted());
        }

        #[test]
        fn test_successful_submit_leaves_no_errors() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");
            form.submit().expect("submit should succeed");

            assert_eq!(form.name.phase(), FieldPhase::TouchedValid);
            assert_eq!(form.age.phase(), FieldPhase::TouchedValid);
        }

        #[test]
        fn test_submit_succeeds_without_consent() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");

            let submission = form.submit().expect("consent must not block submit");
            assert!(!submission.accepted_terms);
        }

        #[test]
        fn test_submit_trims_name_in_record() {
            let mut form = IntakeForm::new();
            form.set_name("  John Doe  ");
            form.set_age("25");

            let submission = form.submit().expect("submit should succeed");
            assert_eq!(submission.name, "John Doe");
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_everything_atomically() {
            let mut form = IntakeForm::new();
            form.set_name("John Doe");
            form.set_age("25");
            form.toggle_consent();
            form.set_active_field(BUTTONS_ROW);

            form.reset();

            assert_eq!(form.name.text(), "");
            assert_eq!(form.age.text(), "");
            assert!(!form.consent.is_accepted());
            assert_eq!(form.name.phase(), FieldPhase::Pristine);
            assert_eq!(form.age.phase(), FieldPhase::Pristine);
            assert_eq!(form.consent.phase(), FieldPhase::Pristine);
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_reset_after_blocked_submit_clears_errors() {
            let mut form = IntakeForm::new();
            form.submit();
            assert_eq!(form.name.phase(), FieldPhase::TouchedInvalid);

            form.reset();

            assert_eq!(form.name.phase(), FieldPhase::Pristine);
            assert_eq!(form.name.error(), None);
        }

        #[test]
        fn test_reset_is_idempotent() {
            let mut form = IntakeForm::new();
            form.set_name("x");
            form.reset();
            let first = format!("{form:?}");
            form.reset();
            assert_eq!(first, format!("{form:?}"));
        }
    }

    mod scenario {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_validation_walkthrough() {
            let mut form = IntakeForm::new();

            // Empty submit: both text fields show their empty errors
            assert!(form.submit().is_none());
            assert_eq!(form.name.error(), Some(ErrorKind::Empty));
            assert_eq!(form.age.error(), Some(ErrorKind::Empty));

            // Fill name, submit again: name recovers, age still empty
            form.set_name("John Doe");
            assert!(form.submit().is_none());
            assert_eq!(form.name.error(), None);
            assert_eq!(form.age.error(), Some(ErrorKind::Empty));

            // Negative age: blocked with a positivity error
            form.set_age("-1");
            assert!(form.submit().is_none());
            assert_eq!(form.age.error(), Some(ErrorKind::NotPositive));

            // Valid age plus consent: submit goes through, no errors left
            form.set_age("25");
            form.toggle_consent();
            let submission = form.submit().expect("final submit should succeed");
            assert_eq!(submission.age, 25);
            assert!(submission.accepted_terms);
            assert_eq!(form.name.error(), None);
            assert_eq!(form.age.error(), None);
            assert_eq!(form.consent.error(), None);
        }
    }
}
