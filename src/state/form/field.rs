//! Form field state objects
//!
//! A [`Field`] tracks one input's value, touched flag, and current
//! validation error. The concrete field types bind a value type to its
//! rule from [`super::rules`] and carry the label the UI shows.

use super::rules::{self, ErrorKind};

/// Identifies one of the form's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Name,
    Age,
    Consent,
}

/// Presentation phase of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// No interaction and no submit attempt yet; message suppressed
    Pristine,
    /// Touched and currently valid
    TouchedValid,
    /// Touched with a validation error; message visible
    TouchedInvalid,
}

/// Generic holder of one input's value, validity, and interaction state
#[derive(Debug, Clone)]
pub struct Field<T> {
    initial: T,
    value: T,
    touched: bool,
    error: Option<ErrorKind>,
}

impl<T: Clone> Field<T> {
    fn new(initial: T) -> Self {
        Self {
            value: initial.clone(),
            initial,
            touched: false,
            error: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn phase(&self) -> FieldPhase {
        match (self.touched, self.error) {
            (false, _) => FieldPhase::Pristine,
            (true, None) => FieldPhase::TouchedValid,
            (true, Some(_)) => FieldPhase::TouchedInvalid,
        }
    }

    fn touch(&mut self) {
        self.touched = true;
    }

    fn store_error(&mut self, error: Option<ErrorKind>) {
        self.error = error;
    }

    /// Restore the initial value and clear touched/error in one step
    fn reset(&mut self) {
        self.value = self.initial.clone();
        self.touched = false;
        self.error = None;
    }
}

impl Field<String> {
    fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    fn pop_char(&mut self) {
        self.value.pop();
    }
}

/// "Your name": required free-text input
#[derive(Debug, Clone)]
pub struct NameField {
    state: Field<String>,
}

impl NameField {
    pub const LABEL: &'static str = "Your name";

    pub fn new() -> Self {
        Self {
            state: Field::new(String::new()),
        }
    }

    pub fn text(&self) -> &str {
        self.state.value()
    }

    pub fn is_touched(&self) -> bool {
        self.state.is_touched()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.state.error()
    }

    pub fn phase(&self) -> FieldPhase {
        self.state.phase()
    }

    pub fn push_char(&mut self, c: char) {
        self.state.push_char(c);
        self.touch_and_revalidate();
    }

    pub fn pop_char(&mut self) {
        self.state.pop_char();
        self.touch_and_revalidate();
    }

    #[allow(dead_code)]
    pub fn set_text(&mut self, text: &str) {
        self.state.value = text.to_string();
        self.touch_and_revalidate();
    }

    /// Recompute `error` from the current value (does not touch)
    pub fn revalidate(&mut self) {
        let error = rules::validate_name(self.state.value());
        self.state.store_error(error);
    }

    pub fn touch_and_revalidate(&mut self) {
        self.state.touch();
        self.revalidate();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for NameField {
    fn default() -> Self {
        Self::new()
    }
}

/// "Your age": raw text validated as a positive base-10 integer
#[derive(Debug, Clone)]
pub struct AgeField {
    state: Field<String>,
}

impl AgeField {
    pub const LABEL: &'static str = "Your age";

    pub fn new() -> Self {
        Self {
            state: Field::new(String::new()),
        }
    }

    pub fn text(&self) -> &str {
        self.state.value()
    }

    pub fn is_touched(&self) -> bool {
        self.state.is_touched()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.state.error()
    }

    pub fn phase(&self) -> FieldPhase {
        self.state.phase()
    }

    pub fn push_char(&mut self, c: char) {
        self.state.push_char(c);
        self.touch_and_revalidate();
    }

    pub fn pop_char(&mut self) {
        self.state.pop_char();
        self.touch_and_revalidate();
    }

    #[allow(dead_code)]
    pub fn set_text(&mut self, text: &str) {
        self.state.value = text.to_string();
        self.touch_and_revalidate();
    }

    pub fn revalidate(&mut self) {
        let error = rules::validate_age(self.state.value());
        self.state.store_error(error);
    }

    pub fn touch_and_revalidate(&mut self) {
        self.state.touch();
        self.revalidate();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for AgeField {
    fn default() -> Self {
        Self::new()
    }
}

/// "I accept the license and terms": two-state toggle
#[derive(Debug, Clone)]
pub struct ConsentField {
    state: Field<bool>,
}

impl ConsentField {
    pub const LABEL: &'static str = "I accept the license and terms";

    pub fn new() -> Self {
        Self {
            state: Field::new(false),
        }
    }

    pub fn is_accepted(&self) -> bool {
        *self.state.value()
    }

    pub fn is_touched(&self) -> bool {
        self.state.is_touched()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.state.error()
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> FieldPhase {
        self.state.phase()
    }

    pub fn toggle(&mut self) {
        self.state.value = !self.state.value;
        self.touch_and_revalidate();
    }

    pub fn revalidate(&mut self) {
        let error = rules::validate_consent(*self.state.value());
        self.state.store_error(error);
    }

    pub fn touch_and_revalidate(&mut self) {
        self.state.touch();
        self.revalidate();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for ConsentField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_phase {
        use super::*;

        #[test]
        fn test_new_field_is_pristine() {
            let field = NameField::new();
            assert_eq!(field.phase(), FieldPhase::Pristine);
            assert!(!field.is_touched());
            assert_eq!(field.error(), None);
        }

        #[test]
        fn test_pristine_even_when_value_would_fail() {
            // A fresh empty name would fail validation, but no pass has run
            let field = NameField::new();
            assert_eq!(field.text(), "");
            assert_eq!(field.phase(), FieldPhase::Pristine);
        }

        #[test]
        fn test_touched_invalid_after_bad_edit() {
            let mut field = AgeField::new();
            field.set_text("abc");
            assert_eq!(field.phase(), FieldPhase::TouchedInvalid);
            assert_eq!(field.error(), Some(ErrorKind::InvalidFormat));
        }

        #[test]
        fn test_touched_valid_after_good_edit() {
            let mut field = NameField::new();
            field.set_text("John Doe");
            assert_eq!(field.phase(), FieldPhase::TouchedValid);
        }
    }

    mod text_editing {
        use super::*;

        #[test]
        fn test_push_char_touches_and_revalidates() {
            let mut field = NameField::new();
            field.push_char('J');
            assert!(field.is_touched());
            assert_eq!(field.text(), "J");
            assert_eq!(field.error(), None);
        }

        #[test]
        fn test_pop_char_revalidates_back_to_empty() {
            let mut field = NameField::new();
            field.push_char('J');
            field.pop_char();
            assert_eq!(field.text(), "");
            assert_eq!(field.error(), Some(ErrorKind::Empty));
        }

        #[test]
        fn test_pop_char_on_empty_field_is_noop() {
            let mut field = AgeField::new();
            field.pop_char();
            assert_eq!(field.text(), "");
            assert_eq!(field.error(), Some(ErrorKind::Empty));
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_restores_pristine_state() {
            let mut field = AgeField::new();
            field.set_text("-1");
            assert_eq!(field.phase(), FieldPhase::TouchedInvalid);

            field.reset();

            assert_eq!(field.text(), "");
            assert_eq!(field.phase(), FieldPhase::Pristine);
            assert_eq!(field.error(), None);
        }

        #[test]
        fn test_consent_reset_returns_to_not_accepted() {
            let mut field = ConsentField::new();
            field.toggle();
            assert!(field.is_accepted());

            field.reset();

            assert!(!field.is_accepted());
            assert!(!field.is_touched());
        }
    }

    mod consent {
        use super::*;

        #[test]
        fn test_default_is_not_accepted() {
            let field = ConsentField::new();
            assert!(!field.is_accepted());
        }

        #[test]
        fn test_toggle_flips_state() {
            let mut field = ConsentField::new();
            field.toggle();
            assert!(field.is_accepted());
            field.toggle();
            assert!(!field.is_accepted());
        }

        #[test]
        fn test_toggle_never_produces_an_error() {
            let mut field = ConsentField::new();
            field.toggle();
            assert_eq!(field.error(), None);
            assert_eq!(field.phase(), FieldPhase::TouchedValid);
        }
    }
}
