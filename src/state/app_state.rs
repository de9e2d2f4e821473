//! Application state definitions

use crate::state::form::{settled_message, FieldSlot, IntakeForm, MessageTransition, Submission};
use std::time::{Duration, Instant};

/// Transient status line shown after submit/reset
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    shown_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// Aggregate state for the application
pub struct AppState {
    /// The intake form state machine
    pub form: IntakeForm,
    /// Per-field message fades
    pub name_message: MessageTransition,
    pub age_message: MessageTransition,
    pub consent_message: MessageTransition,
    /// Most recent successful submission
    pub last_submission: Option<Submission>,
    /// Transient status line
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            form: IntakeForm::new(),
            name_message: MessageTransition::new(reduce_motion),
            age_message: MessageTransition::new(reduce_motion),
            consent_message: MessageTransition::new(reduce_motion),
            last_submission: None,
            status_message: None,
        }
    }

    /// Reconcile each message fade with the settled presenter output.
    /// Call after every form mutation.
    pub fn sync_messages(&mut self) {
        for slot in [FieldSlot::Name, FieldSlot::Age, FieldSlot::Consent] {
            let (touched, error) = self.form.message_inputs(slot);
            let message = settled_message(slot, touched, error);
            self.transition_mut(slot).set_message(message);
        }
    }

    /// Advance fades and expire the status line
    pub fn tick(&mut self, status_ttl: Duration) {
        self.name_message.update();
        self.age_message.update();
        self.consent_message.update();
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| m.is_expired(status_ttl))
        {
            self.status_message = None;
        }
    }

    /// True while any message fade is in flight
    pub fn any_message_animating(&self) -> bool {
        self.name_message.is_animating()
            || self.age_message.is_animating()
            || self.consent_message.is_animating()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(text));
    }

    fn transition_mut(&mut self, slot: FieldSlot) -> &mut MessageTransition {
        match slot {
            FieldSlot::Name => &mut self.name_message,
            FieldSlot::Age => &mut self.age_message,
            FieldSlot::Consent => &mut self.consent_message,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced_motion_state() -> AppState {
        AppState::new(true)
    }

    #[test]
    fn test_fresh_state_shows_no_messages() {
        let mut state = reduced_motion_state();
        state.sync_messages();
        assert_eq!(state.name_message.settled(), None);
        assert_eq!(state.age_message.settled(), None);
        assert_eq!(state.consent_message.settled(), None);
    }

    #[test]
    fn test_blocked_submit_surfaces_both_messages() {
        let mut state = reduced_motion_state();
        state.form.submit();
        state.sync_messages();
        assert_eq!(state.name_message.settled(), Some("Please type something"));
        assert_eq!(state.age_message.settled(), Some("Please type your age"));
        assert_eq!(state.consent_message.settled(), None);
    }

    #[test]
    fn test_correcting_a_field_clears_only_its_message() {
        let mut state = reduced_motion_state();
        state.form.submit();
        state.sync_messages();

        state.form.set_name("John Doe");
        state.sync_messages();

        assert_eq!(state.name_message.settled(), None);
        assert_eq!(state.age_message.settled(), Some("Please type your age"));
    }

    #[test]
    fn test_reset_clears_all_messages() {
        let mut state = reduced_motion_state();
        state.form.submit();
        state.sync_messages();

        state.form.reset();
        state.sync_messages();

        assert_eq!(state.name_message.visible_text(), None);
        assert_eq!(state.age_message.visible_text(), None);
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = reduced_motion_state();
        state.set_status("Form submitted");
        state.tick(Duration::from_secs(0));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_status_message_survives_before_ttl() {
        let mut state = reduced_motion_state();
        state.set_status("Form submitted");
        state.tick(Duration::from_secs(60));
        assert!(state.status_message.is_some());
    }
}
