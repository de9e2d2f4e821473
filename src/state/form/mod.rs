//! Form domain layer
//!
//! Explicit state machine for the intake form: pure rules, per-field
//! touched/error tracking, the controller that aggregates them, and the
//! message presenter.

mod controller;
mod field;
mod presenter;
mod rules;

pub use controller::{IntakeForm, Submission};
pub use field::{AgeField, ConsentField, FieldPhase, FieldSlot, NameField};
pub use presenter::{settled_message, MessageTransition};
pub use rules::ErrorKind;
