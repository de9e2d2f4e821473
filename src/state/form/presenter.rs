//! Validation message presentation
//!
//! The settled message for a field is a pure function of its
//! `(touched, error)` pair. [`MessageTransition`] adds the appear/fade
//! styling on top; it only affects how the message is drawn, never
//! whether the state machine considers it present.

use super::field::FieldSlot;
use super::rules::ErrorKind;
use std::time::{Duration, Instant};

const NAME_EMPTY_MESSAGE: &str = "Please type something";
const AGE_EMPTY_MESSAGE: &str = "Please type your age";
const AGE_REAL_MESSAGE: &str = "Please type a real age";
const AGE_POSITIVE_MESSAGE: &str = "Please type a positive age";

/// Settled message for a field, or `None` when no message is shown.
///
/// Pristine fields are always silent, even when the underlying value
/// would fail validation.
pub fn settled_message(
    slot: FieldSlot,
    touched: bool,
    error: Option<ErrorKind>,
) -> Option<&'static str> {
    if !touched {
        return None;
    }
    match (slot, error?) {
        (FieldSlot::Name, _) => Some(NAME_EMPTY_MESSAGE),
        (FieldSlot::Age, ErrorKind::Empty) => Some(AGE_EMPTY_MESSAGE),
        (FieldSlot::Age, ErrorKind::InvalidFormat) => Some(AGE_REAL_MESSAGE),
        (FieldSlot::Age, ErrorKind::NotPositive) => Some(AGE_POSITIVE_MESSAGE),
        // The consent rule never errors, but render generically if it did
        (FieldSlot::Consent, _) => Some(NAME_EMPTY_MESSAGE),
    }
}

/// Fade phase of one message line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

/// Appear/disappear fade for one field's message line.
///
/// The settled text updates immediately on [`set_message`]; the fade is
/// purely a styling ramp. With `reduce_motion` the phases collapse to
/// instant Hidden/Visible.
///
/// [`set_message`]: MessageTransition::set_message
#[derive(Debug)]
pub struct MessageTransition {
    settled: Option<&'static str>,
    /// Text still on screen while fading out
    leaving: Option<&'static str>,
    phase: FadePhase,
    started: Instant,
    reduce_motion: bool,
}

impl MessageTransition {
    /// Duration of the appear/disappear fade
    const FADE_DURATION: Duration = Duration::from_millis(250);

    pub fn new(reduce_motion: bool) -> Self {
        Self {
            settled: None,
            leaving: None,
            phase: FadePhase::Hidden,
            started: Instant::now(),
            reduce_motion,
        }
    }

    /// The message the state machine considers current
    #[allow(dead_code)]
    pub fn settled(&self) -> Option<&'static str> {
        self.settled
    }

    /// Reconcile with the settled presenter output.
    ///
    /// Appearance starts the text at full presence immediately (a
    /// blocked submit shows every message with no debounce); only the
    /// disappearance fades.
    pub fn set_message(&mut self, message: Option<&'static str>) {
        if message == self.settled {
            return;
        }
        match (self.settled, message) {
            (None, Some(_)) => {
                self.leaving = None;
                self.phase = if self.reduce_motion {
                    FadePhase::Visible
                } else {
                    FadePhase::FadingIn
                };
                self.started = Instant::now();
            }
            (Some(text), None) => {
                self.leaving = Some(text);
                self.phase = if self.reduce_motion {
                    FadePhase::Hidden
                } else {
                    FadePhase::FadingOut
                };
                self.started = Instant::now();
            }
            // Text swap while visible (e.g. Empty -> InvalidFormat)
            _ => {
                self.phase = FadePhase::Visible;
            }
        }
        self.settled = message;
        if self.phase == FadePhase::Hidden {
            self.leaving = None;
        }
    }

    /// Advance the fade based on elapsed time
    pub fn update(&mut self) {
        if self.started.elapsed() < Self::FADE_DURATION {
            return;
        }
        match self.phase {
            FadePhase::FadingIn => self.phase = FadePhase::Visible,
            FadePhase::FadingOut => {
                self.phase = FadePhase::Hidden;
                self.leaving = None;
            }
            _ => {}
        }
    }

    /// Whether a fade is still in flight (drives the faster poll rate)
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, FadePhase::FadingIn | FadePhase::FadingOut)
    }

    /// Text to draw this frame: the settled message, or the leaving
    /// text while its fade-out completes
    pub fn visible_text(&self) -> Option<&'static str> {
        match self.phase {
            FadePhase::Hidden => None,
            FadePhase::FadingOut => self.leaving,
            _ => self.settled,
        }
    }

    /// Presence of the message line, eased over the fade (0.0 to 1.0)
    pub fn opacity(&self) -> f32 {
        let progress = (self.started.elapsed().as_secs_f32()
            / Self::FADE_DURATION.as_secs_f32())
        .clamp(0.0, 1.0);
        match self.phase {
            FadePhase::Hidden => 0.0,
            FadePhase::Visible => 1.0,
            FadePhase::FadingIn => simple_easing::cubic_out(progress),
            FadePhase::FadingOut => 1.0 - simple_easing::cubic_in(progress),
        }
    }
}
