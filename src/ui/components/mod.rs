//! Reusable TUI widgets

mod button;
mod switch;

pub use button::{render_button, BUTTON_HEIGHT};
pub use switch::render_switch;
