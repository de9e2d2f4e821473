//! Application state module

mod app_state;
pub mod form;

pub use app_state::*;
