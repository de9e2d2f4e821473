//! Application event handling and core logic

use crate::config::TuiConfig;
use crate::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, loading config from disk
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: TuiConfig) -> Self {
        let state = AppState::new(config.reduce_motion());
        Self {
            state,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance animations and expire the status line
    pub fn tick(&mut self) {
        self.state.tick(self.config.status_message_ttl());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Submit shortcut works from anywhere (Ctrl+S, or Cmd+S on macOS)
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
        {
            self.submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.reset(),
            _ => self.handle_row_key(key),
        }

        self.state.sync_messages();
        Ok(())
    }

    /// Keys whose meaning depends on the focused row
    fn handle_row_key(&mut self, key: KeyEvent) {
        match self.state.form.active_field_index {
            // Text fields: name, age
            0 | 1 => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.form.input_char(c);
                }
                KeyCode::Backspace => self.state.form.backspace(),
                // Single-line inputs: Enter advances focus
                KeyCode::Enter => self.state.form.next_field(),
                _ => {}
            },
            // Consent switch
            2 => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.state.form.toggle_consent();
                }
            }
            // Buttons row
            _ => match key.code {
                KeyCode::Left => self.state.form.prev_button(),
                KeyCode::Right => self.state.form.next_button(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.state.form.selected_button == 0 {
                        self.reset();
                    } else {
                        self.submit();
                    }
                }
                _ => {}
            },
        }
    }

    /// Attempt a submit: touches and validates every field
    fn submit(&mut self) {
        match self.state.form.submit() {
            Some(submission) => {
                let record = serde_json::to_string(&submission).unwrap_or_default();
                tracing::info!(id = %submission.id, "form submitted: {record}");
                self.state
                    .set_status(format!("Form submitted ({})", submission.id));
                self.state.last_submission = Some(submission);
            }
            None => {
                tracing::debug!("submit blocked by validation errors");
                self.state.set_status("Please fix the highlighted fields");
            }
        }
        // Blocked submits surface every message immediately
        self.state.sync_messages();
    }

    /// Clear the whole form back to its initial state
    fn reset(&mut self) {
        self.state.form.reset();
        self.state.status_message = None;
        self.state.sync_messages();
        tracing::debug!("form reset");
    }
}
