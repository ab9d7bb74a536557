use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use crate::admin::{ActionOutcome, AdminBackend, InertBackend};
use crate::tabs::{ButtonSpec, Tab};

/// Seconds a status message stays in the status line
const STATUS_SECONDS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Settings container hosting the panels
pub struct App<B = InertBackend> {
    pub tab: Tab,
    pub popup: Popup,

    // Focused button, indexes the active panel's buttons()
    pub focus: usize,

    // Status message (auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    backend: B,
}

impl<B: AdminBackend> App<B> {
    pub fn new(tab: Tab, backend: B) -> Self {
        Self {
            tab,
            popup: Popup::None,
            focus: 0,
            status_message: None,
            status_message_time: None,
            backend,
        }
    }

    /// Set a status message (auto-clears after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub fn focused_button(&self) -> Option<&'static ButtonSpec> {
        self.tab.panel().buttons().get(self.focus).copied()
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup != Popup::None {
            self.handle_popup_key(key);
            return Ok(());
        }

        self.handle_normal_key(key).await
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Tab switching
            KeyCode::Tab => self.switch_tab(self.tab.next()),
            KeyCode::BackTab => self.switch_tab(self.tab.previous()),
            KeyCode::Char('1') => self.switch_tab(Tab::Database),
            KeyCode::Char('2') => self.switch_tab(Tab::Groups),

            // Focus movement
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.move_focus(1)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.move_focus(-1)
            }

            KeyCode::Enter | KeyCode::Char(' ') => self.activate().await,

            KeyCode::Char('?') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) {
        match self.popup {
            Popup::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')) {
                    self.popup = Popup::None;
                }
            }
            Popup::None => {}
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!("Switching to {} tab", tab.label());
            self.tab = tab;
            self.focus = 0;
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.tab.panel().buttons().len();
        if count == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(count as isize) as usize;
    }

    /// Hand the focused button's action to the backend
    async fn activate(&mut self) {
        let Some(button) = self.focused_button() else {
            return;
        };

        match self.backend.dispatch(button.action).await {
            Ok(ActionOutcome::Unwired) => {
                tracing::debug!(action = button.action.as_str(), "{} is not wired", button.label);
            }
            Ok(ActionOutcome::Completed(msg)) => {
                tracing::info!(action = button.action.as_str(), "{}", msg);
                self.set_status(msg);
            }
            Err(e) => {
                tracing::warn!(action = button.action.as_str(), "{} failed: {}", button.label, e);
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    pub fn tick(&mut self) {
        // Clear status message after timeout
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_SECONDS {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
