//! Application state and core logic

use crate::content::PROFILE;
use crate::gateway::{DeliveryReceipt, GatewayError, SubmissionGateway};
use crate::state::{AppState, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

type DeliveryOutcome = Result<DeliveryReceipt, GatewayError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway used to deliver contact messages
    gateway: Arc<dyn SubmissionGateway>,
    /// Delivery outcomes coming back from spawned gateway calls
    outcome_tx: UnboundedSender<DeliveryOutcome>,
    outcome_rx: UnboundedReceiver<DeliveryOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            gateway,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Name of the active gateway, for the status bar
    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    /// Per-frame housekeeping: settle finished deliveries and expire banners.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.contact.finish_submit(outcome, now);
        }
        if self.state.contact.tick(now) {
            debug!("Contact status cleared");
        }
        self.state.clear_expired_message();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let view = self.state.current_view;
        if view.is_form_view() {
            self.handle_contact_key(key);
        } else if view == View::Projects {
            self.handle_projects_key(key);
        } else {
            self.handle_section_key(key);
        }
        Ok(())
    }

    /// Keys shared by every non-form view. Returns true if consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => match View::from_key(c) {
                Some(view) => self.state.navigate(view),
                None => return false,
            },
            KeyCode::Tab => {
                let next = self.state.current_view.next();
                self.state.navigate(next);
            }
            KeyCode::BackTab => {
                let prev = self.state.current_view.prev();
                self.state.navigate(prev);
            }
            KeyCode::Char('y') => self.copy_contact_email(),
            _ => return false,
        }
        true
    }

    /// Handle keys in the scrollable section views
    fn handle_section_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Home => self.state.scroll_offset = 0,
            _ => {}
        }
    }

    /// Handle keys in the Projects gallery
    fn handle_projects_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        let count = self.state.filtered_projects().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('f') | KeyCode::Right => self.state.next_project_filter(),
            KeyCode::Char('F') | KeyCode::Left => self.state.prev_project_filter(),
            KeyCode::Enter => {
                if let Some(project) = self.state.selected_project() {
                    match project.repository() {
                        Some(url) => match self.copy_to_clipboard(url) {
                            Ok(()) => self.state.show_message(format!("Copied {url}")),
                            Err(e) => {
                                warn!("Clipboard unavailable: {e}");
                                self.state.show_message(url);
                            }
                        },
                        None => self.state.show_message("Private repository"),
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle keys in the Contact form
    fn handle_contact_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let in_message = self
            .state
            .contact
            .active_field()
            .is_some_and(|f| f.is_multiline());

        match key.code {
            KeyCode::Esc => {
                if !self.state.contact.fields().is_empty() {
                    self.state.show_message("Draft kept, press 5 to return");
                }
                self.state.navigate(View::Home);
            }
            // Submit (Ctrl+S)
            KeyCode::Char('s') if ctrl => self.submit_contact_form(),
            KeyCode::Char('y') if ctrl => self.copy_contact_email(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Tab => self.state.contact.next_field(),
            KeyCode::BackTab => self.state.contact.prev_field(),
            KeyCode::Down if !in_message => self.state.contact.next_field(),
            KeyCode::Up if !in_message => self.state.contact.prev_field(),
            KeyCode::Enter => {
                if self.state.contact.is_submit_button_active() {
                    self.submit_contact_form();
                } else if in_message {
                    self.state.contact.insert_newline();
                } else {
                    self.state.contact.next_field();
                }
            }
            KeyCode::Char(c) => self.state.contact.input_char(c),
            KeyCode::Backspace => self.state.contact.backspace(),
            _ => {}
        }
    }

    /// Validate the contact form and, if clean, deliver it in the background.
    ///
    /// The outcome is picked up by `tick` on the UI thread.
    fn submit_contact_form(&mut self) {
        let Some(fields) = self.state.contact.begin_submit() else {
            if !self.state.contact.errors().is_empty() {
                self.state.show_message("Please fix the highlighted fields");
            }
            return;
        };

        info!("Submitting contact form through {}", self.gateway.name());
        let gateway = Arc::clone(&self.gateway);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = gateway.deliver(&fields).await;
            if tx.send(outcome).is_err() {
                debug!("App closed before delivery finished");
            }
        });
    }

    fn copy_contact_email(&mut self) {
        match self.copy_to_clipboard(PROFILE.email) {
            Ok(()) => self
                .state
                .show_message(format!("Copied {} to clipboard", PROFILE.email)),
            Err(e) => {
                warn!("Clipboard unavailable: {e}");
                self.state.show_message(format!("Email: {}", PROFILE.email));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
