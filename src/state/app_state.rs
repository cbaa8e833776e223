//! Application state definitions

use super::forms::ContactForm;
use crate::content::{filter_projects, Project, ProjectFilter};
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl View {
    /// Views in sidebar order
    pub const ALL: [View; 5] = [
        View::Home,
        View::Skills,
        View::Experience,
        View::Projects,
        View::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Sidebar shortcut key
    pub fn key(&self) -> char {
        match self {
            Self::Home => '1',
            Self::Skills => '2',
            Self::Experience => '3',
            Self::Projects => '4',
            Self::Contact => '5',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == c)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

/// Transient feedback line shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

impl StatusMessage {
    /// How long a status message stays visible
    const DURATION: Duration = Duration::from_secs(3);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::DURATION
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Projects gallery
    pub project_filter: ProjectFilter,
    pub selected_index: usize,

    // UI state
    pub scroll_offset: usize,
    pub status_message: Option<StatusMessage>,

    // Contact form
    pub contact: ContactForm,
}

impl AppState {
    /// Switch view, resetting per-view scroll and selection
    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.reset_selection();
        }
    }

    /// Projects visible under the current filter
    pub fn filtered_projects(&self) -> Vec<&'static Project> {
        filter_projects(self.project_filter)
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.filtered_projects().get(self.selected_index).copied()
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn next_project_filter(&mut self) {
        self.set_project_filter(self.project_filter.next());
    }

    pub fn prev_project_filter(&mut self) {
        self.set_project_filter(self.project_filter.prev());
    }

    /// Change the gallery filter, clamping the selection to the new list
    pub fn set_project_filter(&mut self, filter: ProjectFilter) {
        self.project_filter = filter;
        let len = self.filtered_projects().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(text));
    }

    /// Drop the status message once it has expired
    pub fn clear_expired_message(&mut self) {
        if self
            .status_message
            .as_ref()
            .is_some_and(StatusMessage::is_expired)
        {
            self.status_message = None;
        }
    }
}
