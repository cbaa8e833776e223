//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod projects;
mod sections;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => sections::draw_home(frame, main_area, app),
        View::Skills => sections::draw_skills(frame, main_area, app),
        View::Experience => sections::draw_experience(frame, main_area, app),
        View::Projects => projects::draw(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
