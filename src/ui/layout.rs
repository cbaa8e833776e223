//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::PROFILE;
use crate::state::{SubmissionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar: name header followed by one boxed button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(2)]; // Header
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            PROFILE.short_name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(".dev", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, chunks[0]);

    for (idx, view) in View::ALL.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &view.key().to_string(),
            view.label(),
            is_selected,
            true,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Delivery indicator
    let indicator = match app.state.contact.phase() {
        SubmissionPhase::Pending => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionPhase::Error => Span::styled(" ● ", Style::default().fg(Color::Red)),
        SubmissionPhase::Idle | SubmissionPhase::Success => {
            Span::styled(" ● ", Style::default().fg(Color::Green))
        }
    };
    spans.push(indicator);

    // View-specific hints
    spans.push(Span::styled(
        view_hints(app.state.current_view),
        Style::default().fg(Color::DarkGray),
    ));

    // Transient message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&msg.text, Style::default().fg(Color::Green)));
    }

    // Gateway name
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("✉ {}", app.gateway_name()),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(view: View) -> &'static str {
    match view {
        View::Home | View::Skills | View::Experience => {
            "1-5:view  Tab:next  j/k:scroll  y:copy email  q:quit"
        }
        View::Projects => "j/k:nav  f/F:filter  Enter:copy link  y:copy email  q:quit",
        View::Contact => "Tab:next field  Enter:submit  ^S:send  ^Y:copy email  Esc:back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_sidebar_and_status_bar() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(sidebar.height, 39);
        assert_eq!(main.x, SIDEBAR_WIDTH);
        assert_eq!(main.width, 80);
        assert_eq!(main.height, 39);
    }

    #[test]
    fn test_contact_hints_mention_form_keys() {
        let hints = view_hints(View::Contact);
        assert!(hints.contains("^S"));
        assert!(hints.contains("Esc"));
    }
}
