//! Contact form rendering with the contact info panel

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::content::{CONTACT_CHANNELS, PROFILE};
use crate::state::{ContactForm, FieldName, SubmissionStatus};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Banner rows (border + title + wrapped description + border)
const BANNER_HEIGHT: u16 = 6;

/// Draw the contact view: form (left) and contact info (right)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(34), // Contact info
        ])
        .split(area);

    draw_form(frame, main_chunks[0], &app.state.contact);
    draw_contact_info(frame, main_chunks[1]);
}

/// Draw the form fields, submit button and status banner
fn draw_form(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let border_color = if form.is_submitting() {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Send Me a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if form.status().is_set() {
        BANNER_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Status banner
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Subject
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    if form.status().is_set() {
        let remaining = form
            .status_timer()
            .map(|timer| timer.remaining(Instant::now()).as_secs() + 1);
        draw_banner(frame, chunks[0], form.status(), remaining);
    }

    for field in FieldName::ALL {
        draw_field(frame, chunks[field.index() + 1], form, field);
    }

    let label = if form.is_submitting() {
        "Sending Message..."
    } else {
        "Send Message"
    };
    render_action_button(
        frame,
        chunks[5],
        label,
        form.is_submit_button_active(),
        !form.is_submitting(),
    );
}

/// Success or error banner above the fields
fn draw_banner(frame: &mut Frame, area: Rect, status: SubmissionStatus, remaining: Option<u64>) {
    let color = match status {
        SubmissionStatus::Success => Color::Green,
        SubmissionStatus::Error => Color::Red,
        SubmissionStatus::Unset => return,
    };
    let icon = if status == SubmissionStatus::Success {
        "✓"
    } else {
        "✗"
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{icon} {}", status.title().unwrap_or_default()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(status.description().unwrap_or_default()),
    ];

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(secs) = remaining {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" clears in {secs}s "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(banner, area);
}

/// Contact channels and response note
fn draw_contact_info(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Let's talk about your ideas",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));

    for channel in CONTACT_CHANNELS {
        lines.push(Line::from(Span::styled(
            channel.label,
            Style::default().fg(Color::DarkGray),
        )));
        let value_style = if channel.href.is_some() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(channel.value, value_style)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        PROFILE.response_note,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
    )));

    let info = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Get In Touch ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(info, area);
}
