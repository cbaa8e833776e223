//! Field rendering utilities for forms

use crate::state::{ContactForm, FieldName};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a single-line field occupies (border + value + border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one contact form field with its label, value and validation error
pub fn draw_field(frame: &mut Frame, area: Rect, form: &ContactForm, field: FieldName) {
    let is_active = form.active_field() == Some(field) && !form.is_submitting();
    let has_error = form.errors().contains(field);

    let border_style = match (has_error, is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let value = form.fields().get(field);
    let value_style = if value.is_empty() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if form.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let display_value = form.fields().display_value(field);

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if value.is_empty() {
                lines.insert(0, Line::from(Span::styled(cursor, cursor_style)));
            } else if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        Paragraph::new(lines)
    } else if is_active && value.is_empty() {
        Paragraph::new(Line::from(Span::styled(cursor, cursor_style)))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = form.errors().get(field) {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
