//! Project gallery view: filter tabs, project list and detail pane

use crate::app::App;
use crate::content::{Project, ProjectFilter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

/// Draw the project gallery
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter tabs
            Constraint::Min(0),    // List + detail
        ])
        .split(area);

    draw_filter_tabs(frame, chunks[0], app.state.project_filter);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let projects = app.state.filtered_projects();
    draw_list(frame, body[0], &projects, app.state.selected_index);
    draw_detail(frame, body[1], app.state.selected_project());
}

fn draw_filter_tabs(frame: &mut Frame, area: Rect, filter: ProjectFilter) {
    let selected = ProjectFilter::ALL
        .iter()
        .position(|f| *f == filter)
        .unwrap_or(0);
    let tabs = Tabs::new(ProjectFilter::ALL.iter().map(|f| f.label()))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Filter (f/F) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(tabs, area);
}

fn draw_list(frame: &mut Frame, area: Rect, projects: &[&'static Project], selected_index: usize) {
    let block = Block::default()
        .title(format!(" Projects ({}) ", projects.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if projects.is_empty() {
        let content = Paragraph::new("No projects in this category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let is_selected = idx == selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let marker = if project.featured { " ★" } else { "" };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(project.title, style.add_modifier(Modifier::BOLD)),
                Span::styled(marker, Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    // ListState keeps the selected row scrolled into view
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

fn draw_detail(frame: &mut Frame, area: Rect, project: Option<&Project>) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(project) = project else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            project.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.category.label(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let badges = project.badges();
    if !badges.is_empty() {
        let spans: Vec<Span> = badges
            .iter()
            .flat_map(|b| {
                [
                    Span::styled(
                        format!(" {b} "),
                        Style::default().fg(Color::Black).bg(Color::Yellow),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(project.description));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        project.tags.join(" · "),
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(""));

    let repo_line = match project.repository() {
        Some(url) => Line::from(vec![
            Span::styled("Code: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                url,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        None => Line::from(Span::styled(
            "Private repository",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };
    lines.push(repo_line);

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(detail, area);
}
