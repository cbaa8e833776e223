//! Scrollable section views (About, Skills, Experience)

use crate::app::App;
use crate::content::{
    Experience, ExperienceKind, CERTIFICATIONS, HIGHLIGHTS, PROFILE, SKILL_CATEGORIES,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of a skill level bar in cells
const LEVEL_BAR_WIDTH: usize = 20;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

/// Render section lines inside a bordered, scrollable paragraph
fn draw_scrollable(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, app: &App) {
    let offset = u16::try_from(app.state.scroll_offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}

/// Hero, about text and highlights
pub fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Hi, I'm "),
            Span::styled(
                PROFILE.name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(PROFILE.tagline),
        Line::from(muted(PROFILE.location)),
        Line::from(""),
        heading("About Me"),
    ];

    for paragraph in PROFILE.about {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }

    lines.push(heading("Technologies I work with"));
    lines.push(Line::from(PROFILE.technologies.join(" · ")));
    lines.push(Line::from(""));

    lines.push(heading("Highlights"));
    for highlight in HIGHLIGHTS {
        lines.push(Line::from(Span::styled(
            format!("▸ {}", highlight.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![Span::raw("  "), muted(highlight.description)]));
    }

    draw_scrollable(frame, area, "About", lines, app);
}

/// Text gauge for a 0-100 skill level
fn level_bar(level: u8) -> String {
    let filled = usize::from(level.min(100)) * LEVEL_BAR_WIDTH / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(LEVEL_BAR_WIDTH - filled)
    )
}

/// Skill categories with level gauges
pub fn draw_skills(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![];

    for category in SKILL_CATEGORIES {
        lines.push(heading(category.title));
        lines.push(Line::from(muted(category.description)));
        for skill in category.skills {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<22}", skill.name)),
                Span::styled(level_bar(skill.level), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {:>3}%", skill.level)),
            ]));
        }
        lines.push(Line::from(""));
    }

    draw_scrollable(frame, area, "Skills", lines, app);
}

fn experience_lines(entry: &Experience) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                entry.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" @ "),
            Span::styled(entry.company.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(muted(&format!(
            "{} · {} · {}",
            entry.period, entry.employment, entry.location
        ))),
        Line::from(format!("  {}", entry.description)),
    ];
    if !entry.skills.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  [{}]", entry.skills.join("] [")),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// Work, organization and education history plus certifications
pub fn draw_experience(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![];

    for kind in ExperienceKind::ALL {
        lines.push(heading(kind.label()));
        for entry in Experience::of_kind(kind) {
            lines.extend(experience_lines(entry));
        }
    }

    lines.push(heading("Certifications"));
    for cert in CERTIFICATIONS {
        lines.push(Line::from(vec![
            Span::raw(format!("▸ {}", cert.name)),
            Span::raw(" "),
            muted(&format!("{} · {}", cert.issuer, cert.year)),
        ]));
    }

    draw_scrollable(frame, area, "Experience", lines, app);
}
