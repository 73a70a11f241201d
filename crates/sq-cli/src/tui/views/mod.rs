pub mod complete;
pub mod play;
pub mod select;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use sq_engine::Phase;

use super::app::App;
use super::theme;

pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let accent = theme::accent(app.engine.session().profile_id());
    let mut spans = vec![Span::styled(
        " Saint Quest ",
        Style::default().fg(Color::Black).bg(accent).bold(),
    )];
    if let Some(profile) = app.engine.current_profile() {
        spans.push(Span::raw(format!("  {} {}", profile.glyph, profile.display_name)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref error) = app.error {
        let bar = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::White).bg(Color::Red));
        frame.render_widget(bar, area);
        return;
    }

    let status = match app.engine.phase() {
        Phase::Selecting => format!(
            "{} heroes | j/k:navigate Enter:begin 1-9:pick ?:help q:quit",
            app.engine.catalog().profile_count()
        ),
        Phase::Playing => {
            let label = app
                .engine
                .progress()
                .map(|p| p.label())
                .unwrap_or_default();
            format!("{label} | j/k:navigate Enter:answer 1-9:pick ?:help q:quit")
        }
        Phase::Complete => "Journey complete | Enter/r:new journey ?:help q:quit".to_string(),
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  j / ↓       Move down"),
        Line::from("  k / ↑       Move up"),
        Line::from("  Enter       Begin / answer / new journey"),
        Line::from("  1-9         Pick a row directly"),
        Line::from("  r           New journey (when complete)"),
        Line::from("  Esc         Clear message"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Badge spans for every virtue with a non-zero total.
pub fn virtue_badges(app: &App) -> Vec<Line<'static>> {
    app.engine
        .virtues()
        .earned()
        .map(|(virtue, total)| {
            Line::from(Span::styled(
                format!(" {virtue}: {total} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(theme::virtue_color(virtue)),
            ))
        })
        .collect()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
