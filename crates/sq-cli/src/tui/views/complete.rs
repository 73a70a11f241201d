use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use sq_engine::console::COMPLETION_QUOTE;

use crate::tui::app::App;
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let Some(profile) = app.engine.current_profile() else {
        return;
    };

    let mut lines = vec![
        Line::from("Sainthood Unlocked!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).bold()),
        Line::from("😇").alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "You have completed the journey of {}.",
            profile.display_name
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            COMPLETION_QUOTE,
            Style::default().fg(Color::Gray).italic(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from("Final Virtue Profile")
            .alignment(Alignment::Center)
            .style(Style::default().bold()),
    ];

    for (virtue, total) in app.engine.virtues().iter() {
        lines.push(
            Line::from(Span::styled(
                format!("{virtue}: {total}"),
                Style::default().fg(theme::virtue_color(virtue)),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from("Press Enter to start a new journey")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
    );

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(card, area);
}
