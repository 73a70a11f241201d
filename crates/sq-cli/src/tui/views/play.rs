use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let (Some(profile), Some(checkpoint)) =
        (app.engine.current_profile(), app.engine.current_checkpoint())
    else {
        return;
    };
    let accent = theme::accent(Some(profile.id.as_str()));
    let challenge = &checkpoint.challenge;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Feedback
            Constraint::Min(0),    // Body
        ])
        .split(area);

    if let Some(progress) = app.engine.progress() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent))
            .ratio(progress.fraction())
            .label(progress.label());
        frame.render_widget(gauge, rows[0]);
    }

    if let Some(ref feedback) = app.feedback {
        let color = if feedback.correct { Color::Green } else { Color::Yellow };
        let mut text = feedback.message.to_string();
        for (virtue, amount) in &feedback.reward {
            text.push_str(&format!("  +{amount} {virtue}"));
        }
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(color).bold()),
            rows[1],
        );
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(rows[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    let story = Paragraph::new(checkpoint.story.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", checkpoint.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );
    frame.render_widget(story, left[0]);

    let mut items = vec![
        ListItem::new(Line::from(Span::styled(
            challenge.prompt().to_string(),
            Style::default().fg(Color::Cyan),
        ))),
        ListItem::new(""),
    ];
    items.extend(
        challenge
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| ListItem::new(format!("{}. {option}", i + 1))),
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(
                    " {} ({}) ",
                    challenge.kind().heading(),
                    challenge.kind().submit_label()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("▶ ");

    // Options start after the prompt and a blank line.
    let mut state = ListState::default();
    state.select(Some(app.cursor + 2));
    frame.render_stateful_widget(list, left[1], &mut state);

    let mut sidebar = vec![
        Line::from(profile.glyph.as_str()).alignment(Alignment::Center),
        Line::from(profile.display_name.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().bold()),
        Line::from(""),
    ];
    sidebar.extend(super::virtue_badges(app));

    let profile_card = Paragraph::new(sidebar).block(
        Block::default()
            .title(" Virtues ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );
    frame.render_widget(profile_card, columns[1]);
}
