use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::tui::app::App;
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = app.engine.catalog();
    let items: Vec<ListItem> = catalog
        .profiles()
        .iter()
        .map(|p| {
            let name = Line::from(vec![
                Span::raw(format!("{} ", p.glyph)),
                Span::styled(
                    p.display_name.as_str(),
                    Style::default().fg(theme::accent(Some(p.id.as_str()))).bold(),
                ),
                Span::styled(
                    format!("  {} chapters", catalog.checkpoints(&p.id).len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let tags = Line::from(Span::styled(
                format!("   Virtues: {}", p.tags_label()),
                Style::default().fg(Color::Gray).italic(),
            ));
            ListItem::new(vec![name, tags])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose Your Hero ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
