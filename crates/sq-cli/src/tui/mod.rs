mod app;
mod theme;
mod views;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use sq_engine::{Phase, QuestEngine};

use app::App;

pub fn run(engine: QuestEngine) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(engine);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }

            match key.code {
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('j') | KeyCode::Down => app.move_down(),
                KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char('?') => app.toggle_help(),
                KeyCode::Esc => app.dismiss(),
                KeyCode::Char(c) => {
                    if let Some(n) = c.to_digit(10) {
                        app.pick(n as usize);
                    }
                }
                _ => {}
            }
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_title_bar(frame, app, chunks[0]);

    match app.engine.phase() {
        Phase::Selecting => views::select::draw(frame, app, chunks[1]),
        Phase::Playing => views::play::draw(frame, app, chunks[1]),
        Phase::Complete => views::complete::draw(frame, app, chunks[1]),
    }

    views::draw_status_bar(frame, app, chunks[2]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
