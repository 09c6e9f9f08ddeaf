pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use easy_widget_core::{IntentSink, SharedStore};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

/// Show the widget until the user quits, then hand over any links the
/// control emitted.
pub fn run<S: SharedStore, I: IntentSink>(mut app: App<S>, sink: &mut I) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    app.sink.flush_into(sink)
}

fn run_app<B: Backend, S: SharedStore>(terminal: &mut Terminal<B>, app: &mut App<S>) -> io::Result<()> {
    // Placeholder first, then the real entry.
    terminal
        .draw(|f| ui::draw(f, app))
        .map_err(|e| io::Error::other(e.to_string()))?;
    app.load();

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => app.refresh(),
                    KeyCode::Char(' ') | KeyCode::Enter => app.activate(),
                    _ => {}
                }
            }
        }
    }
}
