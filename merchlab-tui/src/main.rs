//! MerchLab TUI — merchant growth dashboard.
//!
//! Usage: `merchlab-tui [transactions.csv]`
//!
//! With no argument, a deterministic sample table is generated so the
//! dashboard is explorable out of the box.

use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use merchlab_core::TableCache;
use merchlab_tui::{app::App, handle_key_event, panels, Theme};
use merchlab_tui::{persistence, sample_data};

fn main() -> Result<()> {
    // Restore the terminal before printing any panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let data_path = std::env::args().nth(1).map(PathBuf::from);
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("merchlab")
        .join("state.json");

    let persisted = persistence::load(&state_path);
    let (filter, ranking, coordinator, active_panel) = persistence::restore(persisted);

    let (transactions, data_label) = match &data_path {
        Some(path) => {
            let mut cache = TableCache::new();
            let table = cache
                .load(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            (table, path.display().to_string())
        }
        None => (
            Arc::new(sample_data::sample_transactions()),
            "sample data".to_string(),
        ),
    };

    let mut app = App::new(transactions, data_label, filter, ranking, coordinator);
    app.active_panel = active_panel;

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save UI state before exit; the click selection is deliberately not
    // part of it.
    let _ = persistence::save(&state_path, &persistence::extract(&app));

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let theme = Theme::default();

    while !app.should_quit {
        terminal.draw(|frame| panels::draw(frame, app, &theme))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key);
                }
            }
        }
    }

    Ok(())
}
