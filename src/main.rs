//! pkglog - terminal changelog viewer
//!
//! Binary entry point for the TUI application.

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use pkglog::api::FixtureApi;
use pkglog::app::App;
use pkglog::config::{Args, Config};
use pkglog::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::from_args(Args::parse())?;
    let _log_guard = logging::init(config.log_file.clone())?;

    let api = FixtureApi::new(&config.changelog_dir).with_latency(config.latency);
    let app = App::new(config.package, config.location, Arc::new(api))
        .with_more_packages(config.more_packages);

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture)?;
    let _mouse = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableMouseCapture);
    });

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with a 100ms timeout so that finished changelog fetches are
/// applied even when no input arrives.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => app.on_mouse_event(mouse),
            _ => {}
        }
    }
    app.tick();
    Ok(())
}
