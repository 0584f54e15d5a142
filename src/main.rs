// src/main.rs

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use docval::app::{App, KeyAction, Message};
use docval::config::Config;
use docval::core::client::ValidationClient;
use docval::core::submit::{dispatch_submit, spawn_probe};
use docval::{logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    let client = ValidationClient::new(&config).wrap_err("failed to build HTTP client")?;
    info!(log = %log_path.display(), endpoint = %client.validate_url(), "Starting docval.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &client).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, client: &ValidationClient) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<Message>(8);
    spawn_probe(client, &tx);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == KeyAction::Submit {
                    if let Err(rejection) = dispatch_submit(&mut app, client, &tx) {
                        debug!(?rejection, "Submit did not start a request.");
                    }
                }
            }
        } else {
            app.on_tick();
        }

        while let Ok(message) = rx.try_recv() {
            app.apply(message);
        }
    }

    info!("Shutting down.");
    Ok(())
}
