// src/main.rs

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

mod app;
mod core;
mod logging;
mod ui;

use app::{App, AppState};
use crate::core::models::{ScanError, ScanOutcome};
use crate::core::scanner;

type ScanCompletion = Result<ScanOutcome, ScanError>;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<ScanCompletion>(8);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        } else {
            app.on_tick();
        }

        // Drain every completion that arrived since the last frame; with
        // overlapping scans the latest one wins the result view.
        while let Ok(result) = rx.try_recv() {
            app.complete_scan(result);
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler, dispatching on the app state.
fn handle_events(app: &mut App, tx: &mpsc::Sender<ScanCompletion>) -> std::io::Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, tx),
                AppState::Finished => handle_finished_input(app, key.code),
                AppState::Scanning => handle_scanning_input(app, key.code),
            }
        }
    }
    Ok(())
}

/// Input while typing a target. Esc quits so that 'q' stays typable in
/// URLs and file names.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<ScanCompletion>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            if app.input.trim().is_empty() {
                return;
            }
            app.begin_scan();
            let target = app.input.clone();
            let tx_clone = tx.clone();
            tokio::spawn(async move {
                let result = scanner::run_scan(target, scanner::SCAN_DELAY).await;
                let _ = tx_clone.send(result).await;
            });
        }
        _ => {}
    }
}

/// Input while a result is on screen.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('s') => {
            app.save_result();
        }
        KeyCode::Char('d') => app.toggle_dashboard(),
        KeyCode::Char('e') => app.export_latest(&logging::get_evidence_dir()),
        _ => {}
    }
}

/// Input while at least one scan is in flight.
fn handle_scanning_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('d') => app.toggle_dashboard(),
        _ => {}
    }
}
