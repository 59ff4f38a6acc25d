mod app;
mod error;
mod input;
mod paths;
mod store;
mod terminal;
mod view;

use std::fs::{self, File};
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, error, info, warn};
use loginform::prelude::*;
use loginform::wakeup;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::LoginApp;
use error::AppError;
use store::SqliteStore;
use terminal::TerminalGuard;

/// Log to a file; the terminal is in raw mode.
fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

async fn open_store() -> Result<Arc<dyn PersistenceStore>, AppError> {
    match paths::session_db() {
        Some(path) => {
            info!("Session store at {}", path.display());
            Ok(Arc::new(SqliteStore::open(&path).await?))
        }
        None => {
            warn!("No data directory, session will not be persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn run_loop(mut app: LoginApp, mut wakeup_rx: WakeupReceiver) -> Result<(), AppError> {
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    terminal.draw(&app)?;

    while !app.should_quit() {
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await?;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!("Event stream error: {}", e);
                    return Err(e.into());
                }
                None => break,
            },
            Some(()) = wakeup_rx.recv() => {
                debug!("Wakeup: form evaluation landed");
                wakeup_rx.drain();
            }
        }
        terminal.draw(&app)?;
    }

    Ok(())
}

async fn run() -> Result<(), AppError> {
    init_logging();

    let session = Session::restore_shared(open_store().await?).await?;
    let (wakeup_tx, wakeup_rx) = wakeup::channel();
    let app = LoginApp::new(session, FormConfig::default(), wakeup_tx)?;

    run_loop(app, wakeup_rx).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
