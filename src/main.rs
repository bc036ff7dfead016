mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::watch;

use view::AppView;
use controller::{AppController, PlaybackSession};
use model::{AppModel, Catalog, PlaybackStatus, PlayerConfig, SessionState};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== podcast-rs starting ===");

    let catalog = Catalog::mock()?;
    let model = AppModel::new(catalog);
    let session = PlaybackSession::new(PlayerConfig::default());

    tokio::spawn(log_session_changes(session.subscribe()));

    let mut controller = AppController::new(model, session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the controller stops any running tick task
    drop(controller);

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err.into());
    }

    tracing::info!("podcast-rs shutting down");
    Ok(())
}

/// Log episode changes and play/pause transitions as they happen.
async fn log_session_changes(mut updates: watch::Receiver<SessionState>) {
    let mut last_episode: Option<String> = None;
    let mut last_status = PlaybackStatus::Stopped;

    while updates.changed().await.is_ok() {
        let (episode, status, progress) = {
            let state = updates.borrow_and_update();
            (
                state.current_episode().map(|e| e.id.clone()),
                state.status(),
                state.progress(),
            )
        };

        if episode != last_episode {
            tracing::info!(episode_id = ?episode, "Current episode changed");
            last_episode = episode;
        }
        if status != last_status {
            tracing::info!(from = ?last_status, to = ?status, progress, "Playback status changed");
            last_status = status;
        }
    }

    tracing::debug!("Session closed, change logger exiting");
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
) -> io::Result<()> {
    loop {
        controller.tick();

        let playback = controller.playback();
        terminal.draw(|f| {
            AppView::render(f, controller.model(), &playback);
        })?;

        // Short poll so the progress bar keeps moving between key presses
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key);
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
