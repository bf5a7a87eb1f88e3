//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use chirpbulk_app::config::Settings;
use chirpbulk_app::message::Message;
use chirpbulk_app::state::AppState;
use chirpbulk_app::{process, signals};
use chirpbulk_core::logging;
use chirpbulk_core::prelude::*;

use crate::{event, render, terminal};

/// Run the import wizard until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting wizard: server={}, start_dir={:?}",
        settings.server.address,
        settings.import.resolved_start_dir()
    );

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("{}", e);
    }

    let mut state = AppState::new(settings);
    state.log_dir = Some(logging::log_directory());

    // Background tasks and the signal handler report through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_handler = signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);
    signal_handler.abort();

    // Covers exits that did not go through Message::Quit (loop errors)
    if let Some(session) = state.session.take() {
        session.close();
    }

    terminal::disable_paste();
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Completions from background tasks and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx);
        }
        if state.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx);
        }
    }

    info!("Wizard finished in step {:?}", state.step);
    Ok(())
}
