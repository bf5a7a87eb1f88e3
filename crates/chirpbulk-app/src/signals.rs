//! Shutdown on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! Raw mode swallows the terminal's Ctrl+C, so SIGINT normally only arrives
//! from outside (`kill -INT`). Either signal ends the wizard the same way as
//! the quit key, with the session closed by the update loop.

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use chirpbulk_core::prelude::*;

use crate::message::Message;

/// OS signal that ended the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Forward the first shutdown signal to the update loop
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(signal) => {
                if msg_tx.send(Message::Signal(signal)).await.is_err() {
                    debug!("{} arrived after the wizard stopped", signal);
                }
            }
            Err(e) => warn!("Shutdown signals are not handled: {}", e),
        }
    })
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    let signal = tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    };
    Ok(signal)
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
