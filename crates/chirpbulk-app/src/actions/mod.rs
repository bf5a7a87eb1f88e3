//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action runs in its own tokio task and reports back with exactly one
//! completion message.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use chirpbulk_api::{DeviceRegistry, Session};
use chirpbulk_core::prelude::*;
use chirpbulk_core::ResourceKind;

use crate::catalog::load_items;
use crate::file_browser::scan_directory;
use crate::import::{import_devices, ImportTarget};
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::Connect {
            address,
            credential,
        } => {
            spawn_connect(address, credential, msg_tx);
        }

        UpdateAction::LoadItems {
            kind,
            tenant_id,
            session,
        } => match session {
            Some(session) => {
                spawn_load_items(session, kind, tenant_id, msg_tx);
            }
            None => warn!("LoadItems for {} dispatched without a session", kind),
        },

        UpdateAction::ScanDirectory { path, show_hidden } => {
            spawn_directory_scan(path, show_hidden, msg_tx);
        }

        UpdateAction::ImportDevices { target, session } => match session {
            Some(session) => {
                spawn_import(session, target, msg_tx);
            }
            None => warn!("ImportDevices dispatched without a session"),
        },
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed, dropping completion");
    }
}

/// Open a session and report `Connected` or `ConnectionFailed`
pub fn spawn_connect(
    address: String,
    credential: String,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let message = match Session::connect(&address, &credential).await {
            Ok(session) => Message::Connected { session },
            Err(e) => {
                error!("{}", e);
                Message::ConnectionFailed {
                    error: e.to_string(),
                }
            }
        };
        send(&msg_tx, message).await;
    })
}

/// Load one selection list through `registry`
pub fn spawn_load_items<R>(
    registry: R,
    kind: ResourceKind,
    tenant_id: Option<String>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    R: DeviceRegistry + Sync + 'static,
{
    tokio::spawn(async move {
        let loaded = load_items(&registry, kind, tenant_id.as_deref())
            .await
            .with_context(|| format!("Loading {} failed", kind));
        let message = match loaded {
            Ok(items) => Message::ItemsLoaded { kind, items },
            Err(e) => Message::ItemsLoadFailed {
                kind,
                error: e.to_string(),
            },
        };
        send(&msg_tx, message).await;
    })
}

/// Run the CSV import through `registry`
pub fn spawn_import<R>(
    registry: R,
    target: ImportTarget,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    R: DeviceRegistry + Sync + 'static,
{
    tokio::spawn(async move {
        let imported = import_devices(&registry, &target)
            .await
            .context("Import failed");
        let message = match imported {
            Ok(result) => Message::ImportCompleted { result },
            Err(e) => Message::ImportFailed {
                error: e.to_string(),
            },
        };
        send(&msg_tx, message).await;
    })
}

/// Read a directory on the blocking pool
pub fn spawn_directory_scan(
    path: PathBuf,
    show_hidden: bool,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let scan_path = path.clone();
        let scanned =
            tokio::task::spawn_blocking(move || scan_directory(&scan_path, show_hidden)).await;

        let message = match scanned {
            Ok(Ok(entries)) => Message::DirectoryScanned { path, entries },
            Ok(Err(e)) => Message::DirectoryScanFailed {
                path,
                error: e.to_string(),
            },
            Err(e) => Message::DirectoryScanFailed {
                path,
                error: format!("Directory scan task failed: {}", e),
            },
        };
        send(&msg_tx, message).await;
    })
}
