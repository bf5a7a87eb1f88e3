//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per wizard step
//! - `wizard`: Step transitions and completion handling

pub(crate) mod keys;
pub(crate) mod update;
pub(crate) mod wizard;


use std::path::PathBuf;

use chirpbulk_api::Session;
use chirpbulk_core::ResourceKind;

use crate::import::ImportTarget;
use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Open a session to the server
    Connect { address: String, credential: String },

    /// Fetch a resource list.
    ///
    /// `session` is `None` when returned by `update()` and hydrated by
    /// `process.rs` from `AppState::session` before dispatch.
    LoadItems {
        kind: ResourceKind,
        tenant_id: Option<String>,
        session: Option<Session>,
    },

    /// Read a directory for the file browser
    ScanDirectory { path: PathBuf, show_hidden: bool },

    /// Run the CSV import. `session` is hydrated like `LoadItems`.
    ImportDevices {
        target: ImportTarget,
        session: Option<Session>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
