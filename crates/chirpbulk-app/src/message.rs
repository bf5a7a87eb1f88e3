//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use chirpbulk_api::Session;
use chirpbulk_core::{ImportResult, ResourceKind, SelectionItem};

use crate::file_browser::BrowserEntry;
use crate::input_key::InputKey;
use crate::selection::Navigation;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Bracketed paste from terminal
    Paste(String),
    /// Tick event for periodic updates (spinner)
    Tick,
    /// Request to quit the application
    Quit,
    /// SIGINT/SIGTERM received
    Signal(ShutdownSignal),

    // ─────────────────────────────────────────────────────────
    // Credential Messages
    // ─────────────────────────────────────────────────────────
    TokenInput(char),
    TokenBackspace,
    TokenClear,
    /// Connect with the typed token
    SubmitCredential,
    /// Connection established
    Connected { session: Session },
    ConnectionFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    Navigate(Navigation),
    /// Enter on the highlighted list item or browser entry
    ConfirmSelection,
    ItemsLoaded {
        kind: ResourceKind,
        items: Vec<SelectionItem>,
    },
    ItemsLoadFailed { kind: ResourceKind, error: String },
    /// `/` on a list: start typing a title filter
    FilterStart,
    FilterInput(char),
    FilterBackspace,
    /// Keep the typed filter and return keys to the list
    FilterAccept,
    FilterClear,

    // ─────────────────────────────────────────────────────────
    // File Browser Messages
    // ─────────────────────────────────────────────────────────
    /// Open the highlighted directory
    BrowserOpen,
    BrowserParent,
    BrowserToggleHidden,
    DirectoryScanned {
        path: PathBuf,
        entries: Vec<BrowserEntry>,
    },
    DirectoryScanFailed { path: PathBuf, error: String },
    /// A CSV file was picked
    FileChosen { path: PathBuf },

    // ─────────────────────────────────────────────────────────
    // Import Messages
    // ─────────────────────────────────────────────────────────
    ImportCompleted { result: ImportResult },
    ImportFailed { error: String },
}
