//! Main update function - handles state transitions (TEA pattern)

use chirpbulk_core::prelude::*;

use crate::message::Message;
use crate::selection::SelectionList;
use crate::state::{AppState, WizardStep};

use super::{keys::handle_key, wizard, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Signal(signal) => {
            info!("Received {} in {:?}, shutting down", signal, state.step);
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => {
            if state.step == WizardStep::Connecting && !state.is_busy() {
                state.token_input.push_str(&text);
            }
            UpdateResult::none()
        }

        Message::Tick => {
            if state.is_busy() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Credential Messages
        // ─────────────────────────────────────────────────────────
        Message::TokenInput(c) => {
            state.token_input.push(c);
            UpdateResult::none()
        }
        Message::TokenBackspace => {
            state.token_input.backspace();
            UpdateResult::none()
        }
        Message::TokenClear => {
            state.token_input.clear();
            UpdateResult::none()
        }
        Message::SubmitCredential => wizard::handle_submit_credential(state),
        Message::Connected { session } => wizard::handle_connected(state, session),
        Message::ConnectionFailed { error } => wizard::handle_connection_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(nav) => {
            if state.step == WizardStep::FileSelect {
                state.file_browser.navigate(nav);
            } else if state.step.list_kind().is_some() {
                state.selection.navigate(nav);
            }
            UpdateResult::none()
        }
        Message::ConfirmSelection => wizard::handle_confirm_selection(state),
        Message::ItemsLoaded { kind, items } => wizard::handle_items_loaded(state, kind, items),
        Message::ItemsLoadFailed { kind, error } => {
            wizard::handle_items_load_failed(state, kind, error)
        }
        Message::FilterStart => edit_filter(state, SelectionList::start_filter),
        Message::FilterInput(c) => edit_filter(state, |list| list.push_filter(c)),
        Message::FilterBackspace => edit_filter(state, SelectionList::pop_filter),
        Message::FilterAccept => edit_filter(state, SelectionList::accept_filter),
        Message::FilterClear => edit_filter(state, SelectionList::clear_filter),

        // ─────────────────────────────────────────────────────────
        // File Browser Messages
        // ─────────────────────────────────────────────────────────
        Message::BrowserOpen => wizard::handle_browser_open(state),
        Message::BrowserParent => wizard::handle_browser_parent(state),
        Message::BrowserToggleHidden => wizard::handle_browser_toggle_hidden(state),
        Message::DirectoryScanned { path, entries } => {
            wizard::handle_directory_scanned(state, path, entries)
        }
        Message::DirectoryScanFailed { path, error } => {
            wizard::handle_directory_scan_failed(state, path, error)
        }
        Message::FileChosen { path } => wizard::handle_file_chosen(state, path),

        // ─────────────────────────────────────────────────────────
        // Import Messages
        // ─────────────────────────────────────────────────────────
        Message::ImportCompleted { result } => wizard::handle_import_completed(state, result),
        Message::ImportFailed { error } => wizard::handle_import_failed(state, error),
    }
}

/// Filter edits only apply on the list steps
fn edit_filter(state: &mut AppState, edit: impl FnOnce(&mut SelectionList)) -> UpdateResult {
    if state.step.list_kind().is_some() {
        edit(&mut state.selection);
    }
    UpdateResult::none()
}
