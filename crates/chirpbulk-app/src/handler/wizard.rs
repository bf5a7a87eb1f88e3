//! Wizard step transitions
//!
//! Every request-starting handler checks `in_flight` first so a repeated
//! Enter never issues a second RPC. Completion handlers drop results that do
//! not match the pending request.

use std::path::PathBuf;

use chirpbulk_api::Session;
use chirpbulk_core::prelude::*;
use chirpbulk_core::{ImportResult, ResourceKind, SelectionItem};

use crate::file_browser::{is_csv, BrowserEntry};
use crate::message::Message;
use crate::selection::SelectionList;
use crate::state::{AppState, PendingRequest, WizardStep};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Credential
// ─────────────────────────────────────────────────────────

pub fn handle_submit_credential(state: &mut AppState) -> UpdateResult {
    if state.step != WizardStep::Connecting || state.is_busy() {
        return UpdateResult::none();
    }
    if state.token_input.is_empty() {
        debug!("Ignoring empty credential");
        return UpdateResult::none();
    }

    let address = state.settings.server.address.clone();
    state.in_flight = Some(PendingRequest::Connect);
    state.status = Some(format!("Connecting to {}...", address));

    UpdateResult::action(UpdateAction::Connect {
        address,
        credential: state.token_input.value().to_string(),
    })
}

pub fn handle_connected(state: &mut AppState, session: Session) -> UpdateResult {
    if state.in_flight != Some(PendingRequest::Connect) {
        warn!("Ignoring stale connection to {}", session.server_address());
        session.close();
        return UpdateResult::none();
    }

    state.in_flight = None;
    state.token_input.clear();
    state.session = Some(session);
    begin_load(state, ResourceKind::Tenant)
}

pub fn handle_connection_failed(state: &mut AppState, error: String) -> UpdateResult {
    if state.in_flight != Some(PendingRequest::Connect) {
        warn!("Ignoring stale connection failure: {}", error);
        return UpdateResult::none();
    }
    state.fail(error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Selection lists
// ─────────────────────────────────────────────────────────

/// Show the (empty) list for `kind` and request its items
fn begin_load(state: &mut AppState, kind: ResourceKind) -> UpdateResult {
    let tenant_id = if kind.is_tenant_scoped() {
        state.context.tenant_id().map(str::to_string)
    } else {
        None
    };

    state.set_step(WizardStep::for_kind(kind));
    state.selection = SelectionList::new(kind, Vec::new());
    state.status = Some(format!("Loading {}...", kind));
    state.in_flight = Some(PendingRequest::List(kind));

    UpdateResult::action(UpdateAction::LoadItems {
        kind,
        tenant_id,
        session: None,
    })
}

pub fn handle_items_loaded(
    state: &mut AppState,
    kind: ResourceKind,
    items: Vec<SelectionItem>,
) -> UpdateResult {
    if state.in_flight != Some(PendingRequest::List(kind)) || state.step.list_kind() != Some(kind)
    {
        warn!("Ignoring stale {} list in step {:?}", kind, state.step);
        return UpdateResult::none();
    }

    state.in_flight = None;
    state.status = if items.is_empty() {
        Some(format!("No {} found", kind))
    } else {
        None
    };
    state.selection = SelectionList::new(kind, items);
    UpdateResult::none()
}

pub fn handle_items_load_failed(
    state: &mut AppState,
    kind: ResourceKind,
    error: String,
) -> UpdateResult {
    if state.in_flight != Some(PendingRequest::List(kind)) {
        warn!("Ignoring stale {} list failure: {}", kind, error);
        return UpdateResult::none();
    }
    state.fail(error);
    UpdateResult::none()
}

/// Enter on a list item or browser entry
pub fn handle_confirm_selection(state: &mut AppState) -> UpdateResult {
    if state.is_busy() {
        debug!("Ignoring confirm while {:?} is pending", state.in_flight);
        return UpdateResult::none();
    }

    if state.step == WizardStep::FileSelect {
        return confirm_browser_entry(state);
    }

    let Some(kind) = state.step.list_kind() else {
        return UpdateResult::none();
    };
    let Some(item) = state.selection.selected_item() else {
        return UpdateResult::none();
    };
    let id = item.id.clone();
    info!("Selected {} {:?} ({})", kind, item.title, id);

    let recorded = match kind {
        ResourceKind::Tenant => state.context.record_tenant(id),
        ResourceKind::Application => state.context.record_application(id),
        ResourceKind::DeviceProfile => state.context.record_device_profile(id),
    };
    if !recorded {
        warn!("{} already selected, ignoring", kind);
        return UpdateResult::none();
    }

    match kind {
        ResourceKind::Tenant => begin_load(state, ResourceKind::Application),
        ResourceKind::Application => begin_load(state, ResourceKind::DeviceProfile),
        ResourceKind::DeviceProfile => enter_file_select(state),
    }
}

// ─────────────────────────────────────────────────────────
// File browser
// ─────────────────────────────────────────────────────────

fn enter_file_select(state: &mut AppState) -> UpdateResult {
    state.set_step(WizardStep::FileSelect);
    state.status = None;
    let dir = state.file_browser.current_dir.clone();
    begin_scan(state, dir)
}

fn begin_scan(state: &mut AppState, path: PathBuf) -> UpdateResult {
    state.file_browser.begin_scan(path.clone());
    UpdateResult::action(UpdateAction::ScanDirectory {
        path,
        show_hidden: state.file_browser.show_hidden,
    })
}

fn confirm_browser_entry(state: &mut AppState) -> UpdateResult {
    match state.file_browser.selected_entry() {
        Some(entry) if entry.is_dir => UpdateResult::message(Message::BrowserOpen),
        Some(entry) if entry.is_selectable() => UpdateResult::message(Message::FileChosen {
            path: entry.path.clone(),
        }),
        Some(entry) => {
            debug!("{:?} is not a CSV file", entry.path);
            UpdateResult::none()
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_browser_open(state: &mut AppState) -> UpdateResult {
    if state.step != WizardStep::FileSelect {
        return UpdateResult::none();
    }
    let dir = match state.file_browser.selected_entry() {
        Some(entry) if entry.is_dir => entry.path.clone(),
        _ => return UpdateResult::none(),
    };
    begin_scan(state, dir)
}

pub fn handle_browser_parent(state: &mut AppState) -> UpdateResult {
    if state.step != WizardStep::FileSelect {
        return UpdateResult::none();
    }
    match state.file_browser.parent_dir() {
        Some(parent) => begin_scan(state, parent),
        None => UpdateResult::none(),
    }
}

pub fn handle_browser_toggle_hidden(state: &mut AppState) -> UpdateResult {
    if state.step != WizardStep::FileSelect {
        return UpdateResult::none();
    }
    state.file_browser.show_hidden = !state.file_browser.show_hidden;
    let dir = state.file_browser.current_dir.clone();
    begin_scan(state, dir)
}

pub fn handle_directory_scanned(
    state: &mut AppState,
    path: PathBuf,
    entries: Vec<BrowserEntry>,
) -> UpdateResult {
    if state.step == WizardStep::FileSelect {
        state.file_browser.apply_scan(&path, entries);
    }
    UpdateResult::none()
}

pub fn handle_directory_scan_failed(
    state: &mut AppState,
    path: PathBuf,
    error: String,
) -> UpdateResult {
    if state.step == WizardStep::FileSelect {
        warn!("Cannot read {:?}: {}", path, error);
        state.file_browser.apply_scan_error(&path, error);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Import
// ─────────────────────────────────────────────────────────

pub fn handle_file_chosen(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if state.step != WizardStep::FileSelect || state.is_busy() || !is_csv(&path) {
        return UpdateResult::none();
    }
    if !state.context.record_file(path.clone()) {
        warn!("File already chosen, ignoring {:?}", path);
        return UpdateResult::none();
    }

    let target = match state.context.import_target() {
        Ok(target) => target,
        Err(e) => {
            state.fail(e.to_string());
            return UpdateResult::none();
        }
    };

    info!("Importing devices from {:?}", target.file_path);
    state.set_step(WizardStep::Processing);
    state.status = Some(format!("Importing devices from {}...", path.display()));
    state.in_flight = Some(PendingRequest::Import);

    UpdateResult::action(UpdateAction::ImportDevices {
        target,
        session: None,
    })
}

pub fn handle_import_completed(state: &mut AppState, result: ImportResult) -> UpdateResult {
    if state.in_flight != Some(PendingRequest::Import) {
        warn!("Ignoring stale import result: {:?}", result);
        return UpdateResult::none();
    }
    state.in_flight = None;
    state.status = None;
    state.set_step(WizardStep::Complete {
        created: result.created,
    });
    UpdateResult::none()
}

pub fn handle_import_failed(state: &mut AppState, error: String) -> UpdateResult {
    if state.in_flight != Some(PendingRequest::Import) {
        warn!("Ignoring stale import failure: {}", error);
        return UpdateResult::none();
    }
    state.fail(error);
    UpdateResult::none()
}
