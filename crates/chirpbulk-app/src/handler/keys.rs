//! Key event handlers for the wizard steps

use crate::input_key::InputKey;
use crate::message::Message;
use crate::selection::Navigation;
use crate::state::{AppState, WizardStep};

/// Convert key events to messages based on the current step
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.step {
        WizardStep::Connecting => handle_key_credential(state, key),
        WizardStep::TenantSelect
        | WizardStep::ApplicationSelect
        | WizardStep::DeviceProfileSelect => handle_key_selection(state, key),
        WizardStep::FileSelect => handle_key_file_browser(key),
        WizardStep::Processing | WizardStep::Complete { .. } | WizardStep::Error { .. } => {
            handle_key_quit_only(key)
        }
    }
}

/// Credential prompt: every printable key is part of the token
fn handle_key_credential(state: &AppState, key: InputKey) -> Option<Message> {
    if state.is_busy() {
        return match key {
            InputKey::Esc => Some(Message::Quit),
            _ => None,
        };
    }

    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Enter => Some(Message::SubmitCredential),
        InputKey::Backspace => Some(Message::TokenBackspace),
        InputKey::CharCtrl('u') => Some(Message::TokenClear),
        InputKey::Char(c) => Some(Message::TokenInput(c)),
        _ => None,
    }
}

/// Tenant, application and device profile lists
fn handle_key_selection(state: &AppState, key: InputKey) -> Option<Message> {
    if state.selection.is_editing_filter() {
        return handle_key_filter(key);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('/') => Some(Message::FilterStart),
        InputKey::Esc if state.selection.is_filtered() => Some(Message::FilterClear),
        InputKey::Enter => Some(Message::ConfirmSelection),
        key => navigation_for(key).map(Message::Navigate),
    }
}

/// While a filter is typed, letters belong to the query
fn handle_key_filter(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FilterClear),
        InputKey::Enter => Some(Message::FilterAccept),
        InputKey::Backspace => Some(Message::FilterBackspace),
        InputKey::Char(c) => Some(Message::FilterInput(c)),
        InputKey::Up => Some(Message::Navigate(Navigation::Up)),
        InputKey::Down => Some(Message::Navigate(Navigation::Down)),
        _ => None,
    }
}

fn handle_key_file_browser(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Enter => Some(Message::ConfirmSelection),
        InputKey::Right => Some(Message::BrowserOpen),
        InputKey::Backspace | InputKey::Left => Some(Message::BrowserParent),
        InputKey::Char('.') => Some(Message::BrowserToggleHidden),
        key => navigation_for(key).map(Message::Navigate),
    }
}

fn handle_key_quit_only(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn navigation_for(key: InputKey) -> Option<Navigation> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Navigation::Up),
        InputKey::Down | InputKey::Char('j') => Some(Navigation::Down),
        InputKey::PageUp => Some(Navigation::PageUp),
        InputKey::PageDown => Some(Navigation::PageDown),
        InputKey::Home => Some(Navigation::First),
        InputKey::End => Some(Navigation::Last),
        _ => None,
    }
}
