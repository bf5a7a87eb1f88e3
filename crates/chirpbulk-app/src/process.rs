//! Message processing: runs the TEA update loop and dispatches actions
//!
//! `update()` never touches the session handle. Actions that need it are
//! hydrated here from `AppState::session` before dispatch.

use tokio::sync::mpsc;

use chirpbulk_core::prelude::*;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::UpdateAction;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            match hydrate_session(action, state) {
                Ok(action) => handle_action(action, msg_tx.clone()),
                Err(failure) => {
                    // Feed the failure back so the wizard leaves its loading state
                    if msg_tx.try_send(failure).is_err() {
                        warn!("Could not report missing session");
                    }
                }
            }
        }

        msg = result.message;
    }
}

/// Attach the open session to actions that make RPC calls.
///
/// Returns the failure message to send when no session is open.
fn hydrate_session(
    action: UpdateAction,
    state: &AppState,
) -> std::result::Result<UpdateAction, Message> {
    match action {
        UpdateAction::LoadItems {
            kind, tenant_id, ..
        } => match &state.session {
            Some(session) => Ok(UpdateAction::LoadItems {
                kind,
                tenant_id,
                session: Some(session.clone()),
            }),
            None => Err(Message::ItemsLoadFailed {
                kind,
                error: Error::NotConnected.to_string(),
            }),
        },
        UpdateAction::ImportDevices { target, .. } => match &state.session {
            Some(session) => Ok(UpdateAction::ImportDevices {
                target,
                session: Some(session.clone()),
            }),
            None => Err(Message::ImportFailed {
                error: Error::NotConnected.to_string(),
            }),
        },
        other => Ok(other),
    }
}
