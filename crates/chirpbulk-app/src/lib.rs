//! # chirpbulk-app - Wizard State and Orchestration
//!
//! Implements the import wizard with the Elm Architecture (TEA):
//!
//! - **Model** ([`AppState`]): current [`WizardStep`](state::WizardStep), the
//!   selections made so far and the open session
//! - **Message** ([`Message`]): key presses, ticks and background completions
//! - **Update** ([`handler::update`]): pure state transition returning an
//!   [`UpdateResult`] with an optional follow-up message and [`UpdateAction`]
//! - **Actions** ([`actions::handle_action`]): spawn tokio tasks for RPCs,
//!   directory scans and the CSV import; each reports back with one message
//!
//! [`process::process_message`] ties these together for the TUI event loop.
//!
//! ## Other modules
//!
//! - [`catalog`] - Tenant/application/device profile lists as selection items
//! - [`import`] - CSV reading and the per-row create loop
//! - [`file_browser`] - Directory listing for picking the CSV file
//! - [`config`] - `config.toml` settings
//! - [`signals`] - SIGINT/SIGTERM to [`Message::Quit`]

pub mod actions;
pub mod catalog;
pub mod config;
pub mod file_browser;
pub mod handler;
pub mod import;
pub mod input_key;
pub mod message;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;
pub mod token_input;

pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
