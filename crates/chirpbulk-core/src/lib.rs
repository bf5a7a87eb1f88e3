//! # chirpbulk-core - Core Domain Types
//!
//! Foundation crate for chirpbulk. Provides domain types, error handling and
//! logging setup. It has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ResourceKind`] - Tenant, application or device profile
//! - [`SelectionItem`] - `{title, description, id}` entry of a selection screen
//! - [`ImportRecord`] - Device fields taken from one CSV row
//! - [`ImportResult`] - Aggregate outcome of an import
//! - [`is_hex_string()`], [`data_start_index()`] - DevEUI check and header detection
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering transport, CSV and row creation failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use chirpbulk_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all chirpbulk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    data_start_index, is_hex_string, ImportRecord, ImportResult, ResourceKind, SelectionItem,
};
