//! # chirpbulk-api - ChirpStack API Access
//!
//! Opens the authenticated gRPC session and exposes the small slice of the
//! ChirpStack v4 API the import wizard needs: three list calls and device
//! creation.
//!
//! Depends on [`chirpbulk_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Session
//! - [`Session`] - Plaintext gRPC channel plus bearer credential
//! - [`DEFAULT_SERVER_ADDRESS`] - `localhost:8081`
//!
//! ### Registry seam
//! - [`DeviceRegistry`] - List/create operations, implemented by [`Session`]
//! - [`ListQuery`], [`RemoteRecord`], [`NewDevice`] - Call parameters and results
//! - [`LIST_PAGE_LIMIT`] - Page size of every list call (no pagination)

pub mod proto;
pub mod registry;
#[cfg(test)]
mod scripted_server;
pub mod session;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use registry::{
    DeviceRegistry, ListQuery, LocalDeviceRegistry, NewDevice, RemoteRecord, LIST_PAGE_LIMIT,
};
pub use session::{Session, DEFAULT_SERVER_ADDRESS};
