//! Test utilities for the device registry
//!
//! Provides [`FakeRegistry`], a scripted in-memory stand-in for the ChirpStack
//! API that records every call it receives.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chirpbulk_core::prelude::*;
use chirpbulk_core::ResourceKind;

use crate::registry::{DeviceRegistry, ListQuery, NewDevice, RemoteRecord};
use crate::session::Session;

#[derive(Debug, Default)]
struct FakeState {
    records: HashMap<ResourceKind, Vec<RemoteRecord>>,
    list_error: Option<String>,
    failing_devices: HashSet<String>,
    queries: Vec<ListQuery>,
    create_attempts: Vec<String>,
    created: Vec<NewDevice>,
}

/// Scripted registry; clones share the same recorded state
#[derive(Debug, Clone, Default)]
pub struct FakeRegistry {
    state: Arc<Mutex<FakeState>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned for list queries of `kind`
    pub fn with_records(self, kind: ResourceKind, records: Vec<RemoteRecord>) -> Self {
        self.state.lock().unwrap().records.insert(kind, records);
        self
    }

    /// Make every list query fail with `message`
    pub fn with_list_error(self, message: &str) -> Self {
        self.state.lock().unwrap().list_error = Some(message.to_string());
        self
    }

    /// Make create calls for `dev_eui` fail
    pub fn with_failing_device(self, dev_eui: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_devices
            .insert(dev_eui.to_string());
        self
    }

    /// List queries received, in order
    pub fn queries(&self) -> Vec<ListQuery> {
        self.state.lock().unwrap().queries.clone()
    }

    /// DevEUIs of every create call received, in order
    pub fn create_attempts(&self) -> Vec<String> {
        self.state.lock().unwrap().create_attempts.clone()
    }

    /// Devices the fake accepted, in order
    pub fn created(&self) -> Vec<NewDevice> {
        self.state.lock().unwrap().created.clone()
    }
}

impl DeviceRegistry for FakeRegistry {
    async fn list(&self, query: &ListQuery) -> Result<Vec<RemoteRecord>> {
        let mut state = self.state.lock().unwrap();
        state.queries.push(query.clone());
        if let Some(message) = &state.list_error {
            return Err(Error::rpc(format!("List {}", query.kind), message.clone()));
        }
        Ok(state.records.get(&query.kind).cloned().unwrap_or_default())
    }

    async fn create_device(&self, device: &NewDevice) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.create_attempts.push(device.dev_eui.clone());
        if state.failing_devices.contains(&device.dev_eui) {
            return Err(Error::row_creation(
                &device.dev_eui,
                "AlreadyExists: object already exists",
            ));
        }
        state.created.push(device.clone());
        Ok(())
    }
}

/// Session over a channel that never dials until first use.
///
/// Must be called inside a tokio runtime.
pub fn lazy_session(credential: &str) -> Result<Session> {
    let channel = tonic::transport::Endpoint::from_static("http://127.0.0.1:8081").connect_lazy();
    Session::with_channel("127.0.0.1:8081", credential, channel)
}

/// Shorthand for a list record
pub fn record(id: &str, name: &str, description: &str) -> RemoteRecord {
    RemoteRecord::new(id, name, description)
}
