//! Device registry trait: the RPC surface the wizard depends on
//!
//! The wizard never talks to gRPC types directly. It lists remote resources
//! through [`ListQuery`] and creates devices through [`NewDevice`], so tests can
//! swap the live [`Session`](crate::Session) for a scripted registry.

use chirpbulk_core::prelude::*;
use chirpbulk_core::{ImportRecord, ResourceKind};

/// Maximum number of entries requested from a list RPC.
///
/// Only the first page is fetched; longer lists are truncated.
pub const LIST_PAGE_LIMIT: u32 = 100;

/// Parameters of one list RPC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub kind: ResourceKind,
    /// Tenant scope; `None` for the tenant list itself
    pub tenant_id: Option<String>,
    pub limit: u32,
}

impl ListQuery {
    /// Query for all tenants visible to the credential
    pub fn tenants() -> Self {
        Self {
            kind: ResourceKind::Tenant,
            tenant_id: None,
            limit: LIST_PAGE_LIMIT,
        }
    }

    /// Query for a tenant-scoped resource
    pub fn scoped(kind: ResourceKind, tenant_id: impl Into<String>) -> Self {
        Self {
            kind,
            tenant_id: Some(tenant_id.into()),
            limit: LIST_PAGE_LIMIT,
        }
    }

    /// Tenant id to send, empty when unscoped
    pub fn tenant_id_or_empty(&self) -> String {
        self.tenant_id.clone().unwrap_or_default()
    }
}

/// One row of a list RPC result, normalized across resource kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRecord {
    pub id: String,
    pub name: String,
    /// Only applications carry a description
    pub description: String,
}

impl RemoteRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Payload of a create-device call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub dev_eui: String,
    pub name: String,
    pub description: String,
    pub application_id: String,
    pub device_profile_id: String,
    pub is_disabled: bool,
}

impl NewDevice {
    /// Build an enabled device from a CSV record and the wizard's selections
    pub fn from_record(
        record: ImportRecord,
        application_id: impl Into<String>,
        device_profile_id: impl Into<String>,
    ) -> Self {
        Self {
            dev_eui: record.dev_eui,
            name: record.name,
            description: record.description,
            application_id: application_id.into(),
            device_profile_id: device_profile_id.into(),
            is_disabled: false,
        }
    }
}

/// Remote device-management operations
///
/// Implement [`DeviceRegistry`]; the blanket impl provides the local variant.
#[trait_variant::make(DeviceRegistry: Send)]
pub trait LocalDeviceRegistry {
    /// Fetch one page of a resource list, in server order
    async fn list(&self, query: &ListQuery) -> Result<Vec<RemoteRecord>>;

    /// Create a single device
    async fn create_device(&self, device: &NewDevice) -> Result<()>;
}
