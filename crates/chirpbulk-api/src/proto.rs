//! Protobuf messages for the ChirpStack v4 `api` package
//!
//! Only the fields this tool reads or writes are declared. Field tags match
//! `chirpstack/api/proto/api/*.proto`; fields missing here are skipped by the
//! decoder, so the server may send the full messages.

/// `google.protobuf.Empty`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

// ─────────────────────────────────────────────────────────────────
// api.TenantService
// ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListTenantsRequest {
    #[prost(uint32, tag = "1")]
    pub limit: u32,
    #[prost(uint32, tag = "2")]
    pub offset: u32,
    #[prost(string, tag = "3")]
    pub search: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListTenantsResponse {
    #[prost(uint32, tag = "1")]
    pub total_count: u32,
    #[prost(message, repeated, tag = "2")]
    pub result: ::prost::alloc::vec::Vec<TenantListItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TenantListItem {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub name: ::prost::alloc::string::String,
}

// ─────────────────────────────────────────────────────────────────
// api.ApplicationService
// ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListApplicationsRequest {
    #[prost(uint32, tag = "1")]
    pub limit: u32,
    #[prost(uint32, tag = "2")]
    pub offset: u32,
    #[prost(string, tag = "3")]
    pub search: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub tenant_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListApplicationsResponse {
    #[prost(uint32, tag = "1")]
    pub total_count: u32,
    #[prost(message, repeated, tag = "2")]
    pub result: ::prost::alloc::vec::Vec<ApplicationListItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplicationListItem {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub description: ::prost::alloc::string::String,
}

// ─────────────────────────────────────────────────────────────────
// api.DeviceProfileService
// ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDeviceProfilesRequest {
    #[prost(uint32, tag = "1")]
    pub limit: u32,
    #[prost(uint32, tag = "2")]
    pub offset: u32,
    #[prost(string, tag = "3")]
    pub search: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub tenant_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDeviceProfilesResponse {
    #[prost(uint32, tag = "1")]
    pub total_count: u32,
    #[prost(message, repeated, tag = "2")]
    pub result: ::prost::alloc::vec::Vec<DeviceProfileListItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceProfileListItem {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub name: ::prost::alloc::string::String,
}

// ─────────────────────────────────────────────────────────────────
// api.DeviceService
// ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Device {
    #[prost(string, tag = "1")]
    pub dev_eui: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub application_id: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub device_profile_id: ::prost::alloc::string::String,
    #[prost(bool, tag = "6")]
    pub skip_fcnt_check: bool,
    #[prost(bool, tag = "7")]
    pub is_disabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateDeviceRequest {
    #[prost(message, optional, tag = "1")]
    pub device: ::core::option::Option<Device>,
}
