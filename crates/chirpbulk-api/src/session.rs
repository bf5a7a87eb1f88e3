//! Authenticated gRPC session against the ChirpStack API
//!
//! The channel is opened WITHOUT transport encryption (`http://`). The tool
//! targets a local or otherwise trusted ChirpStack deployment; the API token
//! travels in clear text over that link.

use std::fmt;

use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use chirpbulk_core::prelude::*;
use chirpbulk_core::ResourceKind;

use crate::proto;
use crate::registry::{DeviceRegistry, ListQuery, NewDevice, RemoteRecord};

/// Default ChirpStack gRPC address
pub const DEFAULT_SERVER_ADDRESS: &str = "localhost:8081";

const TENANT_LIST_PATH: &str = "/api.TenantService/List";
const APPLICATION_LIST_PATH: &str = "/api.ApplicationService/List";
const DEVICE_PROFILE_LIST_PATH: &str = "/api.DeviceProfileService/List";
const DEVICE_CREATE_PATH: &str = "/api.DeviceService/Create";

/// A connection to the ChirpStack API plus the credential sent on every call
///
/// Clones share the same underlying channel.
#[derive(Clone)]
pub struct Session {
    server_address: String,
    authorization: MetadataValue<Ascii>,
    channel: Channel,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("server_address", &self.server_address)
            .field("authorization", &"Bearer <redacted>")
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Open a plaintext channel to `server_address` (host:port)
    pub async fn connect(server_address: &str, credential: &str) -> Result<Self> {
        let authorization = bearer_value(credential)?;

        let endpoint = Endpoint::from_shared(format!("http://{}", server_address))
            .map_err(|e| Error::connection(server_address, error_chain(&e)))?;

        debug!("Opening gRPC channel to {}", server_address);
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| Error::connection(server_address, error_chain(&e)))?;

        info!("Connected to ChirpStack at {}", server_address);
        Ok(Self {
            server_address: server_address.to_string(),
            authorization,
            channel,
        })
    }

    /// Wrap an already created channel
    pub fn with_channel(
        server_address: impl Into<String>,
        credential: &str,
        channel: Channel,
    ) -> Result<Self> {
        Ok(Self {
            server_address: server_address.into(),
            authorization: bearer_value(credential)?,
            channel,
        })
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    /// Wrap `message` in a request carrying the bearer credential
    pub fn authorize<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request
            .metadata_mut()
            .insert("authorization", self.authorization.clone());
        request
    }

    /// Tear the session down
    pub fn close(self) {
        info!("Closing session to {}", self.server_address);
        drop(self.channel);
    }

    async fn unary<Req, Resp>(
        &self,
        path: &'static str,
        message: Req,
    ) -> std::result::Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("Service was not ready: {}", e)))?;

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(self.authorize(message), PathAndQuery::from_static(path), codec)
            .await?;
        Ok(response.into_inner())
    }

    async fn list_tenants(&self, query: &ListQuery) -> Result<Vec<RemoteRecord>> {
        let request = proto::ListTenantsRequest {
            limit: query.limit,
            ..Default::default()
        };
        let response: proto::ListTenantsResponse = self
            .unary(TENANT_LIST_PATH, request)
            .await
            .map_err(|s| rpc_error("List tenants", &s))?;

        Ok(response
            .result
            .into_iter()
            .map(|t| RemoteRecord::new(t.id, t.name, ""))
            .collect())
    }

    async fn list_applications(&self, query: &ListQuery) -> Result<Vec<RemoteRecord>> {
        let request = proto::ListApplicationsRequest {
            limit: query.limit,
            tenant_id: query.tenant_id_or_empty(),
            ..Default::default()
        };
        let response: proto::ListApplicationsResponse = self
            .unary(APPLICATION_LIST_PATH, request)
            .await
            .map_err(|s| rpc_error("List applications", &s))?;

        Ok(response
            .result
            .into_iter()
            .map(|a| RemoteRecord::new(a.id, a.name, a.description))
            .collect())
    }

    async fn list_device_profiles(&self, query: &ListQuery) -> Result<Vec<RemoteRecord>> {
        let request = proto::ListDeviceProfilesRequest {
            limit: query.limit,
            tenant_id: query.tenant_id_or_empty(),
            ..Default::default()
        };
        let response: proto::ListDeviceProfilesResponse = self
            .unary(DEVICE_PROFILE_LIST_PATH, request)
            .await
            .map_err(|s| rpc_error("List device profiles", &s))?;

        Ok(response
            .result
            .into_iter()
            .map(|p| RemoteRecord::new(p.id, p.name, ""))
            .collect())
    }
}

impl DeviceRegistry for Session {
    async fn list(&self, query: &ListQuery) -> Result<Vec<RemoteRecord>> {
        debug!(
            "Listing {} (tenant={:?}, limit={})",
            query.kind, query.tenant_id, query.limit
        );
        match query.kind {
            ResourceKind::Tenant => self.list_tenants(query).await,
            ResourceKind::Application => self.list_applications(query).await,
            ResourceKind::DeviceProfile => self.list_device_profiles(query).await,
        }
    }

    async fn create_device(&self, device: &NewDevice) -> Result<()> {
        let request = proto::CreateDeviceRequest {
            device: Some(proto::Device {
                dev_eui: device.dev_eui.clone(),
                name: device.name.clone(),
                description: device.description.clone(),
                application_id: device.application_id.clone(),
                device_profile_id: device.device_profile_id.clone(),
                skip_fcnt_check: false,
                is_disabled: device.is_disabled,
            }),
        };
        let _: proto::Empty = self
            .unary(DEVICE_CREATE_PATH, request)
            .await
            .map_err(|s| Error::row_creation(&device.dev_eui, status_message(&s)))?;
        Ok(())
    }
}

/// Build the `authorization` metadata value for a bearer token
fn bearer_value(credential: &str) -> Result<MetadataValue<Ascii>> {
    MetadataValue::try_from(format!("Bearer {}", credential))
        .map_err(|e| Error::invalid_credential(e.to_string()))
}

fn rpc_error(operation: &str, status: &Status) -> Error {
    Error::rpc(operation, status_message(status))
}

fn status_message(status: &Status) -> String {
    if status.message().is_empty() {
        format!("{:?}", status.code())
    } else {
        format!("{:?}: {}", status.code(), status.message())
    }
}

/// Flatten an error and its sources into one line
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
