//! In-process ChirpStack API served over TCP for session tests
//!
//! Requests are decoded with this module's own message declarations, written
//! from the ChirpStack protobufs independently of [`crate::proto`], so a wrong
//! field tag on the client side shows up as a wrong decoded value here.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tonic::body::BoxBody;
use tonic::codec::ProstCodec;
use tonic::codegen::{empty_body, http, Body, BoxFuture, Service, StdError};
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::transport::server::TcpIncoming;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

// ─────────────────────────────────────────────────────────────────
// Server-side messages
// ─────────────────────────────────────────────────────────────────

/// `api.List{Tenants,Applications,DeviceProfiles}Request` share tags 1..=4
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRequest {
    #[prost(uint32, tag = "1")]
    pub limit: u32,
    #[prost(uint32, tag = "2")]
    pub offset: u32,
    #[prost(string, tag = "3")]
    pub search: String,
    /// `user_id` for tenants, `tenant_id` for the scoped lists
    #[prost(string, tag = "4")]
    pub scope: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TenantItem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(bool, tag = "5")]
    pub can_have_gateways: bool,
    #[prost(uint32, tag = "9")]
    pub max_device_count: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TenantList {
    #[prost(uint32, tag = "1")]
    pub total_count: u32,
    #[prost(message, repeated, tag = "2")]
    pub result: Vec<TenantItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplicationItem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, tag = "5")]
    pub description: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplicationList {
    #[prost(uint32, tag = "1")]
    pub total_count: u32,
    #[prost(message, repeated, tag = "2")]
    pub result: Vec<ApplicationItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceProfileItem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(int32, tag = "5")]
    pub region: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceProfileList {
    #[prost(uint32, tag = "1")]
    pub total_count: u32,
    #[prost(message, repeated, tag = "2")]
    pub result: Vec<DeviceProfileItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Device {
    #[prost(string, tag = "1")]
    pub dev_eui: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub application_id: String,
    #[prost(string, tag = "5")]
    pub device_profile_id: String,
    #[prost(bool, tag = "6")]
    pub skip_fcnt_check: bool,
    #[prost(bool, tag = "7")]
    pub is_disabled: bool,
    #[prost(string, tag = "10")]
    pub join_eui: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateDevice {
    #[prost(message, optional, tag = "1")]
    pub device: Option<Device>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

// ─────────────────────────────────────────────────────────────────
// Recorded calls
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Received {
    List(ListRequest),
    Create(CreateDevice),
}

/// One request as the server saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub path: &'static str,
    pub authorization: Option<String>,
    pub request: Received,
}

#[derive(Debug, Default)]
struct Script {
    calls: Vec<Call>,
    rejected_dev_euis: Vec<String>,
}

/// Scripted server state; clones share it with the running server
#[derive(Debug, Clone, Default)]
pub struct ScriptedApi {
    script: Arc<Mutex<Script>>,
}

impl ScriptedApi {
    /// Answer `DeviceService/Create` for `dev_eui` with `ALREADY_EXISTS`
    pub fn reject_device(&self, dev_eui: &str) {
        self.script
            .lock()
            .unwrap()
            .rejected_dev_euis
            .push(dev_eui.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    fn record<T>(&self, path: &'static str, request: &Request<T>, received: Received) {
        let authorization = request
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.script.lock().unwrap().calls.push(Call {
            path,
            authorization,
            request: received,
        });
    }

    fn is_rejected(&self, dev_eui: &str) -> bool {
        self.script
            .lock()
            .unwrap()
            .rejected_dev_euis
            .iter()
            .any(|d| d == dev_eui)
    }

    /// Bind an ephemeral port and serve all four methods on it
    pub async fn start(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let incoming = TcpIncoming::from_listener(listener, true, None).unwrap();

        let router = Server::builder()
            .add_service(Route::<TENANTS>(self.clone()))
            .add_service(Route::<APPLICATIONS>(self.clone()))
            .add_service(Route::<DEVICE_PROFILES>(self.clone()))
            .add_service(Route::<DEVICES>(self.clone()));
        tokio::spawn(router.serve_with_incoming(incoming));
        addr
    }
}

// ─────────────────────────────────────────────────────────────────
// Method handlers
// ─────────────────────────────────────────────────────────────────

struct ListTenants(ScriptedApi);

impl UnaryService<ListRequest> for ListTenants {
    type Response = TenantList;
    type Future = std::future::Ready<Result<Response<TenantList>, Status>>;

    fn call(&mut self, request: Request<ListRequest>) -> Self::Future {
        let received = Received::List(request.get_ref().clone());
        self.0.record("/api.TenantService/List", &request, received);
        let result = vec![
            TenantItem {
                id: "t-1".into(),
                name: "Acme".into(),
                can_have_gateways: true,
                max_device_count: 500,
            },
            TenantItem {
                id: "t-2".into(),
                name: "Globex".into(),
                can_have_gateways: false,
                max_device_count: 0,
            },
        ];
        std::future::ready(Ok(Response::new(TenantList {
            total_count: 2,
            result,
        })))
    }
}

struct ListApplications(ScriptedApi);

impl UnaryService<ListRequest> for ListApplications {
    type Response = ApplicationList;
    type Future = std::future::Ready<Result<Response<ApplicationList>, Status>>;

    fn call(&mut self, request: Request<ListRequest>) -> Self::Future {
        let tenant_id = request.get_ref().scope.clone();
        let received = Received::List(request.get_ref().clone());
        self.0
            .record("/api.ApplicationService/List", &request, received);
        let result = vec![ApplicationItem {
            id: format!("{tenant_id}-a-1"),
            name: "Meters".into(),
            description: "Water meters".into(),
        }];
        std::future::ready(Ok(Response::new(ApplicationList {
            total_count: 1,
            result,
        })))
    }
}

struct ListDeviceProfiles(ScriptedApi);

impl UnaryService<ListRequest> for ListDeviceProfiles {
    type Response = DeviceProfileList;
    type Future = std::future::Ready<Result<Response<DeviceProfileList>, Status>>;

    fn call(&mut self, request: Request<ListRequest>) -> Self::Future {
        let received = Received::List(request.get_ref().clone());
        self.0
            .record("/api.DeviceProfileService/List", &request, received);
        let result = vec![DeviceProfileItem {
            id: "p-1".into(),
            name: "EU868 class A".into(),
            region: 1,
        }];
        std::future::ready(Ok(Response::new(DeviceProfileList {
            total_count: 1,
            result,
        })))
    }
}

struct CreateDevices(ScriptedApi);

impl UnaryService<CreateDevice> for CreateDevices {
    type Response = Empty;
    type Future = std::future::Ready<Result<Response<Empty>, Status>>;

    fn call(&mut self, request: Request<CreateDevice>) -> Self::Future {
        let dev_eui = request
            .get_ref()
            .device
            .as_ref()
            .map(|d| d.dev_eui.clone())
            .unwrap_or_default();
        let received = Received::Create(request.get_ref().clone());
        self.0.record("/api.DeviceService/Create", &request, received);

        let reply = if self.0.is_rejected(&dev_eui) {
            Err(Status::already_exists("object already exists"))
        } else {
            Ok(Response::new(Empty {}))
        };
        std::future::ready(reply)
    }
}

// ─────────────────────────────────────────────────────────────────
// Routing
// ─────────────────────────────────────────────────────────────────

const TENANTS: u8 = 0;
const APPLICATIONS: u8 = 1;
const DEVICE_PROFILES: u8 = 2;
const DEVICES: u8 = 3;

/// One gRPC service name; every route dispatches on the full method path
#[derive(Clone)]
struct Route<const S: u8>(ScriptedApi);

impl NamedService for Route<TENANTS> {
    const NAME: &'static str = "api.TenantService";
}

impl NamedService for Route<APPLICATIONS> {
    const NAME: &'static str = "api.ApplicationService";
}

impl NamedService for Route<DEVICE_PROFILES> {
    const NAME: &'static str = "api.DeviceProfileService";
}

impl NamedService for Route<DEVICES> {
    const NAME: &'static str = "api.DeviceService";
}

async fn serve<S, Req, Resp, B>(handler: S, req: http::Request<B>) -> http::Response<BoxBody>
where
    S: UnaryService<Req, Response = Resp>,
    Req: prost::Message + Default + Send + 'static,
    Resp: prost::Message + Send + 'static,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    let codec: ProstCodec<Resp, Req> = ProstCodec::default();
    Grpc::new(codec).unary(handler, req).await
}

impl<const S: u8, B> Service<http::Request<B>> for Route<S>
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let api = self.0.clone();
        Box::pin(async move {
            let path = req.uri().path().to_string();
            let response = match path.as_str() {
                "/api.TenantService/List" => serve(ListTenants(api), req).await,
                "/api.ApplicationService/List" => serve(ListApplications(api), req).await,
                "/api.DeviceProfileService/List" => serve(ListDeviceProfiles(api), req).await,
                "/api.DeviceService/Create" => serve(CreateDevices(api), req).await,
                _ => http::Response::builder()
                    .status(200)
                    .header("grpc-status", tonic::Code::Unimplemented as i32)
                    .header(http::header::CONTENT_TYPE, "application/grpc")
                    .body(empty_body())
                    .unwrap(),
            };
            Ok(response)
        })
    }
}
