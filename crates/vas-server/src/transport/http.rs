//! HTTP Transport
//!
//! Mounts the two bot endpoints on Rocket.
//!
//! | Path | Method | Auth | Pipeline |
//! |------|--------|------|----------|
//! | `/api/messages` | POST | none | channel |
//! | `/api/skill/messages` | POST | optional | skill |
//!
//! Every call gets a cancellation token derived from the server-wide
//! shutdown token. It is cancelled when the handler finishes or is dropped,
//! and when Rocket shuts down.

use std::net::SocketAddr;
use std::sync::Arc;

use rocket::data::{Data, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Orbit, Request, Rocket, State, catch, catchers, post, routes};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use vas_domain::error::Error;
use vas_domain::value_objects::{Endpoint, InboundCall};

use super::guards::{RequestMeta, ShutdownSignal};
use super::responders::{ApiError, ErrorBody, PipelineReply, SkillReply, status_for};
use crate::constants::{ERROR_KIND_HTTP, MAX_ACTIVITY_BYTES};
use crate::controller::{SkillController, SkillOutcome};

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl HttpTransportConfig {
    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.port)))
    }
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    controller: Arc<SkillController>,
    shutdown: CancellationToken,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, controller: Arc<SkillController>) -> Self {
        Self {
            config,
            controller,
            shutdown: CancellationToken::new(),
        }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        build_rocket(Arc::clone(&self.controller), self.shutdown.clone())
    }

    /// Start the HTTP transport server
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.socket_addr();
        info!("HTTP transport listening on {}", addr);

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}

/// Build a Rocket instance serving `controller`
///
/// Cancelling `shutdown` cancels every in-flight call; Rocket cancels it
/// itself on shutdown.
pub fn build_rocket(controller: Arc<SkillController>, shutdown: CancellationToken) -> Rocket<Build> {
    rocket::build()
        .manage(controller)
        .manage(ShutdownSignal::new(shutdown.clone()))
        .mount("/", routes![channel_messages, skill_messages])
        .register("/", catchers![default_catcher])
        .attach(CancelOnShutdown(shutdown))
}

/// Fairing that cancels the shutdown token when Rocket stops
struct CancelOnShutdown(CancellationToken);

#[rocket::async_trait]
impl Fairing for CancelOnShutdown {
    fn info(&self) -> Info {
        Info {
            name: "Cancel in-flight calls on shutdown",
            kind: Kind::Shutdown,
        }
    }

    async fn on_shutdown(&self, _rocket: &Rocket<Orbit>) {
        info!("Shutting down, cancelling in-flight calls");
        self.0.cancel();
    }
}

async fn read_body(data: Data<'_>) -> Result<Vec<u8>, ApiError> {
    let body = data
        .open(MAX_ACTIVITY_BYTES.bytes())
        .into_bytes()
        .await
        .map_err(|e| ApiError::from(Error::from(e)))?;

    if !body.is_complete() {
        return Err(ApiError::payload_too_large(MAX_ACTIVITY_BYTES));
    }
    Ok(body.into_inner())
}

fn report_failure(request_id: &str, err: Error) -> ApiError {
    let status = status_for(&err);
    if matches!(err, Error::Cancelled { .. }) {
        warn!(request_id, error = %err, "Call cancelled");
    } else {
        error!(request_id, kind = err.kind(), status = status.code, error = %err, "Pipeline failed");
    }
    ApiError::from(err)
}

/// Messages from channels
#[post("/api/messages", data = "<body>")]
async fn channel_messages(
    controller: &State<Arc<SkillController>>,
    shutdown: &State<ShutdownSignal>,
    meta: RequestMeta,
    body: Data<'_>,
) -> Result<PipelineReply, ApiError> {
    let call = InboundCall::new(Endpoint::Standard, meta.into_inner(), read_body(body).await?);
    let request_id = call.context.request_id().to_string();

    let cancel = shutdown.child_token();
    let _cancel_on_drop = cancel.clone().drop_guard();

    controller
        .handle_channel_message(call, cancel)
        .await
        .map(PipelineReply)
        .map_err(|e| report_failure(&request_id, e))
}

/// Messages from a parent bot
///
/// The caller is authorized from headers alone, before any of the body is
/// read.
#[post("/api/skill/messages", data = "<body>")]
async fn skill_messages(
    controller: &State<Arc<SkillController>>,
    shutdown: &State<ShutdownSignal>,
    meta: RequestMeta,
    body: Data<'_>,
) -> Result<SkillReply, ApiError> {
    let context = meta.into_inner();
    if !controller.authorize(&context) {
        return Ok(SkillReply(SkillOutcome::Rejected));
    }

    let call = InboundCall::new(Endpoint::Skill, context, read_body(body).await?);
    let request_id = call.context.request_id().to_string();

    let cancel = shutdown.child_token();
    let _cancel_on_drop = cancel.clone().drop_guard();

    controller
        .forward_skill_message(call, cancel)
        .await
        .map(|response| SkillReply(SkillOutcome::Forwarded(response)))
        .map_err(|e| report_failure(&request_id, e))
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: ERROR_KIND_HTTP.to_string(),
            message: status.reason_lossy().to_string(),
        }),
    )
}
