//! Request guards

use std::convert::Infallible;

use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use vas_domain::value_objects::CallContext;

use crate::constants::REQUEST_ID_HEADER;

/// Request metadata an authenticator and pipeline may inspect
///
/// Never fails. The request id is taken from `X-Request-Id` when the caller
/// sends one, otherwise generated.
#[derive(Debug, Clone)]
pub struct RequestMeta(CallContext);

impl RequestMeta {
    /// Unwrap the call context
    pub fn into_inner(self) -> CallContext {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestMeta {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let request_id = request
            .headers()
            .get_one(REQUEST_ID_HEADER)
            .filter(|id| !id.trim().is_empty())
            .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

        let mut context = CallContext::new(
            request_id,
            request.method().as_str(),
            request.uri().path().as_str(),
        );
        for header in request.headers().iter() {
            context.insert_header(header.name().as_str(), header.value());
        }
        if let Some(remote) = request.remote() {
            context = context.with_remote_addr(remote);
        }

        Outcome::Success(Self(context))
    }
}

/// Server-wide shutdown token, managed as Rocket state
///
/// Each call gets a child token, so shutting down cancels every in-flight
/// pipeline.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal(CancellationToken);

impl ShutdownSignal {
    /// Wrap an existing token
    pub fn new(token: CancellationToken) -> Self {
        Self(token)
    }

    /// Token for a single call
    pub fn child_token(&self) -> CancellationToken {
        self.0.child_token()
    }
}
