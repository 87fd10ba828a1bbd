//! Response types
//!
//! Pipeline results pass through with their status and body untouched.
//! Errors render as `{ "error": <kind>, "message": <text> }`.

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use vas_domain::error::Error;
use vas_domain::value_objects::PipelineResponse;

use crate::constants::ERROR_KIND_PAYLOAD_TOO_LARGE;
use crate::controller::SkillOutcome;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable kind
    pub error: String,
    /// Human-readable message
    pub message: String,
}

/// HTTP status for a pipeline or startup error
pub fn status_for(err: &Error) -> Status {
    match err {
        Error::Timeout { .. } => Status::GatewayTimeout,
        Error::Network { .. } | Error::Provider { .. } => Status::BadGateway,
        Error::Cancelled { .. } => Status::ServiceUnavailable,
        _ => Status::InternalServerError,
    }
}

fn pipeline_status(code: u16) -> Status {
    if (100..600).contains(&code) {
        Status::new(code)
    } else {
        Status::InternalServerError
    }
}

fn json_with_status<'r, T: Serialize>(
    body: T,
    status: Status,
    request: &'r Request<'_>,
) -> response::Result<'static> {
    let mut response = Json(body).respond_to(request)?;
    response.set_status(status);
    Ok(response)
}

/// A pipeline result as an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReply(pub PipelineResponse);

impl<'r> Responder<'r, 'static> for PipelineReply {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = pipeline_status(self.0.status);
        match self.0.body {
            Some(body) => json_with_status(body, status, request),
            None => Response::build().status(status).ok(),
        }
    }
}

/// A skill routing outcome as an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct SkillReply(pub SkillOutcome);

impl<'r> Responder<'r, 'static> for SkillReply {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self.0 {
            // Built directly so no catcher adds a body
            SkillOutcome::Rejected => Response::build().status(Status::Unauthorized).ok(),
            SkillOutcome::Forwarded(response) => PipelineReply(response).respond_to(request),
        }
    }
}

/// Error response
#[derive(Debug, Clone)]
pub struct ApiError {
    status: Status,
    body: ErrorBody,
}

impl ApiError {
    /// Body exceeded the accepted size
    pub fn payload_too_large(limit: u64) -> Self {
        Self {
            status: Status::PayloadTooLarge,
            body: ErrorBody {
                error: ERROR_KIND_PAYLOAD_TOO_LARGE.to_string(),
                message: format!("Request body exceeds {limit} bytes"),
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self {
            status: status_for(&err),
            body: ErrorBody {
                error: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        json_with_status(self.body, self.status, request)
    }
}
