//! Inbound Call Value Objects
//!
//! An inbound HTTP call, reduced to what the router and its collaborators
//! need: which endpoint was invoked, the request context an authenticator
//! may inspect, and the raw payload the pipeline consumes.

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::constants::{CHANNEL_MESSAGES_PATH, SKILL_MESSAGES_PATH};

/// Endpoint an inbound call was delivered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `/api/messages`: channel or parent-bot messages
    Standard,
    /// `/api/skill/messages`: inter-skill messages
    Skill,
}

impl Endpoint {
    /// HTTP path of the endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Self::Standard => CHANNEL_MESSAGES_PATH,
            Self::Skill => SKILL_MESSAGES_PATH,
        }
    }

    /// Resolve an endpoint from its HTTP path
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            CHANNEL_MESSAGES_PATH => Some(Self::Standard),
            SKILL_MESSAGES_PATH => Some(Self::Skill),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Skill => write!(f, "skill"),
        }
    }
}

/// Request context visible to authenticators
///
/// Header names are stored lower-cased so lookups are case-insensitive.
/// When a header repeats, the first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    request_id: String,
    method: String,
    path: String,
    headers: HashMap<String, String>,
    remote_addr: Option<SocketAddr>,
}

impl CallContext {
    /// Create a context for a request
    pub fn new<I, M, P>(request_id: I, method: M, path: P) -> Self
    where
        I: Into<String>,
        M: Into<String>,
        P: Into<String>,
    {
        Self {
            request_id: request_id.into(),
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            remote_addr: None,
        }
    }

    /// Add a header
    pub fn with_header<N: AsRef<str>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.insert_header(name, value);
        self
    }

    /// Set the peer address
    pub fn with_remote_addr(mut self, addr: SocketAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }

    /// Insert a header, keeping an existing value for the same name
    pub fn insert_header<N: AsRef<str>, V: Into<String>>(&mut self, name: N, value: V) {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .or_insert_with(|| value.into());
    }

    /// Correlation id assigned to the request
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// HTTP method
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Peer address, when the transport knows it
    pub fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote_addr
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Token from an `Authorization: Bearer <token>` header
    pub fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() {
            Some(token.trim())
        } else {
            None
        }
    }
}

/// A single inbound HTTP call
///
/// Created per request and consumed by the pipeline that handles it.
#[derive(Debug, Clone)]
pub struct InboundCall {
    /// Endpoint the call arrived on
    pub endpoint: Endpoint,
    /// Request context
    pub context: CallContext,
    /// Raw request body
    pub body: Vec<u8>,
}

impl InboundCall {
    /// Create a new inbound call
    pub fn new(endpoint: Endpoint, context: CallContext, body: Vec<u8>) -> Self {
        Self {
            endpoint,
            context,
            body,
        }
    }
}

/// Result of a pipeline, handed back to the HTTP layer as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResponse {
    /// HTTP status code
    pub status: u16,
    /// Optional JSON body
    pub body: Option<serde_json::Value>,
}

impl PipelineResponse {
    /// 200 with a JSON body
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    /// Status code without a body
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
