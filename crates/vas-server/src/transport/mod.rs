//! HTTP transport
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`http`] | Rocket routes, builder and launcher |
//! | [`guards`] | Request guards building the call context |
//! | [`responders`] | Pipeline results and errors as HTTP responses |

pub mod guards;
pub mod http;
pub mod responders;

pub use guards::{RequestMeta, ShutdownSignal};
pub use http::{HttpTransport, HttpTransportConfig};
pub use responders::{ApiError, ErrorBody, PipelineReply, SkillReply};
