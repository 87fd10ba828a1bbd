//! # VAS Skill Host Server
//!
//! HTTP entry point for a virtual assistant skill: channel messages and
//! inter-skill messages are routed to their message pipelines, the latter
//! behind an optional caller authenticator.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vas_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config search path + VAS_* environment
//!     run(None, false).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SkillController`] | Request router |
//! | [`HttpTransport`] | Rocket-based HTTP surface |

pub mod constants;
pub mod controller;
pub mod init;
pub mod transport;

pub use controller::{SkillController, SkillOutcome};
pub use init::run;
pub use transport::http::build_rocket;
pub use transport::{HttpTransport, HttpTransportConfig};
