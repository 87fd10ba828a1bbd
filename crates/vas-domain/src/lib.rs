//! # VAS Domain
//!
//! Core types and contracts for the VAS skill host: the inbound call model
//! the request router dispatches on, the configuration bundle the provider
//! selector reads, and the port traits for every external collaborator.
//!
//! This crate performs no I/O. Adapters live in `vas-providers`, wiring in
//! `vas-infrastructure` and `vas-server`.

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port traits for external collaborators
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
