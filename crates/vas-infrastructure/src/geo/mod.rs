//! Geospatial provider selection
//!
//! Selection is split into a pure decision ([`select_point_of_interest_provider`],
//! [`select_routing_provider`]) and the async initialization performed by
//! [`ServiceManager`].

mod selection;
mod service_manager;

pub use selection::{select_point_of_interest_provider, select_routing_provider};
pub use service_manager::ServiceManager;
