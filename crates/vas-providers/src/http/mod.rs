//! HTTP Client Configuration
//!
//! Shared reqwest client settings for the API-based providers. One client
//! is built at startup and cloned into every provider, so connection pools
//! are shared.

mod client;

pub use client::HttpClientConfig;
