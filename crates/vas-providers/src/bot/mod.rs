//! Bot handlers

mod relay;

pub use relay::RelayBot;
