//! Bot relay configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOT_ENDPOINT, DEFAULT_BOT_TIMEOUT_SECS};

/// Upstream bot runtime the pipelines relay activities to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Endpoint receiving relayed activities
    pub endpoint: String,
    /// Per-turn request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BOT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_BOT_TIMEOUT_SECS,
        }
    }
}
