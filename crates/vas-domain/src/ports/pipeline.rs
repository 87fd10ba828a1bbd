//! Message Pipeline Ports
//!
//! The message-processing pipeline and the bot it drives are external
//! collaborators of the router. These traits are the narrow seam it talks
//! through.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::value_objects::{InboundCall, PipelineResponse};

/// Bot turn handler
#[async_trait]
pub trait Bot: Send + Sync {
    /// Handle one inbound activity, optionally producing a reply activity
    async fn on_turn(
        &self,
        activity: serde_json::Value,
        cancel: CancellationToken,
    ) -> Result<Option<serde_json::Value>>;
}

/// Message-processing pipeline
///
/// Receives the call, the bot and a cancellation token. Its result is
/// passed to the HTTP layer without interpretation; its errors propagate
/// unchanged.
#[async_trait]
pub trait MessagePipeline: Send + Sync {
    /// Process an inbound call
    async fn process(
        &self,
        call: InboundCall,
        bot: Arc<dyn Bot>,
        cancel: CancellationToken,
    ) -> Result<PipelineResponse>;
}
