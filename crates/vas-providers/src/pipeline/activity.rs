//! Activity pipeline
//!
//! Decodes the inbound body as a JSON activity and hands it to the bot.
//! The bot turn is raced against the call's cancellation token.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use vas_domain::error::{Error, Result};
use vas_domain::ports::{Bot, MessagePipeline};
use vas_domain::value_objects::{InboundCall, PipelineResponse};

/// Which endpoint a pipeline serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Messages from channels
    Channel,
    /// Messages from a parent bot
    Skill,
}

/// Pipeline that turns the HTTP body into an activity for the bot
#[derive(Debug, Clone, Copy)]
pub struct ActivityPipeline {
    kind: PipelineKind,
}

impl ActivityPipeline {
    /// Pipeline for the channel endpoint
    pub fn channel() -> Self {
        Self {
            kind: PipelineKind::Channel,
        }
    }

    /// Pipeline for the inter-skill endpoint
    pub fn skill() -> Self {
        Self {
            kind: PipelineKind::Skill,
        }
    }

    /// Endpoint kind this pipeline serves
    pub fn kind(&self) -> PipelineKind {
        self.kind
    }

    fn bad_request(message: impl Into<String>) -> PipelineResponse {
        PipelineResponse {
            status: 400,
            body: Some(json!({
                "error": "invalid_activity",
                "message": message.into(),
            })),
        }
    }

    /// Mark an activity as arriving through the skill endpoint
    fn tag_skill(activity: &mut Value) {
        let Some(object) = activity.as_object_mut() else {
            return;
        };
        let channel_data = object
            .entry("channelData")
            .or_insert_with(|| Value::Object(Default::default()));
        if !channel_data.is_object() {
            *channel_data = Value::Object(Default::default());
        }
        if let Some(data) = channel_data.as_object_mut() {
            data.insert("skill".to_string(), Value::Bool(true));
        }
    }
}

#[async_trait]
impl MessagePipeline for ActivityPipeline {
    async fn process(
        &self,
        call: InboundCall,
        bot: Arc<dyn Bot>,
        cancel: CancellationToken,
    ) -> Result<PipelineResponse> {
        let request_id = call.context.request_id().to_string();

        let mut activity: Value = match serde_json::from_slice(&call.body) {
            Ok(value) => value,
            Err(e) => {
                warn!(%request_id, error = %e, "Rejecting malformed activity");
                return Ok(Self::bad_request(format!("Malformed activity: {e}")));
            }
        };
        if !activity.is_object() {
            return Ok(Self::bad_request("Activity must be a JSON object"));
        }

        if self.kind == PipelineKind::Skill {
            Self::tag_skill(&mut activity);
        }

        debug!(%request_id, kind = ?self.kind, "Dispatching activity to bot");

        let reply = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                return Err(Error::cancelled(format!("bot turn for request {request_id}")));
            }
            reply = bot.on_turn(activity, cancel.clone()) => reply?,
        };

        Ok(match reply {
            Some(body) => PipelineResponse::ok(body),
            None => PipelineResponse::empty(200),
        })
    }
}
