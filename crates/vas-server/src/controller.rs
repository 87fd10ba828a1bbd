//! Request Router
//!
//! [`SkillController`] receives inbound calls and hands them to the channel
//! or skill pipeline. Skill calls pass through the optional authenticator
//! first; a negative decision short-circuits with [`SkillOutcome::Rejected`].
//!
//! The controller does not interpret pipeline results and does not catch
//! pipeline errors. Both are returned to the transport unchanged.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use vas_domain::error::Result;
use vas_domain::ports::{Bot, MessagePipeline, SkillAuthenticator};
use vas_domain::value_objects::{CallContext, Endpoint, InboundCall, PipelineResponse};

/// Result of routing a skill call
#[derive(Debug, Clone, PartialEq)]
pub enum SkillOutcome {
    /// The authenticator refused the caller; rendered as 401 without a body
    Rejected,
    /// The skill pipeline ran and produced this response
    Forwarded(PipelineResponse),
}

/// Routes inbound calls to their pipeline
#[derive(Clone)]
pub struct SkillController {
    channel_pipeline: Arc<dyn MessagePipeline>,
    skill_pipeline: Arc<dyn MessagePipeline>,
    bot: Arc<dyn Bot>,
    authenticator: Option<Arc<dyn SkillAuthenticator>>,
}

impl SkillController {
    /// Create a controller with no skill authenticator
    pub fn new(
        channel_pipeline: Arc<dyn MessagePipeline>,
        skill_pipeline: Arc<dyn MessagePipeline>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            channel_pipeline,
            skill_pipeline,
            bot,
            authenticator: None,
        }
    }

    /// Replace the skill authenticator; `None` allows every caller
    pub fn with_optional_authenticator(
        mut self,
        authenticator: Option<Arc<dyn SkillAuthenticator>>,
    ) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Whether skill calls are authenticated
    pub fn has_authenticator(&self) -> bool {
        self.authenticator.is_some()
    }

    /// Forward a channel call to the channel pipeline
    pub async fn handle_channel_message(
        &self,
        call: InboundCall,
        cancel: CancellationToken,
    ) -> Result<PipelineResponse> {
        debug!(
            request_id = call.context.request_id(),
            endpoint = %call.endpoint,
            "Dispatching to channel pipeline"
        );
        self.channel_pipeline
            .process(call, Arc::clone(&self.bot), cancel)
            .await
    }

    /// Authenticate a skill call, then forward it to the skill pipeline
    pub async fn handle_skill_message(
        &self,
        call: InboundCall,
        cancel: CancellationToken,
    ) -> Result<SkillOutcome> {
        if !self.authorize(&call.context) {
            return Ok(SkillOutcome::Rejected);
        }
        self.forward_skill_message(call, cancel)
            .await
            .map(SkillOutcome::Forwarded)
    }

    /// Decide whether a skill caller may proceed
    ///
    /// Only looks at the request context, so transports can call it before
    /// reading the body. No authenticator means every caller is allowed.
    pub fn authorize(&self, context: &CallContext) -> bool {
        let Some(authenticator) = &self.authenticator else {
            return true;
        };
        if authenticator.authenticate(context) {
            return true;
        }
        warn!(
            request_id = context.request_id(),
            authenticator = authenticator.name(),
            remote = ?context.remote_addr(),
            "Skill call rejected"
        );
        false
    }

    /// Forward an already authorized skill call to the skill pipeline
    pub async fn forward_skill_message(
        &self,
        call: InboundCall,
        cancel: CancellationToken,
    ) -> Result<PipelineResponse> {
        debug!(
            request_id = call.context.request_id(),
            endpoint = %call.endpoint,
            "Dispatching to skill pipeline"
        );
        self.skill_pipeline
            .process(call, Arc::clone(&self.bot), cancel)
            .await
    }

    /// Route a call by its endpoint
    pub async fn dispatch(
        &self,
        call: InboundCall,
        cancel: CancellationToken,
    ) -> Result<SkillOutcome> {
        match call.endpoint {
            Endpoint::Standard => self
                .handle_channel_message(call, cancel)
                .await
                .map(SkillOutcome::Forwarded),
            Endpoint::Skill => self.handle_skill_message(call, cancel).await,
        }
    }
}

impl std::fmt::Debug for SkillController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillController")
            .field(
                "authenticator",
                &self.authenticator.as_ref().map(|a| a.name().to_string()),
            )
            .finish_non_exhaustive()
    }
}
