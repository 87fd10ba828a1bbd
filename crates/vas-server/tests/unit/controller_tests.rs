//! Request router tests

use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use vas_domain::error::Error;
use vas_domain::ports::SkillAuthenticator;
use vas_domain::value_objects::{CallContext, Endpoint, InboundCall, PipelineResponse};
use vas_server::SkillOutcome;

use crate::test_utils::{Behavior, FakePipeline, FixedAuthenticator, controller};

fn call(endpoint: Endpoint) -> InboundCall {
    InboundCall::new(
        endpoint,
        CallContext::new("req-1", "POST", endpoint.path()),
        br#"{"type":"message"}"#.to_vec(),
    )
}

#[tokio::test]
async fn test_channel_call_skips_authenticator() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let auth = FixedAuthenticator::new(false);
    let controller = controller(&channel, &skill, Some(auth.clone() as Arc<dyn SkillAuthenticator>));

    let response = controller
        .handle_channel_message(call(Endpoint::Standard), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response, PipelineResponse::empty(200));
    assert_eq!(channel.calls(), 1);
    assert_eq!(skill.calls(), 0);
    assert_eq!(auth.calls(), 0);
}

#[tokio::test]
async fn test_rejected_skill_call_never_reaches_pipeline() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let auth = FixedAuthenticator::new(false);
    let controller = controller(&channel, &skill, Some(auth.clone() as Arc<dyn SkillAuthenticator>));

    let outcome = controller
        .handle_skill_message(call(Endpoint::Skill), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome, SkillOutcome::Rejected);
    assert_eq!(auth.calls(), 1);
    assert_eq!(skill.calls(), 0);
    assert_eq!(channel.calls(), 0);
}

#[tokio::test]
async fn test_accepted_skill_call_forwards_response() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::new(Behavior::Respond(PipelineResponse::ok(json!({"text": "hi"}))));
    let auth = FixedAuthenticator::new(true);
    let controller = controller(&channel, &skill, Some(auth.clone() as Arc<dyn SkillAuthenticator>));

    let outcome = controller
        .handle_skill_message(call(Endpoint::Skill), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SkillOutcome::Forwarded(PipelineResponse::ok(json!({"text": "hi"})))
    );
    assert_eq!(auth.calls(), 1);
    assert_eq!(skill.calls(), 1);
}

#[tokio::test]
async fn test_skill_call_without_authenticator_is_forwarded() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let controller = controller(&channel, &skill, None);
    assert!(!controller.has_authenticator());

    let outcome = controller
        .handle_skill_message(call(Endpoint::Skill), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome, SkillOutcome::Forwarded(PipelineResponse::empty(200)));
    assert_eq!(skill.calls(), 1);
}

#[test]
fn test_authorize_consults_authenticator_once() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let context = CallContext::new("req-1", "POST", Endpoint::Skill.path());

    let denying = FixedAuthenticator::new(false);
    let controller_denying =
        controller(&channel, &skill, Some(denying.clone() as Arc<dyn SkillAuthenticator>));
    assert!(!controller_denying.authorize(&context));
    assert_eq!(denying.calls(), 1);

    let open = controller(&channel, &skill, None);
    assert!(open.authorize(&context));
    assert_eq!(skill.calls(), 0);
}

#[tokio::test]
async fn test_forward_skill_message_skips_authenticator() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let auth = FixedAuthenticator::new(false);
    let controller = controller(&channel, &skill, Some(auth.clone() as Arc<dyn SkillAuthenticator>));

    let response = controller
        .forward_skill_message(call(Endpoint::Skill), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response, PipelineResponse::empty(200));
    assert_eq!(auth.calls(), 0);
    assert_eq!(skill.calls(), 1);
}

#[tokio::test]
async fn test_pipeline_receives_call_unchanged() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let controller = controller(&channel, &skill, None);

    controller
        .handle_channel_message(call(Endpoint::Standard), CancellationToken::new())
        .await
        .unwrap();

    let seen = channel.last_call().unwrap();
    assert_eq!(seen.endpoint, Endpoint::Standard);
    assert_eq!(seen.context.request_id(), "req-1");
    assert_eq!(seen.body, br#"{"type":"message"}"#.to_vec());
}

#[tokio::test]
async fn test_pipeline_error_propagates_unchanged() {
    let channel = FakePipeline::new(Behavior::Fail(|| Error::provider("bot-relay", "boom")));
    let skill = FakePipeline::ok();
    let controller = controller(&channel, &skill, None);

    let err = controller
        .handle_channel_message(call(Endpoint::Standard), CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Provider { .. }));
    assert_eq!(err.kind(), "provider");
}

#[tokio::test]
async fn test_cancellation_reaches_pipeline() {
    let channel = FakePipeline::new(Behavior::AwaitCancel);
    let skill = FakePipeline::ok();
    let controller = controller(&channel, &skill, None);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move { trigger.cancel() });

    let err = controller
        .handle_channel_message(call(Endpoint::Standard), cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled { .. }));
    assert!(channel.saw_cancel());
}

#[tokio::test]
async fn test_dispatch_routes_by_endpoint() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let auth = FixedAuthenticator::new(true);
    let controller = controller(&channel, &skill, Some(auth.clone() as Arc<dyn SkillAuthenticator>));

    controller
        .dispatch(call(Endpoint::Standard), CancellationToken::new())
        .await
        .unwrap();
    controller
        .dispatch(call(Endpoint::Skill), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(channel.calls(), 1);
    assert_eq!(skill.calls(), 1);
    assert_eq!(auth.calls(), 1);
}

#[test]
fn test_debug_names_authenticator() {
    let channel = FakePipeline::ok();
    let skill = FakePipeline::ok();
    let controller = controller(
        &channel,
        &skill,
        Some(FixedAuthenticator::new(true) as Arc<dyn SkillAuthenticator>),
    );

    assert!(format!("{controller:?}").contains("fixed"));
}
