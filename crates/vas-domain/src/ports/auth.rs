//! Skill Authentication Port
//!
//! Defines the contract for deciding whether a caller may use the skill
//! endpoint.

use crate::value_objects::CallContext;

/// Skill authenticator interface
///
/// Returns the authentication decision for a call. The check is synchronous
/// and must not fail: anything that prevents a positive decision is `false`.
pub trait SkillAuthenticator: Send + Sync {
    /// Evaluate the decision for a call
    fn authenticate(&self, context: &CallContext) -> bool;

    /// Short name used in logs
    fn name(&self) -> &str;
}
