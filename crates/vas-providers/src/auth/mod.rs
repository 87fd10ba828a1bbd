//! Skill authenticators
//!
//! Implementations of the `SkillAuthenticator` port guarding the
//! inter-skill endpoint.

mod api_key;
mod jwt;

pub use api_key::ApiKeyAuthenticator;
pub use jwt::JwtSkillAuthenticator;
