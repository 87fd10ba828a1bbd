//! Authentication configuration types

use serde::{Deserialize, Serialize};

use vas_providers::constants::SKILL_KEY_HEADER;

/// How callers of the skill endpoint are authenticated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillAuthMode {
    /// No authenticator; every caller is allowed
    #[default]
    #[serde(rename = "none")]
    Disabled,
    /// Shared key in a request header
    ApiKey,
    /// HS256 bearer token with an allow list of caller app ids
    Jwt,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Skill endpoint authentication
    pub skill: SkillAuthConfig,
}

/// Skill endpoint authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillAuthConfig {
    /// Authenticator selection
    pub mode: SkillAuthMode,
    /// Header carrying the key in `api_key` mode
    pub header: String,
    /// Shared key in `api_key` mode
    pub key: Option<String>,
    /// HS256 secret in `jwt` mode
    pub jwt_secret: Option<String>,
    /// Required `iss` claim
    pub issuer: Option<String>,
    /// Required `aud` claim
    pub audience: Option<String>,
    /// App ids allowed to call the skill; `*` allows any
    pub allowed_callers: Vec<String>,
}

impl Default for SkillAuthConfig {
    fn default() -> Self {
        Self {
            mode: SkillAuthMode::Disabled,
            header: SKILL_KEY_HEADER.to_string(),
            key: None,
            jwt_secret: None,
            issuer: None,
            audience: None,
            allowed_callers: Vec::new(),
        }
    }
}
