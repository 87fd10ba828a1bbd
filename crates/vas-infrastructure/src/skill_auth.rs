//! Skill authenticator construction
//!
//! Maps `auth.skill` configuration onto one of the authenticators in
//! `vas_providers::auth`, or none.

use std::sync::Arc;

use tracing::info;
use vas_domain::error::{Error, Result};
use vas_domain::ports::SkillAuthenticator;
use vas_providers::auth::{ApiKeyAuthenticator, JwtSkillAuthenticator};

use crate::config::{SkillAuthConfig, SkillAuthMode};

/// Build the authenticator selected by `config.mode`
///
/// `Ok(None)` means the skill endpoint is open to every caller.
pub fn build_skill_authenticator(
    config: &SkillAuthConfig,
) -> Result<Option<Arc<dyn SkillAuthenticator>>> {
    let authenticator: Arc<dyn SkillAuthenticator> = match config.mode {
        SkillAuthMode::Disabled => {
            info!("Skill endpoint authentication disabled");
            return Ok(None);
        }
        SkillAuthMode::ApiKey => {
            let key = config
                .key
                .as_deref()
                .ok_or_else(|| Error::configuration("auth.skill.key is required in api_key mode"))?;
            Arc::new(ApiKeyAuthenticator::new(config.header.clone(), key)?)
        }
        SkillAuthMode::Jwt => {
            let secret = config.jwt_secret.as_deref().ok_or_else(|| {
                Error::configuration("auth.skill.jwt_secret is required in jwt mode")
            })?;
            let mut jwt = JwtSkillAuthenticator::new(secret, config.allowed_callers.clone())?;
            if let Some(issuer) = &config.issuer {
                jwt = jwt.with_issuer(issuer);
            }
            if let Some(audience) = &config.audience {
                jwt = jwt.with_audience(audience);
            }
            Arc::new(jwt)
        }
    };

    info!(
        authenticator = authenticator.name(),
        "Skill endpoint authentication enabled"
    );
    Ok(Some(authenticator))
}
