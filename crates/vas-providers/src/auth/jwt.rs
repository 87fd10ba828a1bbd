//! Bearer-token skill authenticator
//!
//! Validates an HS256 JWT from the `Authorization` header and checks that
//! the calling bot's application id is on the allow list.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use tracing::debug;
use vas_domain::error::{Error, Result};
use vas_domain::ports::SkillAuthenticator;
use vas_domain::value_objects::CallContext;

use crate::constants::ANY_CALLER;

/// Claims read from a skill caller's token
#[derive(Debug, Deserialize)]
struct SkillClaims {
    /// Application id of the calling bot (v1 tokens)
    appid: Option<String>,
    /// Authorized party (v2 tokens)
    azp: Option<String>,
}

impl SkillClaims {
    fn caller(&self) -> Option<&str> {
        self.appid.as_deref().or(self.azp.as_deref())
    }
}

/// JWT-based skill authenticator
pub struct JwtSkillAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
    allowed_callers: Vec<String>,
}

impl JwtSkillAuthenticator {
    /// Create an authenticator for tokens signed with `secret`
    ///
    /// An empty `allowed_callers` list admits nobody; `"*"` admits any
    /// caller with a valid token.
    pub fn new(secret: &str, allowed_callers: Vec<String>) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::configuration("JWT secret cannot be empty"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            allowed_callers,
        })
    }

    /// Require the `iss` claim to match
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Require the `aud` claim to match
    pub fn with_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }

    fn is_allowed(&self, caller: &str) -> bool {
        self.allowed_callers
            .iter()
            .any(|allowed| allowed == ANY_CALLER || allowed.eq_ignore_ascii_case(caller))
    }
}

impl std::fmt::Debug for JwtSkillAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSkillAuthenticator")
            .field("allowed_callers", &self.allowed_callers)
            .finish_non_exhaustive()
    }
}

impl SkillAuthenticator for JwtSkillAuthenticator {
    fn authenticate(&self, context: &CallContext) -> bool {
        let Some(token) = context.bearer_token() else {
            return false;
        };

        let claims = match decode::<SkillClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(request_id = context.request_id(), error = %e, "Skill token rejected");
                return false;
            }
        };

        match claims.caller() {
            Some(caller) => self.is_allowed(caller),
            None => false,
        }
    }

    fn name(&self) -> &str {
        "jwt"
    }
}
