//! Shared-key skill authenticator

use subtle::ConstantTimeEq;
use vas_domain::error::{Error, Result};
use vas_domain::ports::SkillAuthenticator;
use vas_domain::value_objects::CallContext;

/// Accepts callers that present the configured key in a header
///
/// The comparison is constant-time. A missing header is a rejection.
#[derive(Clone)]
pub struct ApiKeyAuthenticator {
    header: String,
    key: String,
}

impl ApiKeyAuthenticator {
    /// Create an authenticator for `header`
    pub fn new<H: Into<String>, K: Into<String>>(header: H, key: K) -> Result<Self> {
        let header = header.into();
        let key = key.into();
        if header.trim().is_empty() {
            return Err(Error::configuration("Skill API key header cannot be empty"));
        }
        if key.is_empty() {
            return Err(Error::configuration("Skill API key cannot be empty"));
        }
        Ok(Self { header, key })
    }
}

impl std::fmt::Debug for ApiKeyAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuthenticator")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl SkillAuthenticator for ApiKeyAuthenticator {
    fn authenticate(&self, context: &CallContext) -> bool {
        match context.header(&self.header) {
            Some(provided) => provided.as_bytes().ct_eq(self.key.as_bytes()).into(),
            None => false,
        }
    }

    fn name(&self) -> &str {
        "api_key"
    }
}
