//! Pure provider selection
//!
//! Primary wins when both of its credentials are present. Otherwise the
//! fallback key is required. Routing always uses the fallback.

use vas_domain::constants::{FALLBACK_KEY, PRIMARY_CLIENT_ID_KEY, PRIMARY_CLIENT_SECRET_KEY};
use vas_domain::error::{Error, Result};
use vas_domain::value_objects::{ProviderSelection, ServiceConfiguration};

use crate::constants::MISSING_FALLBACK_KEY_MESSAGE;

/// Choose the point-of-interest backend for a configuration
///
/// Partial primary credentials count as absent. The locale only reaches the
/// fallback; the primary provider does not localize.
pub fn select_point_of_interest_provider(
    config: &ServiceConfiguration,
    locale: &str,
) -> Result<ProviderSelection> {
    let client_id = config.value(PRIMARY_CLIENT_ID_KEY);
    let client_secret = config.value(PRIMARY_CLIENT_SECRET_KEY);

    if let (Some(client_id), Some(client_secret)) = (client_id, client_secret) {
        return Ok(ProviderSelection::Primary {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        });
    }

    fallback_selection(config, locale)
}

/// Choose the routing backend for a configuration
///
/// Only the fallback provider supports routing, so primary credentials are
/// never consulted.
pub fn select_routing_provider(
    config: &ServiceConfiguration,
    locale: &str,
) -> Result<ProviderSelection> {
    fallback_selection(config, locale)
}

fn fallback_selection(config: &ServiceConfiguration, locale: &str) -> Result<ProviderSelection> {
    let api_key = config
        .value(FALLBACK_KEY)
        .ok_or_else(|| Error::configuration(MISSING_FALLBACK_KEY_MESSAGE))?;

    Ok(ProviderSelection::Fallback {
        api_key: api_key.to_string(),
        locale: locale.to_string(),
    })
}
