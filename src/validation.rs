// Request preflight validation
//
// Local checks for constraints the service documents; failing them here
// avoids a round trip for a request the service would reject anyway.

use crate::error::ClientError;
use url::Url;

/// Maximum number of asset names accepted by one history request.
pub const MAX_ASSET_NAMES_PER_REQUEST: usize = 100;

const PARENT_PREFIXES: [&str; 3] = ["projects/", "folders/", "organizations/"];

/// A parent must be a relative root-asset name: an organization, folder or
/// project identifier with a non-empty trailing component.
pub fn validate_parent(parent: &str) -> Result<(), ClientError> {
    let valid = PARENT_PREFIXES
        .iter()
        .any(|prefix| parent.len() > prefix.len() && parent.starts_with(prefix));
    if valid {
        Ok(())
    } else {
        Err(ClientError::InvalidRequest(format!(
            "parent must be projects/..., folders/... or organizations/..., got '{}'",
            parent
        )))
    }
}

/// A history request with an empty list is a documented no-op and passes;
/// more than [`MAX_ASSET_NAMES_PER_REQUEST`] entries is rejected.
pub fn validate_asset_names(asset_names: &[String]) -> Result<(), ClientError> {
    if asset_names.len() > MAX_ASSET_NAMES_PER_REQUEST {
        return Err(ClientError::InvalidRequest(format!(
            "at most {} asset names per request, got {}",
            MAX_ASSET_NAMES_PER_REQUEST,
            asset_names.len()
        )));
    }
    Ok(())
}

/// Export destinations must be storage URIs of the form `gs://bucket/object`.
pub fn validate_gcs_uri(uri: &str) -> Result<(), ClientError> {
    let parsed = Url::parse(uri)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid destination uri '{}': {}", uri, e)))?;
    if parsed.scheme() != "gs" || parsed.host_str().is_none() {
        return Err(ClientError::InvalidRequest(format!(
            "destination uri must be of the form gs://bucket/object, got '{}'",
            uri
        )));
    }
    Ok(())
}

/// Feed resource names must be non-empty; the service generates them on
/// creation, so only read/update/delete calls carry one.
pub fn validate_feed_name(name: &str) -> Result<(), ClientError> {
    if name.is_empty() {
        return Err(ClientError::InvalidRequest(
            "feed name must not be empty".to_string(),
        ));
    }
    Ok(())
}
