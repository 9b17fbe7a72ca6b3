// Routing-header construction
//
// Every request that carries a `parent` or `name` field echoes that field
// into the `x-goog-request-params` header so the transport layer can route
// the call. The field key goes out verbatim; the value is percent-encoded.

/// Header the transport uses to route a call from an extracted request field.
pub const REQUEST_PARAMS_HEADER: &str = "x-goog-request-params";

/// Ordered `field=value` pairs destined for [`REQUEST_PARAMS_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingParams {
    pairs: Vec<(String, String)>,
}

impl RoutingParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the common single-field case.
    pub fn from_param(field: &str, value: &str) -> Self {
        Self::new().with(field, value)
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.pairs.push((field.to_string(), value.to_string()));
        self
    }

    /// Format as `field=<urlencoded value>` pairs joined with `&`.
    pub fn header_value(&self) -> String {
        self.pairs
            .iter()
            .map(|(field, value)| format!("{}={}", field, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_percent_encoded() {
        let params = RoutingParams::from_param("parent", "projects/12345");
        assert_eq!(params.header_value(), "parent=projects%2F12345");
    }

    #[test]
    fn test_field_key_goes_out_verbatim() {
        // update calls route on the nested feed.name field; the dot must
        // survive unencoded.
        let params = RoutingParams::from_param("feed.name", "projects/p/feeds/f");
        assert_eq!(params.header_value(), "feed.name=projects%2Fp%2Ffeeds%2Ff");
    }

    #[test]
    fn test_multiple_pairs_joined_with_ampersand() {
        let params = RoutingParams::new()
            .with("parent", "projects/1")
            .with("name", "projects/1/feeds/2");
        assert_eq!(
            params.header_value(),
            "parent=projects%2F1&name=projects%2F1%2Ffeeds%2F2"
        );
    }
}
