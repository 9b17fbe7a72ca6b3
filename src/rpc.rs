// Transport and long-running-operation abstractions
//
// The client never performs network I/O itself: it hands a method tag, a
// serialized request and outbound metadata to an injected `Transport`.
// Retries, deadlines, auth and wire encoding all live behind that trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RpcError;

/// Fully-qualified service name the transport should dispatch against.
pub const SERVICE_NAME: &str = "google.cloud.asset.v1p2beta1.AssetService";

/// The closed set of service methods.
///
/// Dispatch is typed rather than keyed by method-name strings; the wire name
/// is derived from the variant, not the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    ExportAssets,
    BatchGetAssetsHistory,
    CreateFeed,
    GetFeed,
    ListFeeds,
    UpdateFeed,
    DeleteFeed,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::ExportAssets => "ExportAssets",
            RpcMethod::BatchGetAssetsHistory => "BatchGetAssetsHistory",
            RpcMethod::CreateFeed => "CreateFeed",
            RpcMethod::GetFeed => "GetFeed",
            RpcMethod::ListFeeds => "ListFeeds",
            RpcMethod::UpdateFeed => "UpdateFeed",
            RpcMethod::DeleteFeed => "DeleteFeed",
        }
    }

    /// `<service>/<method>`, the path form transports usually want.
    pub fn full_name(&self) -> String {
        format!("{}/{}", SERVICE_NAME, self.as_str())
    }
}

/// Outbound per-call metadata: routing and client-identification headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    headers: Vec<(String, String)>,
}

impl RequestMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// The RPC-call collaborator: one network call per invocation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(
        &self,
        method: RpcMethod,
        request: Value,
        metadata: &RequestMetadata,
    ) -> Result<Value, RpcError>;
}

/// Server-assigned handle for a long-running operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OperationHandle {
    /// Operation resource name, e.g. `operations/export-assets-1234`.
    pub name: String,
}

/// Polls an operation to completion and yields its terminal response payload.
#[async_trait]
pub trait OperationPoller: Send + Sync {
    async fn wait(&self, operation: &OperationHandle) -> Result<Value, RpcError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(RpcMethod::BatchGetAssetsHistory.as_str(), "BatchGetAssetsHistory");
        assert_eq!(
            RpcMethod::ExportAssets.full_name(),
            "google.cloud.asset.v1p2beta1.AssetService/ExportAssets"
        );
    }

    #[test]
    fn test_metadata_header_lookup() {
        let metadata = RequestMetadata::new()
            .with_header("x-goog-request-params", "parent=projects%2F123")
            .with_header("x-goog-api-client", "gl-rust/1");
        assert_eq!(
            metadata.header("x-goog-request-params"),
            Some("parent=projects%2F123")
        );
        assert_eq!(metadata.header("missing"), None);
        assert_eq!(metadata.headers().len(), 2);
    }
}
