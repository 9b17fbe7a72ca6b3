// Asset service client - thin pass-through over an injected transport
//
// Each method builds the typed request's routing params, serializes the
// request, delegates to the transport and decodes the typed response.
// Transport failures are surfaced unchanged; nothing is retried here.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, API_CLIENT_HEADER};
use crate::domain::template::PathTemplate;
use crate::domain::{
    BatchGetAssetsHistoryRequest, BatchGetAssetsHistoryResponse, CreateFeedRequest,
    DeleteFeedRequest, ExportAssetsRequest, ExportAssetsResponse, Feed, GetFeedRequest,
    ListFeedsRequest, ListFeedsResponse, UpdateFeedRequest,
};
use crate::error::{ClientError, TemplateError};
use crate::routing::{RoutingParams, REQUEST_PARAMS_HEADER};
use crate::rpc::{OperationHandle, OperationPoller, RequestMetadata, RpcMethod, Transport};
use crate::validation;

/// Resource-name pattern for feeds under a project parent. Folder and
/// organization feed names are accepted by the service but pass through
/// this client untouched.
pub const FEED_PATH_TEMPLATE: &str = "projects/{project}/feeds/{feed}";

/// Client for the asset-inventory service.
///
/// Owns one compiled feed path template, built at construction and reused
/// for every helper call. All I/O goes through the injected [`Transport`];
/// the injected [`OperationPoller`] resolves export operations.
pub struct AssetServiceClient {
    transport: Arc<dyn Transport>,
    poller: Arc<dyn OperationPoller>,
    config: ClientConfig,
    feed_template: PathTemplate,
}

impl AssetServiceClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        poller: Arc<dyn OperationPoller>,
        config: ClientConfig,
    ) -> Self {
        // The pattern is a fixed literal; compilation cannot fail.
        let feed_template =
            PathTemplate::compile(FEED_PATH_TEMPLATE).expect("feed path template is valid");
        Self {
            transport,
            poller,
            config,
            feed_template,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn metadata(&self, params: RoutingParams) -> RequestMetadata {
        let mut metadata =
            RequestMetadata::new().with_header(API_CLIENT_HEADER, self.config.api_client_header());
        if !params.is_empty() {
            metadata = metadata.with_header(REQUEST_PARAMS_HEADER, params.header_value());
        }
        metadata
    }

    async fn dispatch_raw<Req: Serialize>(
        &self,
        method: RpcMethod,
        request: &Req,
        params: RoutingParams,
    ) -> Result<Value, ClientError> {
        let body =
            serde_json::to_value(request).map_err(|e| ClientError::Encode(e.to_string()))?;
        let metadata = self.metadata(params);
        debug!(method = method.as_str(), "dispatching rpc");
        self.transport
            .call(method, body, &metadata)
            .await
            .map_err(ClientError::Rpc)
    }

    async fn dispatch<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        method: RpcMethod,
        request: &Req,
        params: RoutingParams,
    ) -> Result<Resp, ClientError> {
        let response = self.dispatch_raw(method, request, params).await?;
        serde_json::from_value(response).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // -------------------
    // -- Service calls --
    // -------------------

    /// Exports an asset snapshot to a storage destination. The service
    /// tracks the export as a long-running operation; the returned
    /// [`ExportOperation`] resolves it through the injected poller.
    pub async fn export_assets(
        &self,
        request: ExportAssetsRequest,
    ) -> Result<ExportOperation, ClientError> {
        validation::validate_parent(&request.parent)?;
        validation::validate_gcs_uri(&request.output_config.gcs_destination.uri)?;

        let params = RoutingParams::from_param("parent", &request.parent);
        let response = self
            .dispatch_raw(RpcMethod::ExportAssets, &request, params)
            .await?;
        let handle: OperationHandle =
            serde_json::from_value(response).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(ExportOperation {
            handle,
            poller: Arc::clone(&self.poller),
        })
    }

    /// Batch-queries the update history of assets overlapping a time window.
    /// An empty asset-name list is a no-op on the service side.
    pub async fn batch_get_assets_history(
        &self,
        request: BatchGetAssetsHistoryRequest,
    ) -> Result<BatchGetAssetsHistoryResponse, ClientError> {
        validation::validate_parent(&request.parent)?;
        validation::validate_asset_names(&request.asset_names)?;

        let params = RoutingParams::from_param("parent", &request.parent);
        self.dispatch(RpcMethod::BatchGetAssetsHistory, &request, params)
            .await
    }

    /// Creates a feed under a parent project, folder or organization.
    pub async fn create_feed(&self, request: CreateFeedRequest) -> Result<Feed, ClientError> {
        validation::validate_parent(&request.parent)?;
        if request.feed_id.is_empty() {
            return Err(ClientError::InvalidRequest(
                "feed_id must not be empty".to_string(),
            ));
        }

        let params = RoutingParams::from_param("parent", &request.parent);
        self.dispatch(RpcMethod::CreateFeed, &request, params).await
    }

    /// Gets details about one feed.
    pub async fn get_feed(&self, request: GetFeedRequest) -> Result<Feed, ClientError> {
        validation::validate_feed_name(&request.name)?;

        let params = RoutingParams::from_param("name", &request.name);
        self.dispatch(RpcMethod::GetFeed, &request, params).await
    }

    /// Lists all feeds under a parent.
    pub async fn list_feeds(
        &self,
        request: ListFeedsRequest,
    ) -> Result<ListFeedsResponse, ClientError> {
        validation::validate_parent(&request.parent)?;

        let params = RoutingParams::from_param("parent", &request.parent);
        self.dispatch(RpcMethod::ListFeeds, &request, params).await
    }

    /// Updates a feed; only fields named in the update mask change.
    /// Routing uses the nested `feed.name` field.
    pub async fn update_feed(&self, request: UpdateFeedRequest) -> Result<Feed, ClientError> {
        validation::validate_feed_name(&request.feed.name)?;
        if request.update_mask.paths.is_empty() {
            return Err(ClientError::InvalidRequest(
                "update mask must not be empty".to_string(),
            ));
        }

        let params = RoutingParams::from_param("feed.name", &request.feed.name);
        self.dispatch(RpcMethod::UpdateFeed, &request, params).await
    }

    /// Deletes a feed.
    pub async fn delete_feed(&self, request: DeleteFeedRequest) -> Result<(), ClientError> {
        validation::validate_feed_name(&request.name)?;

        let params = RoutingParams::from_param("name", &request.name);
        self.dispatch_raw(RpcMethod::DeleteFeed, &request, params)
            .await?;
        Ok(())
    }

    // --------------------
    // -- Path templates --
    // --------------------

    /// Build a fully-qualified feed resource name.
    pub fn feed_path(&self, project: &str, feed: &str) -> Result<String, TemplateError> {
        let bindings = HashMap::from([
            ("project".to_string(), project.to_string()),
            ("feed".to_string(), feed.to_string()),
        ]);
        self.feed_template.render(&bindings)
    }

    /// Extract the project from a feed resource name.
    pub fn project_from_feed_name(&self, feed_name: &str) -> Result<String, TemplateError> {
        self.capture_from_feed_name(feed_name, "project")
    }

    /// Extract the feed identifier from a feed resource name.
    pub fn feed_from_feed_name(&self, feed_name: &str) -> Result<String, TemplateError> {
        self.capture_from_feed_name(feed_name, "feed")
    }

    fn capture_from_feed_name(
        &self,
        feed_name: &str,
        placeholder: &str,
    ) -> Result<String, TemplateError> {
        let mut bindings = self.feed_template.matches(feed_name)?;
        bindings
            .remove(placeholder)
            .ok_or_else(|| TemplateError::MissingBinding(placeholder.to_string()))
    }
}

/// Handle for an in-flight asset export.
pub struct ExportOperation {
    handle: OperationHandle,
    poller: Arc<dyn OperationPoller>,
}

impl std::fmt::Debug for ExportOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportOperation")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl ExportOperation {
    pub fn handle(&self) -> &OperationHandle {
        &self.handle
    }

    /// Poll the operation to completion and decode its terminal response.
    pub async fn wait(&self) -> Result<ExportAssetsResponse, ClientError> {
        let response = self
            .poller
            .wait(&self.handle)
            .await
            .map_err(ClientError::Rpc)?;
        serde_json::from_value(response).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
