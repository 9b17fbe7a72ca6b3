// Client library for a cloud resource-inventory API: export an asset
// snapshot to storage, batch-query asset history, and manage feeds that
// subscribe to asset-change notifications.
//
// Network I/O is delegated to an injected transport; this crate builds
// typed requests, derives routing headers and maps resource names through
// a compiled path template.

pub mod config;
pub mod domain;
pub mod error;
pub mod routing;
pub mod rpc;
pub mod services;
pub mod validation;

pub use config::ClientConfig;
pub use domain::template::PathTemplate;
pub use error::{ClientError, RpcError, TemplateError};
pub use rpc::{OperationHandle, OperationPoller, RequestMetadata, RpcMethod, Transport};
pub use services::asset_service::{AssetServiceClient, ExportOperation, FEED_PATH_TEMPLATE};
