// Domain model for the asset-inventory API
//
// Plain request/response records mirroring the service's wire messages.
// The client serializes these for the transport and deserializes responses
// back into them; no logic lives here.

pub mod template;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asset content type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    #[serde(rename = "CONTENT_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "RESOURCE")]
    Resource,
    #[serde(rename = "IAM_POLICY")]
    IamPolicy,
}

/// A storage location, `gs://bucket_name/object_name`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GcsDestination {
    pub uri: String,
}

/// Where export results are written. All results are newline-delimited JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub gcs_destination: GcsDestination,
}

/// A message-queue topic that receives asset-change notifications.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PubsubDestination {
    pub topic: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedOutputConfig {
    pub pubsub_destination: PubsubDestination,
}

/// A subscription to asset-change notifications under one parent.
///
/// The `name` field is server-generated in the format
/// `projects/{project_number}/feeds/{feed_id}` (or the `folders/` and
/// `organizations/` variants) and must be empty on creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_types: Vec<String>,
    #[serde(default)]
    pub content_type: ContentType,
    pub feed_output_config: FeedOutputConfig,
}

/// Time window bounds for history queries. Both ends optional; an unset end
/// defaults to the current time on the server side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Which fields of a feed an update applies to. Must not be empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMask {
    pub paths: Vec<String>,
}

/// An asset at a point in time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub asset_type: String,
}

/// One history entry: an asset together with its validity window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TemporalAsset {
    pub window: TimeWindow,
    #[serde(default)]
    pub deleted: bool,
    pub asset: Asset,
}

// ---- request records ----

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportAssetsRequest {
    /// Relative name of the root asset: an organization number
    /// (`organizations/123`), a project ID (`projects/my-project-id`),
    /// a project number (`projects/12345`) or a folder number
    /// (`folders/123`).
    pub parent: String,
    /// Snapshot timestamp; the server uses the current time when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<DateTime<Utc>>,
    /// Asset types to snapshot, e.g. `compute.googleapis.com/Disk`.
    /// Empty means all types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_types: Vec<String>,
    #[serde(default)]
    pub content_type: ContentType,
    pub output_config: OutputConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportAssetsResponse {
    pub read_time: DateTime<Utc>,
    pub output_config: OutputConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BatchGetAssetsHistoryRequest {
    pub parent: String,
    /// Full asset names, e.g.
    /// `//compute.googleapis.com/projects/p/zones/z/instances/i`.
    /// An empty list makes the request a no-op; at most 100 entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_names: Vec<String>,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time_window: Option<TimeWindow>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchGetAssetsHistoryResponse {
    #[serde(default)]
    pub assets: Vec<TemporalAsset>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateFeedRequest {
    pub parent: String,
    /// Client-assigned feed identifier, unique under the parent.
    pub feed_id: String,
    pub feed: Feed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetFeedRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListFeedsRequest {
    pub parent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFeedsResponse {
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateFeedRequest {
    /// New feed values; `feed.name` identifies the feed to update.
    pub feed: Feed,
    pub update_mask: FieldMask,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteFeedRequest {
    pub name: String,
}
