// YAML-file overrides for client configuration

use serde::{Deserialize, Serialize};

/// Optional overrides loaded from a YAML file; unset fields keep the
/// built-in defaults.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_version: Option<String>,
}
