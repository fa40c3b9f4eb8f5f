//! `[api]` section configuration - the content delivery API.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[api]` section in travelog.toml.
///
/// # Example
/// ```toml
/// [api]
/// url = "https://cdn.contentful.com/spaces/abc123/environments/master"
/// content_type = "blog"
/// token_env = "TRAVELOG_API_TOKEN"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the entries endpoint, without the `/entries` suffix.
    #[serde(default)]
    pub url: String,

    /// Access token. Prefer `token_env` so the token stays out of the
    /// config file.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Environment variable consulted when `access_token` is unset.
    #[serde(default = "defaults::api::token_env")]
    #[educe(Default = defaults::api::token_env())]
    pub token_env: String,

    /// Content type of blog entries.
    #[serde(default = "defaults::api::content_type")]
    #[educe(Default = defaults::api::content_type())]
    pub content_type: String,

    /// Request timeout in seconds.
    #[serde(default = "defaults::api::timeout_secs")]
    #[educe(Default = defaults::api::timeout_secs())]
    pub timeout_secs: u64,
}
