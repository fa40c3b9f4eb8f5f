//! Content delivery API client.
//!
//! One filtered entries query per build: the client asks for every entry of
//! the configured content type and hands the decoded list straight to the
//! grouping step. There is no retry and no partial-result handling; a
//! failed query fails the build of every page that needs content.

use super::record::{BlogPost, parse_collection};
use crate::config::ApiConfig;
use std::env;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

/// Error from a content delivery API query.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, TLS, timeout).
    #[error("content query failed")]
    Http(#[from] ureq::Error),

    /// Server answered with an error status.
    #[error("content API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not decode as an entry collection.
    #[error("invalid content API response")]
    Json(#[from] serde_json::Error),

    /// No access token in config and the fallback env var is unset.
    #[error("no API access token: set [api].access_token or the `{0}` environment variable")]
    MissingToken(String),
}

/// Client for the entries endpoint of a content delivery API.
#[derive(Debug)]
pub struct ContentClient {
    agent: Agent,
    url: String,
    token: String,
    content_type: String,
}

impl ContentClient {
    /// Build a client from the `[api]` config section.
    ///
    /// The access token comes from the config file or, when absent, from
    /// the environment variable named by `token_env`.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ApiError> {
        let token = api
            .access_token
            .clone()
            .or_else(|| env::var(&api.token_env).ok())
            .ok_or_else(|| ApiError::MissingToken(api.token_env.clone()))?;

        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(api.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            url: api.url.trim_end_matches('/').to_owned(),
            token,
            content_type: api.content_type.clone(),
        })
    }

    /// Fetch all entries of the configured content type, in provider order.
    pub fn fetch_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let url = entries_url(&self.url, &self.token, &self.content_type);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::Status {
                status,
                body: error_body,
            });
        }

        let text = body.read_to_string()?;
        Ok(parse_collection(&text)?)
    }
}

/// Build the entries query URL for one content type.
fn entries_url(base: &str, token: &str, content_type: &str) -> String {
    format!(
        "{base}/entries?access_token={}&content_type={}",
        urlencoding::encode(token),
        urlencoding::encode(content_type),
    )
}
