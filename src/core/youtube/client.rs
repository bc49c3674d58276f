//! YouTube Data API v3 client.

use super::source::{ChannelLookup, ChannelSource, PlaylistPage};
use crate::core::error::{Result, ShortsError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default API root
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Resources requested for every channel lookup
const CHANNEL_PARTS: &str = "snippet,contentDetails,statistics,brandingSettings,topicDetails";

/// Resources requested for every video lookup
const VIDEO_PARTS: &str = "snippet,contentDetails,statistics,topicDetails";

/// Largest page the API returns for list endpoints
pub const MAX_PAGE_SIZE: usize = 50;

/// HTTP client for the YouTube Data API.
///
/// The API key is sent as the `key` query parameter on every request
/// and is never logged.
#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
    api_base: String,
    api_key: String,
}

impl YouTubeClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `api_base` - API root, e.g. [`DEFAULT_API_BASE`]
    /// * `api_key` - YouTube Data API key
    /// * `timeout` - Per-request timeout
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ShortsError::Usage(
                "Provide --api-key or set YOUTUBE_API_KEY".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shorts-creator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into(),
            api_key,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// GET `<api_base>/<endpoint>` and decode the JSON body.
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.api_base.trim_end_matches('/'), endpoint);
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShortsError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ChannelSource for YouTubeClient {
    async fn channels(&self, lookup: &ChannelLookup) -> Result<Vec<Value>> {
        let mut params = vec![("part", CHANNEL_PARTS.to_string())];
        match lookup {
            ChannelLookup::Ids(ids) => params.push(("id", ids.join(","))),
            ChannelLookup::Handle(handle) => params.push(("forHandle", handle.clone())),
            ChannelLookup::Username(name) => params.push(("forUsername", name.clone())),
        }

        let data = self.get("channels", &params).await?;
        Ok(items(&data))
    }

    async fn search_channel_ids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let params = [
            ("part", "snippet".to_string()),
            ("type", "channel".to_string()),
            ("q", query.to_string()),
            ("maxResults", limit.to_string()),
        ];

        let data = self.get("search", &params).await?;
        Ok(items(&data)
            .iter()
            .filter_map(|item| item.pointer("/snippet/channelId"))
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect())
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        let mut params = vec![
            ("part", "snippet,contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", MAX_PAGE_SIZE.to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }

        let data = self.get("playlistItems", &params).await?;
        let video_ids = items(&data)
            .iter()
            .filter_map(|item| item.pointer("/contentDetails/videoId"))
            .filter_map(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        Ok(PlaylistPage {
            video_ids,
            next_page_token: data
                .get("nextPageToken")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        })
    }

    async fn videos(&self, ids: &[String]) -> Result<Vec<Value>> {
        let params = [("part", VIDEO_PARTS.to_string()), ("id", ids.join(","))];

        let data = self.get("videos", &params).await?;
        Ok(items(&data))
    }
}

fn items(data: &Value) -> Vec<Value> {
    data.get("items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Pull `error.message` out of an API error body, else return the body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}
