//! Channel and video records as written to a channel dump.
//!
//! Records are flattened from YouTube Data API v3 resources. Nested
//! objects the planner never inspects (thumbnails, statistics, topic
//! details) are carried through as raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Channel metadata
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub published_at: Option<String>,
    pub country: Option<String>,
    pub thumbnails: Option<Value>,
    pub keywords: Option<String>,
    pub statistics: Value,
    pub topic_details: Value,
    pub uploads_playlist: Option<String>,
}

impl ChannelRecord {
    /// Flatten a `channels` API resource.
    pub fn from_api(item: &Value) -> Self {
        Self {
            id: string_at(item, "/id"),
            title: string_at(item, "/snippet/title"),
            description: string_at(item, "/snippet/description"),
            custom_url: string_at(item, "/snippet/customUrl"),
            published_at: string_at(item, "/snippet/publishedAt"),
            country: string_at(item, "/snippet/country"),
            thumbnails: item.pointer("/snippet/thumbnails").cloned(),
            keywords: string_at(item, "/brandingSettings/channel/keywords"),
            statistics: object_at(item, "/statistics"),
            topic_details: object_at(item, "/topicDetails"),
            uploads_playlist: string_at(item, "/contentDetails/relatedPlaylists/uploads"),
        }
    }

    /// Display title, falling back to a generic name
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Channel")
    }
}

/// Video metadata
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub category_id: Option<String>,
    /// ISO 8601 duration, e.g. `PT1M5S`
    pub duration: Option<String>,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
    pub thumbnails: Option<Value>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    pub topic_details: Value,
}

impl VideoRecord {
    /// Flatten a `videos` API resource.
    pub fn from_api(item: &Value) -> Self {
        let tags = item
            .pointer("/snippet/tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: string_at(item, "/id"),
            title: string_at(item, "/snippet/title"),
            description: string_at(item, "/snippet/description"),
            published_at: string_at(item, "/snippet/publishedAt"),
            tags,
            category_id: string_at(item, "/snippet/categoryId"),
            duration: string_at(item, "/contentDetails/duration"),
            view_count: string_at(item, "/statistics/viewCount"),
            like_count: string_at(item, "/statistics/likeCount"),
            comment_count: string_at(item, "/statistics/commentCount"),
            thumbnails: item.pointer("/snippet/thumbnails").cloned(),
            channel_id: string_at(item, "/snippet/channelId"),
            channel_title: string_at(item, "/snippet/channelTitle"),
            topic_details: object_at(item, "/topicDetails"),
        }
    }
}

/// A channel with its uploaded videos, as produced by `channel-dump`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelDump {
    pub fetched_at: String,
    pub channel: ChannelRecord,
    pub video_count: usize,
    pub videos: Vec<VideoRecord>,
}

fn string_at(item: &Value, pointer: &str) -> Option<String> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn object_at(item: &Value, pointer: &str) -> Value {
    item.pointer(pointer)
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
