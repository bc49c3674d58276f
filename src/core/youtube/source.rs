//! Channel source abstraction and the dump workflow built on it.
//!
//! [`ChannelSource`] is the seam between the workflow (resolve a
//! channel, page through its uploads, batch video lookups) and the
//! transport. [`super::YouTubeClient`] implements it over HTTP; tests
//! use an in-memory source.

use super::input::ChannelRef;
use super::types::{ChannelDump, ChannelRecord, VideoRecord};
use crate::core::error::{Result, ShortsError};
use async_trait::async_trait;
use serde_json::Value;

/// Channels returned by a name search before the ID lookup
pub const SEARCH_LIMIT: usize = 5;

/// Video IDs per `videos` request
pub const VIDEO_BATCH_SIZE: usize = 50;

/// Direct channel lookups supported by the `channels` endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelLookup {
    Ids(Vec<String>),
    Handle(String),
    Username(String),
}

/// One page of an uploads playlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
}

/// Remote source of channel and video resources
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Raw `channels` resources matching the lookup
    async fn channels(&self, lookup: &ChannelLookup) -> Result<Vec<Value>>;

    /// Channel IDs for a free-text search, best match first
    async fn search_channel_ids(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    /// One page of a playlist's video IDs
    async fn playlist_page(&self, playlist_id: &str, page_token: Option<&str>)
        -> Result<PlaylistPage>;

    /// Raw `videos` resources for up to [`VIDEO_BATCH_SIZE`] IDs
    async fn videos(&self, ids: &[String]) -> Result<Vec<Value>>;
}

/// Find the channels a reference points to, best match first.
pub async fn resolve_channel(
    source: &dyn ChannelSource,
    channel: &ChannelRef,
) -> Result<Vec<ChannelRecord>> {
    let lookup = match channel {
        ChannelRef::Id(id) => ChannelLookup::Ids(vec![id.clone()]),
        ChannelRef::Handle(handle) => ChannelLookup::Handle(handle.clone()),
        ChannelRef::Username(name) => ChannelLookup::Username(name.clone()),
        ChannelRef::Custom(query) | ChannelRef::Query(query) => {
            let ids = source.search_channel_ids(query, SEARCH_LIMIT).await?;
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            ChannelLookup::Ids(ids)
        }
        ChannelRef::Unresolvable => return Ok(Vec::new()),
    };

    let items = source.channels(&lookup).await?;
    Ok(items.iter().map(ChannelRecord::from_api).collect())
}

/// Collect video IDs from an uploads playlist, following page tokens.
///
/// Stops after `max_videos` IDs when given; `Some(0)` means no limit.
pub async fn fetch_upload_video_ids(
    source: &dyn ChannelSource,
    playlist_id: &str,
    max_videos: Option<usize>,
) -> Result<Vec<String>> {
    let limit = max_videos.filter(|m| *m > 0);
    let mut video_ids = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = source
            .playlist_page(playlist_id, page_token.as_deref())
            .await?;

        for id in page.video_ids {
            video_ids.push(id);
            if limit.is_some_and(|max| video_ids.len() >= max) {
                return Ok(video_ids);
            }
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(video_ids)
}

/// Look up video details in batches of [`VIDEO_BATCH_SIZE`].
pub async fn fetch_video_details(
    source: &dyn ChannelSource,
    video_ids: &[String],
) -> Result<Vec<VideoRecord>> {
    let mut videos = Vec::with_capacity(video_ids.len());

    for batch in video_ids.chunks(VIDEO_BATCH_SIZE) {
        let items = source.videos(batch).await?;
        videos.extend(items.iter().map(VideoRecord::from_api));
    }

    Ok(videos)
}

/// Resolve a channel and fetch its uploads.
///
/// # Errors
///
/// - [`ShortsError::ChannelNotFound`] if nothing matches `input`
/// - [`ShortsError::UploadsPlaylistMissing`] if the first match has no
///   uploads playlist
pub async fn dump_channel(
    source: &dyn ChannelSource,
    input: &str,
    max_videos: Option<usize>,
) -> Result<ChannelDump> {
    let channel_ref = ChannelRef::parse(input);
    tracing::info!("Resolving channel {:?}", channel_ref);

    let channel = resolve_channel(source, &channel_ref)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ShortsError::ChannelNotFound(input.trim().to_string()))?;

    let uploads = channel.uploads_playlist.clone().ok_or_else(|| {
        ShortsError::UploadsPlaylistMissing(channel.id.clone().unwrap_or_default())
    })?;

    let video_ids = fetch_upload_video_ids(source, &uploads, max_videos).await?;
    tracing::info!(
        "Fetching details for {} video(s) from {}",
        video_ids.len(),
        uploads
    );
    let videos = fetch_video_details(source, &video_ids).await?;

    Ok(ChannelDump {
        fetched_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        channel,
        video_count: videos.len(),
        videos,
    })
}
