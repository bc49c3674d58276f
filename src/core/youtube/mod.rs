//! Channel metadata retrieval from the YouTube Data API v3.
//!
//! - **input**: classifying channel IDs, handles, URLs and queries
//! - **types**: flattened channel/video records and the dump format
//! - **source**: the `ChannelSource` seam and the dump workflow
//! - **client**: the HTTP implementation of `ChannelSource`

pub mod client;
pub mod input;
pub mod source;
pub mod types;

pub use client::{YouTubeClient, DEFAULT_API_BASE};
pub use input::ChannelRef;
pub use source::{
    dump_channel, fetch_upload_video_ids, fetch_video_details, resolve_channel, ChannelLookup,
    ChannelSource, PlaylistPage,
};
pub use types::{ChannelDump, ChannelRecord, VideoRecord};
