//! Parsing user-supplied channel references.

use url::Url;

/// How the user identified a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    /// Channel ID (`UC...`)
    Id(String),
    /// Handle without the leading `@`
    Handle(String),
    /// Legacy `/user/<name>` URL
    Username(String),
    /// Custom `/c/<name>` URL, resolved by search
    Custom(String),
    /// Free text, resolved by search
    Query(String),
    /// A YouTube URL with nothing to look up (e.g. the home page)
    Unresolvable,
}

impl ChannelRef {
    /// Classify a channel ID, handle, URL or search string.
    ///
    /// # Example
    ///
    /// ```
    /// use shorts_creator::core::youtube::ChannelRef;
    ///
    /// assert_eq!(ChannelRef::parse("@rustlang"), ChannelRef::Handle("rustlang".into()));
    /// assert_eq!(
    ///     ChannelRef::parse("https://www.youtube.com/c/RustVideos"),
    ///     ChannelRef::Custom("RustVideos".into())
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        let value = input.trim();

        if value.starts_with("UC") && value.chars().count() >= 20 {
            return ChannelRef::Id(value.to_string());
        }

        if value.starts_with('@') {
            return ChannelRef::Handle(value.trim_start_matches('@').to_string());
        }

        if value.contains("youtube.com") {
            if let Some(parsed) = Self::parse_url(value) {
                return parsed;
            }
        }

        ChannelRef::Query(value.to_string())
    }

    /// Parse a youtube.com URL. `None` means "treat as a search query".
    fn parse_url(value: &str) -> Option<Self> {
        let url = if value.contains("://") {
            Url::parse(value).ok()?
        } else {
            Url::parse(&format!("https://{value}")).ok()?
        };

        let path = url.path().trim_matches('/');
        if path.is_empty() {
            return Some(ChannelRef::Unresolvable);
        }

        let parts: Vec<&str> = path.split('/').collect();

        // Tabs such as /@name/videos address the same channel
        if let Some(handle) = parts[0].strip_prefix('@') {
            return Some(ChannelRef::Handle(
                handle.trim_start_matches('@').to_string(),
            ));
        }

        match parts.as_slice() {
            ["channel", id, ..] => Some(ChannelRef::Id(id.to_string())),
            ["user", name, ..] => Some(ChannelRef::Username(name.to_string())),
            ["c", name, ..] => Some(ChannelRef::Custom(name.to_string())),
            _ => None,
        }
    }

    /// Text used when searching for the channel, if this ref needs a search
    pub fn search_query(&self) -> Option<&str> {
        match self {
            ChannelRef::Custom(q) | ChannelRef::Query(q) => Some(q),
            _ => None,
        }
    }
}
