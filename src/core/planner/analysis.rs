//! Channel analysis helpers: keywords, durations and slugs.

use crate::core::youtube::VideoRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9']+").unwrap());

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static ISO_DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap());

/// Filler words ignored when extracting channel themes
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "with", "this", "that", "from", "into", "your", "you", "how", "why",
        "what", "when", "where", "about", "a", "an", "of", "to", "in", "on", "at", "is", "are",
        "be", "as", "by", "or", "it", "its", "our", "we", "us", "their", "they", "seconds",
        "second", "shorts", "short", "tips", "fast", "quick",
    ]
    .into_iter()
    .collect()
});

/// Number of themes kept for a channel profile
pub const DEFAULT_KEYWORD_LIMIT: usize = 6;

/// Weight of a keyword found in the channel description
const CHANNEL_DESCRIPTION_WEIGHT: usize = 2;

/// Lowercase, dash-separated identifier for directory names.
///
/// Returns `"channel"` when nothing alphanumeric remains.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let slug = NON_SLUG.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "channel".to_string()
    } else {
        slug.to_string()
    }
}

/// Seconds in an ISO 8601 `PT#H#M#S` duration; 0 when absent or invalid.
pub fn parse_duration(duration: Option<&str>) -> u64 {
    let Some(caps) = duration.and_then(|d| ISO_DURATION.captures(d)) else {
        return 0;
    };

    let part = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    part(1) * 3600 + part(2) * 60 + part(3)
}

/// Lowercased content words, in order, with stopwords and words of two
/// characters or fewer removed.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 2 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Most frequent keywords across a channel's videos and description.
///
/// Video titles, descriptions and tags count once per occurrence;
/// channel description words count twice. Ties sort alphabetically.
pub fn top_keywords(
    videos: &[VideoRecord],
    channel_description: Option<&str>,
    limit: usize,
) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for video in videos {
        let text = format!(
            "{} {} {}",
            video.title.as_deref().unwrap_or_default(),
            video.description.as_deref().unwrap_or_default(),
            video.tags.join(" ")
        );
        for word in extract_keywords(&text) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    for word in extract_keywords(channel_description.unwrap_or_default()) {
        *counts.entry(word).or_insert(0) += CHANNEL_DESCRIPTION_WEIGHT;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}

/// Average video length in seconds, or `None` without videos
pub fn average_duration(videos: &[VideoRecord]) -> Option<f64> {
    if videos.is_empty() {
        return None;
    }
    let total: u64 = videos
        .iter()
        .map(|v| parse_duration(v.duration.as_deref()))
        .sum();
    Some(total as f64 / videos.len() as f64)
}

/// Capitalize the first letter of each whitespace-separated word
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
