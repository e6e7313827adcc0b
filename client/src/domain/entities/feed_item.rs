//! Feed item view model
//!
//! A denormalized record joining one post's translated content, its metadata
//! and its author's name. Built fresh on every fetch and never sent back.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use super::post::{ContentId, PostId};
use super::user::UserId;

/// Identity of a feed item for list rendering
///
/// The content row's id when there is one, otherwise the post id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FeedKey {
    Content(ContentId),
    Post(PostId),
}

impl FeedKey {
    pub fn resolve(content_id: Option<ContentId>, post_id: PostId) -> Self {
        content_id.map_or(FeedKey::Post(post_id), FeedKey::Content)
    }
}

impl std::fmt::Display for FeedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKey::Content(id) => write!(f, "{}", id),
            FeedKey::Post(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub id: FeedKey,
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub title: String,
    pub content: String,
    /// Never empty; "General" when the post has none
    pub category: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "authorId")]
    pub author_id: Option<UserId>,
}

impl FeedItem {
    /// Parsed creation time, `None` when absent or unparseable
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an API timestamp
///
/// Accepts RFC 3339, naive date-times (either `T` or space separated) and bare
/// dates. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
