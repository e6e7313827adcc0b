//! Content merger
//!
//! Joins translated content, language-independent metadata and author records
//! into sorted feed items. Two variants with opposite driving sets:
//! - the global feed is driven by content, so posts without a translation in
//!   the requested language are skipped
//! - a profile is driven by metadata, so every post the user wrote shows up,
//!   untranslated ones as "Untitled"

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::entities::{FeedItem, FeedKey, PostContent, PostId, PostMetadata, User, UserId};

pub const DEFAULT_CATEGORY: &str = "General";
pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNTITLED: &str = "Untitled";

/// Author display names keyed by user id, built once per fetch cycle
#[derive(Debug, Clone, Default)]
pub struct AuthorDirectory {
    names: HashMap<UserId, String>,
}

impl AuthorDirectory {
    pub fn from_users(users: &[User]) -> Self {
        let names = users
            .iter()
            .map(|user| (user.user_id, user.display_name().to_string()))
            .collect();
        Self { names }
    }

    /// Display name for an author, or "Unknown User" when absent or unmapped
    pub fn name_of(&self, author: Option<UserId>) -> &str {
        author
            .and_then(|id| self.names.get(&id))
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_USER)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Index records by key; the first record with a given key wins
fn index_first<T, K, F>(records: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(key(record)).or_insert(record);
    }
    index
}

fn category_of(meta: Option<&PostMetadata>) -> String {
    meta.and_then(|m| m.category.as_deref())
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string()
}

/// Merge for the home feed: one item per content row
pub fn merge_global(
    metadata: &[PostMetadata],
    content: &[PostContent],
    authors: &AuthorDirectory,
) -> Vec<FeedItem> {
    let by_post = index_first(metadata, |m| m.post_id);

    let mut items: Vec<FeedItem> = content
        .iter()
        .map(|row| {
            let meta = by_post.get(&row.postid).copied();
            let author_id = meta.and_then(|m| m.author_id);
            FeedItem {
                id: FeedKey::resolve(row.id, row.postid),
                post_id: row.postid,
                title: row.title.clone().unwrap_or_default(),
                content: row.content.clone().unwrap_or_default(),
                category: category_of(meta),
                status: meta.and_then(|m| m.status.clone()),
                created_at: meta.and_then(|m| m.created_at.clone()),
                author_name: authors.name_of(author_id).to_string(),
                author_id,
            }
        })
        .collect();

    sort_newest_first(&mut items);
    items
}

/// Merge for a profile page: one item per metadata record of `owner`
pub fn merge_profile(
    metadata: &[PostMetadata],
    content: &[PostContent],
    owner: &User,
) -> Vec<FeedItem> {
    let by_post: HashMap<PostId, &PostContent> = index_first(content, |c| c.postid);
    let author_name = if owner.username.trim().is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        owner.username.clone()
    };

    let mut items: Vec<FeedItem> = metadata
        .iter()
        .map(|meta| {
            let row = by_post.get(&meta.post_id).copied();
            FeedItem {
                id: FeedKey::resolve(row.and_then(|r| r.id), meta.post_id),
                post_id: meta.post_id,
                title: row
                    .and_then(|r| r.title.clone())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED.to_string()),
                content: row.and_then(|r| r.content.clone()).unwrap_or_default(),
                category: category_of(Some(meta)),
                status: meta.status.clone(),
                created_at: meta.created_at.clone(),
                author_name: author_name.clone(),
                author_id: meta.author_id.or(Some(owner.user_id)),
            }
        })
        .collect();

    sort_newest_first(&mut items);
    items
}

/// Sort newest first
///
/// Items with a missing or unparseable `created_at` go after every dated item.
/// The sort is stable, so ties keep their input order.
pub fn sort_newest_first(items: &mut [FeedItem]) {
    items.sort_by_cached_key(|item| Reverse(item.created_at_time()));
}
