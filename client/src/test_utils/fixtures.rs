//! Test fixtures
//!
//! Factory functions for creating test records with sensible defaults.

use crate::domain::entities::{ContentId, PostContent, PostId, PostMetadata, User, UserId};

/// Create a test user; display name unset so it falls back to `username`
pub fn test_user(id: i64, username: &str) -> User {
    User {
        user_id: UserId(id),
        username: username.to_string(),
        name: None,
        bio: None,
        email: Some(format!("{}@example.com", username)),
        role: Some("USER".to_string()),
    }
}

/// Create post metadata without a category
pub fn test_meta(post_id: i64, author: Option<i64>, created_at: Option<&str>) -> PostMetadata {
    PostMetadata {
        post_id: PostId(post_id),
        author_id: author.map(UserId),
        category: None,
        status: Some("PUBLISHED".to_string()),
        created_at: created_at.map(str::to_string),
    }
}

/// Create a translated content row for `postid`
pub fn test_content(id: Option<i64>, postid: i64, title: &str) -> PostContent {
    PostContent {
        id: id.map(ContentId),
        postid: PostId(postid),
        title: Some(title.to_string()),
        content: Some(format!("Body of {}", title)),
    }
}
