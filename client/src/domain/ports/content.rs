//! Content port trait
//!
//! Post metadata and translated content. Content endpoints are filtered by the
//! server to the requested language.

use async_trait::async_trait;

use crate::domain::entities::{Lang, NewPost, PostContent, PostMetadata, UserId};
use crate::error::ApiError;

#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Metadata for the global feed (`GET /posts/?lang=`)
    async fn list_posts(&self, lang: &Lang) -> Result<Vec<PostMetadata>, ApiError>;

    /// Content rows in one language (`GET /post_contents/?lang=`)
    async fn list_post_contents(&self, lang: &Lang) -> Result<Vec<PostContent>, ApiError>;

    /// Metadata for one author (`GET /posts/user/:userId?lang=`)
    async fn list_user_posts(
        &self,
        author: UserId,
        lang: &Lang,
    ) -> Result<Vec<PostMetadata>, ApiError>;

    /// Publish a post as the logged-in user (`POST /posts/publish`)
    async fn publish_post(&self, post: &NewPost) -> Result<(), ApiError>;
}
