//! Feed service
//!
//! Fetches the record sets behind a feed concurrently and hands them to the
//! merger. A failed fetch abandons the whole merge; the caller gets an empty
//! feed and the failure only shows up in the logs.

use std::sync::Arc;

use serde::Serialize;

use crate::app::merge::{merge_global, merge_profile, AuthorDirectory};
use crate::domain::entities::{FeedItem, Lang, User, UserId};
use crate::domain::ports::{AccountApi, ContentApi};
use crate::error::ApiError;

/// Outcome of loading a profile page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfileView {
    NotFound,
    Loaded { owner: User, posts: Vec<FeedItem> },
}

/// Service for assembling feeds
pub struct FeedService<A, C>
where
    A: AccountApi,
    C: ContentApi,
{
    accounts: Arc<A>,
    content: Arc<C>,
}

impl<A, C> FeedService<A, C>
where
    A: AccountApi,
    C: ContentApi,
{
    pub fn new(accounts: Arc<A>, content: Arc<C>) -> Self {
        Self { accounts, content }
    }

    /// Home feed in `lang`, newest first. Empty on any failure.
    pub async fn global_feed(&self, lang: &Lang) -> Vec<FeedItem> {
        match self.try_global_feed(lang).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to load feed ({}): {}", lang, e);
                Vec::new()
            }
        }
    }

    async fn try_global_feed(&self, lang: &Lang) -> Result<Vec<FeedItem>, ApiError> {
        let (metadata, content, users) = tokio::try_join!(
            self.content.list_posts(lang),
            self.content.list_post_contents(lang),
            self.accounts.list_users(),
        )?;

        tracing::debug!(
            "Merging {} content rows against {} posts and {} users",
            content.len(),
            metadata.len(),
            users.len()
        );

        let authors = AuthorDirectory::from_users(&users);
        Ok(merge_global(&metadata, &content, &authors))
    }

    /// Profile page for `user_id` in `lang`
    ///
    /// The owner is fetched first; if that fails the profile is not found. If
    /// the owner loads but the posts do not, the owner is shown with no posts.
    pub async fn profile(&self, user_id: UserId, lang: &Lang) -> ProfileView {
        let owner = match self.accounts.get_user(user_id).await {
            Ok(owner) => owner,
            Err(e) => {
                tracing::error!("Error loading profile {}: {}", user_id, e);
                return ProfileView::NotFound;
            }
        };

        let posts = match self.try_profile_posts(&owner, lang).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Error loading posts for profile {}: {}", user_id, e);
                Vec::new()
            }
        };

        ProfileView::Loaded { owner, posts }
    }

    async fn try_profile_posts(
        &self,
        owner: &User,
        lang: &Lang,
    ) -> Result<Vec<FeedItem>, ApiError> {
        let (metadata, content) = tokio::try_join!(
            self.content.list_user_posts(owner.user_id, lang),
            self.content.list_post_contents(lang),
        )?;

        Ok(merge_profile(&metadata, &content, owner))
    }
}
