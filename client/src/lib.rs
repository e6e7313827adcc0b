//! Lingopost client
//!
//! Client core for a multilingual blog: merges translated post content with
//! post metadata and author records into feeds, and gates those feeds behind
//! a cookie-backed session on the remote API.
//! Uses hexagonal (ports & adapters) architecture; the HTTP adapter is the
//! only piece that talks to the network.

use std::sync::Arc;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::HttpBlogClient;
pub use app::{
    Access, AccountService, FeedLoader, FeedService, LoadState, PostService, ProfileLoader,
    ProfileView, SessionGate, SessionState,
};
pub use config::Config;
pub use domain::entities::{
    Category, FeedItem, FeedKey, Lang, NewPost, NewUser, PostContent, PostId, PostMetadata, User,
    UserId,
};
pub use error::{ApiError, AppError};

/// Every service of the client wired to one API implementation
pub struct BlogApp<B>
where
    B: domain::ports::AccountApi + domain::ports::ContentApi + 'static,
{
    pub session: Arc<SessionGate<B>>,
    pub feed_service: Arc<FeedService<B, B>>,
    pub feed: FeedLoader<B, B>,
    pub profile: ProfileLoader<B, B>,
    pub accounts: AccountService<B>,
    pub posts: PostService<B, B>,
    pub config: Config,
}

impl<B> BlogApp<B>
where
    B: domain::ports::AccountApi + domain::ports::ContentApi + 'static,
{
    pub fn new(api: Arc<B>, config: Config) -> Self {
        let session = Arc::new(SessionGate::new(api.clone()));
        let feed_service = Arc::new(FeedService::new(api.clone(), api.clone()));

        Self {
            feed: FeedLoader::new(feed_service.clone(), session.clone()),
            profile: ProfileLoader::new(feed_service.clone(), session.clone()),
            accounts: AccountService::new(api.clone()),
            posts: PostService::new(api, session.clone()),
            session,
            feed_service,
            config,
        }
    }
}

impl<B> BlogApp<B>
where
    B: domain::ports::AccountApi + domain::ports::ContentApi + 'static,
{
    /// Home feed for one caller, bypassing the shared render state
    ///
    /// Concurrent callers each get the feed for their own language. When the
    /// session does not grant access nothing is fetched and the decision is
    /// returned instead.
    pub async fn fetch_feed(&self, lang: &Lang) -> Result<Vec<FeedItem>, Access> {
        match self.session.access() {
            Access::Granted(_) => Ok(self.feed_service.global_feed(lang).await),
            access => Err(access),
        }
    }

    /// Profile page for one caller, gated like [`BlogApp::fetch_feed`]
    pub async fn fetch_profile(
        &self,
        user_id: UserId,
        lang: &Lang,
    ) -> Result<ProfileView, Access> {
        match self.session.access() {
            Access::Granted(_) => Ok(self.feed_service.profile(user_id, lang).await),
            access => Err(access),
        }
    }
}

impl BlogApp<HttpBlogClient> {
    /// Wire the app against the HTTP API described by `config`
    pub fn connect(config: Config) -> Result<Self, ApiError> {
        let api = Arc::new(HttpBlogClient::from_config(&config)?);
        tracing::info!("Using blog API at {}", api.base_url());
        Ok(Self::new(api, config))
    }
}
