//! Mock implementations of port traits
//!
//! An in-memory blog backend. Data lives behind `RwLock`s so tests can poke
//! at it after the services under test have taken their `Arc`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{
    Lang, NewPost, NewUser, PostContent, PostMetadata, User, UserId,
};
use crate::domain::ports::{AccountApi, ContentApi};
use crate::error::ApiError;

// ============================================================================
// In-Memory Blog API
// ============================================================================

#[derive(Default)]
pub struct InMemoryBlogApi {
    users: Arc<RwLock<Vec<User>>>,
    /// email -> (password, user)
    accounts: Arc<RwLock<HashMap<String, (String, User)>>>,
    session: Arc<RwLock<Option<User>>>,
    posts: Arc<RwLock<Vec<PostMetadata>>>,
    contents: Arc<RwLock<HashMap<String, Vec<PostContent>>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    created: Arc<RwLock<Vec<NewUser>>>,
    published: Arc<RwLock<Vec<NewPost>>>,
    should_fail: Arc<AtomicBool>,
    users_fail: Arc<AtomicBool>,
    contents_fail: Arc<AtomicBool>,
    check_login_calls: Arc<AtomicUsize>,
    content_calls: Arc<AtomicUsize>,
}

impl InMemoryBlogApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the server were unreachable
    pub fn failing() -> Self {
        let api = Self::default();
        api.set_failing(true);
        api
    }

    /// Pre-populate a server-side session (as if a cookie were already set)
    pub fn with_session(self, user: User) -> Self {
        *self.session.write().unwrap() = Some(user);
        self
    }

    pub fn with_account(self, email: &str, password: &str, user: User) -> Self {
        self.accounts
            .write()
            .unwrap()
            .insert(email.to_string(), (password.to_string(), user));
        self
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().push(user);
        self
    }

    pub fn with_post(self, meta: PostMetadata) -> Self {
        self.posts.write().unwrap().push(meta);
        self
    }

    pub fn with_content(self, lang: &str, content: PostContent) -> Self {
        self.contents
            .write()
            .unwrap()
            .entry(lang.to_string())
            .or_default()
            .push(content);
        self
    }

    /// Delay every post/content response in `lang`
    pub fn with_delay(self, lang: &str, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(lang.to_string(), delay);
        self
    }

    pub fn set_failing(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn fail_users(&self, fail: bool) {
        self.users_fail.store(fail, Ordering::SeqCst);
    }

    pub fn fail_contents(&self, fail: bool) {
        self.contents_fail.store(fail, Ordering::SeqCst);
    }

    /// Forget the server-side session without telling the client
    pub fn drop_server_session(&self) {
        *self.session.write().unwrap() = None;
    }

    pub fn has_session(&self) -> bool {
        self.session.read().unwrap().is_some()
    }

    pub fn check_login_calls(&self) -> usize {
        self.check_login_calls.load(Ordering::SeqCst)
    }

    pub fn content_calls(&self) -> usize {
        self.content_calls.load(Ordering::SeqCst)
    }

    pub fn created_users(&self) -> Vec<NewUser> {
        self.created.read().unwrap().clone()
    }

    pub fn published_posts(&self) -> Vec<NewPost> {
        self.published.read().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        if self.should_fail.load(Ordering::SeqCst) {
            Err(ApiError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn simulate_latency(&self, lang: &Lang) {
        let delay = self.delays.read().unwrap().get(lang.code()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AccountApi for InMemoryBlogApi {
    async fn check_login(&self) -> Result<User, ApiError> {
        self.check_login_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.session.read().unwrap().clone().ok_or(ApiError::Unauthorized)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.check_failure()?;
        let user = match self.accounts.read().unwrap().get(email) {
            Some((expected, user)) if expected == password => user.clone(),
            _ => return Err(ApiError::Unauthorized),
        };
        *self.session.write().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.check_failure()?;
        *self.session.write().unwrap() = None;
        Ok(())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<(), ApiError> {
        self.check_failure()?;
        let mut users = self.users.write().unwrap();
        let taken = users.iter().any(|u| {
            u.username == new_user.username || u.email.as_deref() == Some(&new_user.email)
        });
        if taken {
            return Err(ApiError::Api {
                status: 409,
                message: "User already exists".to_string(),
            });
        }

        let next_id = users.iter().map(|u| u.user_id.0).max().unwrap_or(0) + 1;
        users.push(User {
            user_id: UserId(next_id),
            username: new_user.username.clone(),
            name: Some(new_user.name.clone()),
            bio: Some(new_user.bio.clone()),
            email: Some(new_user.email.clone()),
            role: Some(new_user.role.clone()),
        });
        self.created.write().unwrap().push(new_user.clone());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.check_failure()?;
        if self.users_fail.load(Ordering::SeqCst) {
            return Err(ApiError::Deserialization("bad user payload".to_string()));
        }
        Ok(self.users.read().unwrap().clone())
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        self.check_failure()?;
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.user_id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/user/{}", id)))
    }
}

#[async_trait]
impl ContentApi for InMemoryBlogApi {
    async fn list_posts(&self, lang: &Lang) -> Result<Vec<PostMetadata>, ApiError> {
        self.simulate_latency(lang).await;
        self.check_failure()?;
        Ok(self.posts.read().unwrap().clone())
    }

    async fn list_post_contents(&self, lang: &Lang) -> Result<Vec<PostContent>, ApiError> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(lang).await;
        self.check_failure()?;
        if self.contents_fail.load(Ordering::SeqCst) {
            return Err(ApiError::Api {
                status: 500,
                message: "translation backend down".to_string(),
            });
        }
        Ok(self
            .contents
            .read()
            .unwrap()
            .get(lang.code())
            .cloned()
            .unwrap_or_default())
    }

    async fn list_user_posts(
        &self,
        author: UserId,
        lang: &Lang,
    ) -> Result<Vec<PostMetadata>, ApiError> {
        self.simulate_latency(lang).await;
        self.check_failure()?;
        Ok(self
            .posts
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.author_id == Some(author))
            .cloned()
            .collect())
    }

    async fn publish_post(&self, post: &NewPost) -> Result<(), ApiError> {
        self.check_failure()?;
        if self.session.read().unwrap().is_none() {
            return Err(ApiError::Unauthorized);
        }
        self.published.write().unwrap().push(post.clone());
        Ok(())
    }
}
