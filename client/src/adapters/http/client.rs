//! Blog API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{Lang, NewPost, NewUser, PostContent, PostMetadata, User, UserId};
use crate::domain::ports::{AccountApi, ContentApi};
use crate::error::ApiError;

/// Implementation of the blog API client
///
/// Keeps a cookie store so the session cookie set by `/user/login` is sent on
/// every later request.
#[derive(Clone)]
pub struct HttpBlogClient {
    http: Client,
    base_url: String,
}

impl HttpBlogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.api_url(path)).send().await?;
        self.handle_response(response, path).await
    }

    async fn post_json<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.api_url(path)).json(body).send().await?;
        self.handle_response(response, path).await
    }

    async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        tracing::debug!("POST {}", path);
        let mut request = self.http.post(self.api_url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        self.handle_empty_response(response, path).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
        path: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            Err(status_error(response, path).await)
        }
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        path: &str,
    ) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(status_error(response, path).await)
        }
    }
}

async fn status_error(response: reqwest::Response, path: &str) -> ApiError {
    match response.status() {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound(path.to_string()),
        status => {
            let message = response.text().await.unwrap_or_default();
            ApiError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl AccountApi for HttpBlogClient {
    async fn check_login(&self) -> Result<User, ApiError> {
        self.get_json("/user/check-login").await
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.post_json("/user/login", &LoginRequest { email, password })
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty::<()>("/user/logout", None).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.post_empty("/user/create", Some(user)).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/user/").await
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        self.get_json(&format!("/user/{}", id)).await
    }
}

#[async_trait]
impl ContentApi for HttpBlogClient {
    async fn list_posts(&self, lang: &Lang) -> Result<Vec<PostMetadata>, ApiError> {
        self.get_json(&format!("/posts/?lang={}", encode(lang.code())))
            .await
    }

    async fn list_post_contents(&self, lang: &Lang) -> Result<Vec<PostContent>, ApiError> {
        self.get_json(&format!("/post_contents/?lang={}", encode(lang.code())))
            .await
    }

    async fn list_user_posts(
        &self,
        author: UserId,
        lang: &Lang,
    ) -> Result<Vec<PostMetadata>, ApiError> {
        self.get_json(&format!(
            "/posts/user/{}?lang={}",
            author,
            encode(lang.code())
        ))
        .await
    }

    async fn publish_post(&self, post: &NewPost) -> Result<(), ApiError> {
        self.post_empty("/posts/publish", Some(post)).await
    }
}
