//! Post service
//!
//! Publishing as the logged-in user. A 401 from the server means our session
//! is gone, so the gate is expired before the error is returned.

use std::sync::Arc;

use crate::app::session::{Access, SessionGate};
use crate::domain::entities::NewPost;
use crate::domain::ports::{AccountApi, ContentApi};
use crate::error::{ApiError, AppError};

pub struct PostService<A, C>
where
    A: AccountApi,
    C: ContentApi,
{
    content: Arc<C>,
    session: Arc<SessionGate<A>>,
}

impl<A, C> PostService<A, C>
where
    A: AccountApi,
    C: ContentApi,
{
    pub fn new(content: Arc<C>, session: Arc<SessionGate<A>>) -> Self {
        Self { content, session }
    }

    pub async fn publish(&self, post: &NewPost) -> Result<(), AppError> {
        let author = match self.session.access() {
            Access::Granted(user) => user,
            _ => return Err(AppError::LoginRequired),
        };

        let missing = post.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
        }

        match self.content.publish_post(post).await {
            Ok(()) => {
                tracing::info!("{} published \"{}\"", author.username, post.title);
                Ok(())
            }
            Err(ApiError::Unauthorized) => {
                self.session.expire();
                Err(AppError::SessionExpired)
            }
            Err(e) => {
                tracing::error!("Failed to create post: {}", e);
                Err(AppError::PublishFailed(e))
            }
        }
    }
}
