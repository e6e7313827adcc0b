//! Account port trait
//!
//! Session probing, login/logout and registration. The session itself is a
//! server-side cookie the implementation is expected to carry.

use async_trait::async_trait;

use crate::domain::entities::{NewUser, User, UserId};
use crate::error::ApiError;

#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Who is logged in (`GET /user/check-login`)
    async fn check_login(&self) -> Result<User, ApiError>;

    /// Log in with email and password (`POST /user/login`)
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError>;

    /// Invalidate the server-side session (`POST /user/logout`)
    async fn logout(&self) -> Result<(), ApiError>;

    /// Register a new account (`POST /user/create`)
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError>;

    /// Full user directory (`GET /user/`)
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// A single user (`GET /user/:userId`)
    async fn get_user(&self, id: UserId) -> Result<User, ApiError>;
}
