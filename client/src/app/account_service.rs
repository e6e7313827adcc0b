//! Account service
//!
//! Registration. Logging in is the session gate's job; a new account has to
//! log in separately after registering.

use std::sync::Arc;

use crate::domain::entities::NewUser;
use crate::domain::ports::AccountApi;
use crate::error::AppError;

pub struct AccountService<A: AccountApi> {
    accounts: Arc<A>,
}

impl<A: AccountApi> AccountService<A> {
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Register a new account. Nothing is sent if a required field is blank.
    pub async fn register(&self, user: &NewUser) -> Result<(), AppError> {
        let missing = user.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
        }

        self.accounts.create_user(user).await.map_err(|e| {
            tracing::error!("Registration failed for {}: {}", user.username, e);
            AppError::RegistrationFailed(e)
        })?;

        tracing::info!("Registered {}", user.username);
        Ok(())
    }
}
