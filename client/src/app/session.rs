//! Session gate
//!
//! Owns the client's belief about who is logged in. Created once per
//! application and shared by reference; the only automatic transition is the
//! initial whoami probe, everything else is an explicit login or logout.

use std::sync::Arc;

use tokio::sync::{watch, OnceCell};

use crate::domain::entities::User;
use crate::domain::ports::AccountApi;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The initial probe has not settled yet
    Unknown,
    Authenticated(User),
    Anonymous,
}

/// What a view that requires a login should do right now
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Loading,
    RedirectToLogin,
    Granted(User),
}

pub struct SessionGate<A: AccountApi> {
    accounts: Arc<A>,
    state: watch::Sender<SessionState>,
    probed: OnceCell<()>,
}

impl<A: AccountApi> SessionGate<A> {
    pub fn new(accounts: Arc<A>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            accounts,
            state,
            probed: OnceCell::new(),
        }
    }

    /// Ask the server who we are. Runs once per gate; later calls wait for the
    /// first probe and return.
    pub async fn probe(&self) {
        self.probed
            .get_or_init(|| async {
                let outcome = match self.accounts.check_login().await {
                    Ok(user) => {
                        tracing::info!("Session found for: {}", user.username);
                        SessionState::Authenticated(user)
                    }
                    Err(e) => {
                        tracing::info!("No active session found: {}", e);
                        SessionState::Anonymous
                    }
                };
                // An explicit login or logout during the probe takes precedence
                self.state.send_if_modified(|state| {
                    if *state == SessionState::Unknown {
                        *state = outcome;
                        true
                    } else {
                        false
                    }
                });
            })
            .await;
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Watch session changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        match &*self.state.borrow() {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// True only while the initial probe is outstanding
    pub fn is_loading(&self) -> bool {
        *self.state.borrow() == SessionState::Unknown
    }

    pub fn access(&self) -> Access {
        match &*self.state.borrow() {
            SessionState::Unknown => Access::Loading,
            SessionState::Anonymous => Access::RedirectToLogin,
            SessionState::Authenticated(user) => Access::Granted(user.clone()),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        match self.accounts.login(email, password).await {
            Ok(user) => {
                tracing::info!("Logged in as {}", user.username);
                self.state
                    .send_replace(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Log out locally, and on the server if it answers
    pub async fn logout(&self) {
        if let Err(e) = self.accounts.logout().await {
            tracing::error!("Logout backend call failed: {}", e);
        }
        self.state.send_replace(SessionState::Anonymous);
    }

    /// The server rejected our session on a mutating call
    pub fn expire(&self) {
        tracing::warn!("Session expired");
        self.state.send_replace(SessionState::Anonymous);
    }
}
