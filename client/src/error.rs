//! Error types for the Lingopost client
//!
//! This module defines error types for each layer:
//! - `ApiError`: blog API transport and status errors
//! - `AppError`: Application layer errors surfaced to the views

use thiserror::Error;

/// Blog API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized - no valid session")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Login required")]
    LoginRequired,

    #[error("Session expired")]
    SessionExpired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Registration failed: {0}")]
    RegistrationFailed(#[source] ApiError),

    #[error("Publishing failed: {0}")]
    PublishFailed(#[source] ApiError),
}

impl AppError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => {
                "Invalid email or password. Please try again.".to_string()
            }
            AppError::LoginRequired => "Please log in to continue.".to_string(),
            AppError::SessionExpired => "Session expired. Please login again.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::RegistrationFailed(_) => {
                "Registration failed. Username or Email might already exist.".to_string()
            }
            AppError::PublishFailed(_) => "Error creating post. Please try again.".to_string(),
        }
    }
}
