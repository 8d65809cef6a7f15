use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors returned by a user-info backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized, please log in again")]
    Unauthorized,
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Local backend error: {0}")]
    Backend(#[from] FrameworkError),
}

/// Errors raised by a dialog facility while talking to the user.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("Dialog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors raised while starting or stopping the application system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("Failed to seed local backend: {0}")]
    Seed(#[source] FrameworkError),
    #[error("Backend task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
