//! Backends the profile screen can talk to.
//!
//! [`UserInfoService`] is the seam: the screen only ever sees a trait object,
//! so the same screen runs against the REST API ([`HttpUserInfoClient`]) or the
//! in-process store ([`UserClient`]).

pub mod http_client;
pub mod user_client;

use async_trait::async_trait;

use crate::domain::User;
use crate::error::ServiceError;

pub use http_client::*;
pub use user_client::*;

/// Reads and writes the profile of the currently signed-in user.
#[async_trait]
pub trait UserInfoService: Send + Sync {
    async fn get_user_info(&self) -> Result<User, ServiceError>;

    /// Sends a full or partial user and returns the backend's copy.
    async fn update_user_info(&self, user: &User) -> Result<User, ServiceError>;

    async fn delete_user(&self) -> Result<(), ServiceError>;
}
