use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserPatch};
use crate::error::ServiceError;
use super::UserInfoService;

/// Client for the local user actor, bound to the signed-in user's id.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    user_id: String,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>, user_id: impl Into<String>) -> Self {
        Self { inner, user_id: user_id.into() }
    }
}

#[async_trait]
impl UserInfoService for UserClient {
    #[instrument(skip(self))]
    async fn get_user_info(&self) -> Result<User, ServiceError> {
        debug!(user_id = %self.user_id, "Sending request");
        self.inner
            .get(self.user_id.clone())
            .await?
            .ok_or_else(|| ServiceError::NotFound(self.user_id.clone()))
    }

    // The payload's id is ignored; the session decides whose profile changes.
    #[instrument(skip(self, user))]
    async fn update_user_info(&self, user: &User) -> Result<User, ServiceError> {
        debug!(
            user_id = %self.user_id,
            password_change = user.password.is_some(),
            "Sending request"
        );
        Ok(self.inner.update(self.user_id.clone(), UserPatch::from(user)).await?)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self) -> Result<(), ServiceError> {
        debug!(user_id = %self.user_id, "Sending request");
        Ok(self.inner.delete(self.user_id.clone()).await?)
    }
}
