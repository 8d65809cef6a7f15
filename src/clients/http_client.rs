use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::auth::AuthService;
use crate::domain::User;
use crate::error::{ServiceError, SystemError};
use super::UserInfoService;

const PROFILE_PATH: &str = "users/me";

/// Connection settings for [`HttpUserInfoClient`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

/// Body shapes the profile endpoints are known to answer with.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// REST client for the profile endpoints of the backend.
#[derive(Clone, Debug)]
pub struct HttpUserInfoClient {
    client: Client,
    base_url: String,
    api_version: String,
    auth: Arc<AuthService>,
}

impl HttpUserInfoClient {
    pub fn new(config: &HttpConfig, auth: Arc<AuthService>) -> Result<Self, SystemError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SystemError::HttpClient)?;

        info!(base_url = %config.base_url, "Creating user-info API client");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            auth,
        })
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}/{}", self.base_url, self.api_version, path)
    }

    /// Attach the bearer token when the session has one
    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth.token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and map any non-success status to a [`ServiceError`]
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ServiceError> {
        let response = self.authorize(builder).await.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                // Token might be expired, clear it
                self.auth.clear().await;
                Err(ServiceError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound(PROFILE_PATH.to_string())),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                error!(status = status.as_u16(), "Request failed");
                Err(ServiceError::Status { status: status.as_u16(), body })
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ServiceError> {
        let envelope: Envelope<T> = self.send(builder).await?.json().await?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl UserInfoService for HttpUserInfoClient {
    #[instrument(skip(self))]
    async fn get_user_info(&self) -> Result<User, ServiceError> {
        debug!("Sending request");
        self.send_json(self.client.get(self.build_url(PROFILE_PATH))).await
    }

    #[instrument(skip(self, user))]
    async fn update_user_info(&self, user: &User) -> Result<User, ServiceError> {
        debug!(password_change = user.password.is_some(), "Sending request");
        self.send_json(self.client.put(self.build_url(PROFILE_PATH)).json(user)).await
    }

    #[instrument(skip(self))]
    async fn delete_user(&self) -> Result<(), ServiceError> {
        debug!("Sending request");
        self.send(self.client.delete(self.build_url(PROFILE_PATH))).await?;
        Ok(())
    }
}
