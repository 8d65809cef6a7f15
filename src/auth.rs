//! Holds the credentials the HTTP backend presents on every request.

use std::fmt;
use tokio::sync::RwLock;
use tracing::info;

/// Bearer token store shared by the backends of one session.
#[derive(Default)]
pub struct AuthService {
    token: RwLock<Option<String>>,
}

impl AuthService {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token.filter(|t| !t.is_empty())),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Forgets the token after the backend rejected it.
    pub async fn clear(&self) {
        if self.token.write().await.take().is_some() {
            info!("Auth token cleared");
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService").field("token", &"<redacted>").finish()
    }
}
