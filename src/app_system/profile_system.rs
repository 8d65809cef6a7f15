use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::actor_framework::{FrameworkError, ResourceActor, ResourceClient};
use crate::auth::AuthService;
use crate::clients::{HttpConfig, HttpUserInfoClient, UserClient, UserInfoService};
use crate::domain::{User, UserCreate};
use crate::error::SystemError;

/// Where profile calls go.
#[derive(Debug, Clone)]
pub enum Backend {
    /// The REST API.
    Remote(HttpConfig),
    /// An in-process store seeded with one signed-in user.
    Local(UserCreate),
}

/// Owns the user-info backend for the lifetime of the app.
///
/// Responsible for starting the backend, handing out the service the screen
/// talks to, and stopping the local actor on shutdown.
pub struct ProfileSystem {
    pub user_info: Arc<dyn UserInfoService>,
    local: Option<LocalBackend>,
}

struct LocalBackend {
    client: ResourceClient<User>,
    handle: JoinHandle<()>,
}

impl ProfileSystem {
    #[instrument(skip_all)]
    pub async fn start(backend: Backend, auth: Arc<AuthService>) -> Result<Self, SystemError> {
        match backend {
            Backend::Remote(config) => {
                info!(base_url = %config.base_url, "Using remote user-info backend");
                let client = HttpUserInfoClient::new(&config, auth)?;
                Ok(Self { user_info: Arc::new(client), local: None })
            }
            Backend::Local(seed) => {
                info!("Using local user-info backend");
                let user_id_counter = Arc::new(AtomicU64::new(1));
                let next_user_id = move || {
                    let id = user_id_counter.fetch_add(1, Ordering::SeqCst);
                    format!("user_{}", id)
                };

                let (user_actor, client) = ResourceActor::<User>::new(32, next_user_id);
                let handle = tokio::spawn(user_actor.run());

                let user_id = client.create(seed).await.map_err(SystemError::Seed)?;
                info!(user_id = %user_id, "Signed in as local user");

                Ok(Self {
                    user_info: Arc::new(UserClient::new(client.clone(), user_id)),
                    local: Some(LocalBackend { client, handle }),
                })
            }
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Some(local) = self.local else {
            return Ok(());
        };

        // The actor may already be gone if every client was dropped.
        match local.client.shutdown().await {
            Ok(()) | Err(FrameworkError::ActorClosed) => {}
            Err(e) => error!(error = %e, "Shutdown request failed"),
        }

        if let Err(e) = local.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn seed() -> UserCreate {
        UserCreate {
            name: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            password: Some("demo".to_string()),
        }
    }

    #[tokio::test]
    async fn test_local_backend_serves_seeded_user() {
        let system = ProfileSystem::start(Backend::Local(seed()), Arc::new(AuthService::default()))
            .await
            .unwrap();

        let user = system.user_info.get_user_info().await.unwrap();
        assert_eq!(user.id, "user_1");
        assert_eq!(user.name, "Demo");
        assert_eq!(user.password, None);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_local_backend_rejects_invalid_seed() {
        let mut bad = seed();
        bad.email.clear();

        let result = ProfileSystem::start(Backend::Local(bad), Arc::new(AuthService::default())).await;
        assert!(matches!(result, Err(SystemError::Seed(FrameworkError::Rejected(_)))));
    }

    #[tokio::test]
    async fn test_shutdown_completes_while_service_is_still_shared() {
        let system = ProfileSystem::start(Backend::Local(seed()), Arc::new(AuthService::default()))
            .await
            .unwrap();
        let _held = system.user_info.clone();

        tokio::time::timeout(Duration::from_secs(1), system.shutdown())
            .await
            .expect("shutdown should not wait for outstanding clients")
            .unwrap();
    }

    #[tokio::test]
    async fn test_remote_backend_needs_no_io_to_start() {
        let config = HttpConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_version: "v1".to_string(),
            timeout: Duration::from_secs(1),
        };
        let system = ProfileSystem::start(Backend::Remote(config), Arc::new(AuthService::default()))
            .await
            .unwrap();
        system.shutdown().await.unwrap();
    }
}
