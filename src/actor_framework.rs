use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks)
// =============================================================================

/// Trait that any record must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, FrameworkError>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), FrameworkError> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;
    fn on_delete(&self) -> Result<(), FrameworkError> { Ok(()) }

    /// The copy handed back to callers. Override to strip stored secrets.
    fn snapshot(&self) -> Self { self.clone() }
}

/// Failures reported by the actor or its channels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Serves requests until every client is dropped or a shutdown arrives.
    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Resource actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(%id, "Processing get request");
                    let item = self.store.get(&id).map(T::snapshot);
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Shutdown => {
                    info!("Resource actor shutting down");
                    break;
                }
            }
        }

        info!("Resource actor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id.clone(), payload)?;
        item.on_create()?;
        info!(id = %item.id(), "Item created");
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(item) = self.store.get_mut(&id) else {
            warn!(%id, "Update for unknown item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        // Hooks run on a scratch copy so a rejected patch leaves the store as it was.
        let mut candidate = item.clone();
        candidate.on_update(patch)?;
        *item = candidate;
        info!(%id, "Item updated");
        Ok(item.snapshot())
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let Some(item) = self.store.get(&id) else {
            warn!(%id, "Delete for unknown item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_delete()?;
        self.store.remove(&id);
        info!(%id, "Item deleted");
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
