use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any document type must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> { Ok(()) }

    // --- Action Handler ---

    /// Handle a custom domain-specific action. Runs inside the actor, so the
    /// read and the write it performs are one atomic step.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures raised by the actor machinery itself, independent of any domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate evaluated inside the actor for `List` requests.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Insert {
        item: T,
        respond_to: Response<T::Id>,
    },
    GetOrCreate {
        id: T::Id,
        payload: T::CreatePayload,
        respond_to: Response<(T, bool)>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<Filter<T>>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Option<IdGenerator<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    /// Actor whose `Create` requests get an id from `next_id_fn`.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id_fn)))
    }

    /// Actor for collections keyed by a natural id (e.g. an email address).
    /// Items enter only through `GetOrCreate` or `Insert`.
    pub fn keyed(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    fn build(buffer_size: usize, next_id_fn: Option<IdGenerator<T::Id>>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn,
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Insert { item, respond_to } => {
                    let _ = respond_to.send(self.handle_insert(item));
                }
                ResourceRequest::GetOrCreate { id, payload, respond_to } => {
                    let _ = respond_to.send(self.handle_get_or_create(id, payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items = self
                        .store
                        .values()
                        .filter(|item| filter.as_ref().map_or(true, |f| f(item)))
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("Actor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let Some(next_id) = self.next_id_fn.as_ref() else {
            return Err(FrameworkError::Rejected("collection requires an explicit id".to_string()));
        };
        let id = next_id();
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        debug!(id = %id, "Item created");
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_insert(&mut self, item: T) -> Result<T::Id, FrameworkError> {
        let id = item.id().clone();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_get_or_create(
        &mut self,
        id: T::Id,
        payload: T::CreatePayload,
    ) -> Result<(T, bool), FrameworkError> {
        if let Some(existing) = self.store.get(&id) {
            return Ok((existing.clone(), false));
        }
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        debug!(id = %id, "Item created on first sight");
        self.store.insert(id, item.clone());
        Ok((item, true))
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(item) = self.store.get_mut(&id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        // Patch a copy so a rejected update leaves the stored item untouched.
        let mut updated = item.clone();
        updated.on_update(patch).map_err(FrameworkError::Rejected)?;
        *item = updated.clone();
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        match self.store.get(&id) {
            Some(item) => {
                item.on_delete().map_err(FrameworkError::Rejected)?;
                Ok(self.store.remove(&id))
            }
            None => {
                warn!(id = %id, "Delete of missing item");
                Ok(None)
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derived Clone would require `T: Clone` on the channel type parameters.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
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

    pub async fn insert(&self, item: T) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Insert { item, respond_to }).await
    }

    pub async fn get_or_create(
        &self,
        id: T::Id,
        payload: T::CreatePayload,
    ) -> Result<(T, bool), FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetOrCreate { id, payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter: None, respond_to }).await
    }

    pub async fn list_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::List { filter: Some(filter), respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: String,
        label: String,
        slots: u32,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
        slots: u32,
    }

    #[derive(Debug)]
    struct ShelfPatch {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum ShelfAction {
        TakeSlot,
    }

    impl Entity for Shelf {
        type Id = String;
        type CreatePayload = ShelfCreate;
        type Patch = ShelfPatch;
        type Action = ShelfAction;
        type ActionResult = u32;

        fn id(&self) -> &String { &self.id }

        fn from_create(id: String, payload: ShelfCreate) -> Result<Self, String> {
            if payload.label.is_empty() {
                return Err("label required".to_string());
            }
            Ok(Self { id, label: payload.label, slots: payload.slots })
        }

        fn on_update(&mut self, patch: ShelfPatch) -> Result<(), String> {
            if let Some(label) = patch.label {
                if label.is_empty() {
                    return Err("label required".to_string());
                }
                self.label = label;
            }
            Ok(())
        }

        fn handle_action(&mut self, action: ShelfAction) -> Result<u32, String> {
            match action {
                ShelfAction::TakeSlot => {
                    if self.slots == 0 {
                        return Err("shelf full".to_string());
                    }
                    self.slots -= 1;
                    Ok(self.slots)
                }
            }
        }
    }

    fn spawn_shelves() -> ResourceClient<Shelf> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("shelf_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_shelves();

        let id = client.create(ShelfCreate { label: "A".into(), slots: 1 }).await.unwrap();
        assert_eq!(id, "shelf_1");

        let left = client.perform_action(id.clone(), ShelfAction::TakeSlot).await.unwrap();
        assert_eq!(left, 0);

        let err = client.perform_action(id.clone(), ShelfAction::TakeSlot).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("shelf full".to_string()));

        let missing = client.perform_action("shelf_9".into(), ShelfAction::TakeSlot).await.unwrap_err();
        assert_eq!(missing, FrameworkError::NotFound("shelf_9".to_string()));
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_stored_item() {
        let client = spawn_shelves();
        let id = client.create(ShelfCreate { label: "A".into(), slots: 3 }).await.unwrap();

        let err = client.update(id.clone(), ShelfPatch { label: Some(String::new()) }).await;
        assert!(matches!(err, Err(FrameworkError::Rejected(_))));

        let shelf = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(shelf.label, "A");

        let shelf = client.update(id, ShelfPatch { label: Some("B".into()) }).await.unwrap();
        assert_eq!(shelf.label, "B");
    }

    #[tokio::test]
    async fn test_delete_reports_missing_as_none() {
        let client = spawn_shelves();
        let id = client.create(ShelfCreate { label: "A".into(), slots: 3 }).await.unwrap();

        let removed = client.delete(id.clone()).await.unwrap();
        assert_eq!(removed.map(|s| s.label), Some("A".to_string()));
        assert_eq!(client.delete(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_and_filtered_list() {
        let client = spawn_shelves();
        client.create(ShelfCreate { label: "A".into(), slots: 0 }).await.unwrap();
        client.create(ShelfCreate { label: "B".into(), slots: 4 }).await.unwrap();

        let restored = Shelf { id: "shelf_x".into(), label: "X".into(), slots: 2 };
        client.insert(restored.clone()).await.unwrap();
        let again = client.insert(restored).await.unwrap_err();
        assert_eq!(again, FrameworkError::AlreadyExists("shelf_x".to_string()));

        assert_eq!(client.list().await.unwrap().len(), 3);
        let mut open: Vec<String> = client
            .list_where(|s: &Shelf| s.slots > 0)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.label)
            .collect();
        open.sort();
        assert_eq!(open, vec!["B".to_string(), "X".to_string()]);
    }

    #[tokio::test]
    async fn test_keyed_actor_get_or_create() {
        let (actor, client) = ResourceActor::<Shelf>::keyed(10);
        tokio::spawn(actor.run());

        let err = client.create(ShelfCreate { label: "A".into(), slots: 1 }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));

        let (first, created) = client
            .get_or_create("front".into(), ShelfCreate { label: "A".into(), slots: 1 })
            .await
            .unwrap();
        assert!(created);
        assert_eq!(first.id, "front");

        let (second, created) = client
            .get_or_create("front".into(), ShelfCreate { label: "Other".into(), slots: 9 })
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (actor, client) = ResourceActor::<Shelf>::keyed(1);
        drop(actor);
        let err = client.get("front".into()).await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}
