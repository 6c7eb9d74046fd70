use tracing::{error, info};
use crate::clients::{OrderClient, PlantClient, UserClient};
use crate::actor_framework::ResourceActor;
use crate::domain::{Order, Plant, User};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The storefront system that owns the plant, order and user actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StorefrontSystem {
    pub plant_client: PlantClient,
    pub order_client: OrderClient,
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

impl StorefrontSystem {
    pub fn new(buffer_size: usize) -> Self {
        info!(buffer_size, "Starting storefront system");

        // 1. Catalog
        let (plant_actor, plant_resource_client) =
            ResourceActor::<Plant>::new(buffer_size, sequential_ids("plant"));
        let plant_client = PlantClient::new(plant_resource_client);
        let plant_handle = tokio::spawn(plant_actor.run());

        // 2. Orders, which reserve and release stock through the catalog
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(buffer_size, sequential_ids("order"));
        let order_client = OrderClient::new(order_resource_client, plant_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        // 3. Users, keyed by email
        let (user_actor, user_resource_client) = ResourceActor::<User>::keyed(buffer_size);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        Self {
            plant_client,
            order_client,
            user_client,
            handles: vec![plant_handle, order_handle, user_handle],
        }
    }

    /// Drops the system's clients and waits for every actor to drain.
    ///
    /// Actors stop once all clones of their client are gone, so any clone
    /// still held elsewhere (e.g. by a running HTTP router) delays shutdown.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.user_client);
        drop(self.plant_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
