//! HTTP transport for the storefront: maps REST routes onto the typed clients.
//!
//! ## Routes
//!
//! - `POST /orderPurchase`, `DELETE /cancelorder/:id`, `GET /myorders/:email`,
//!   `GET /seller/orders/:email` - order lifecycle
//! - `POST /add-plant`, `GET /plants`, `GET /details/:id`, `PUT /update/:id`,
//!   `DELETE /delete/:id`, `GET|PATCH /plants/quantity/:id` - catalog
//! - `POST /user/:email`, `PATCH /user/:email`, `GET /user/role/:email`,
//!   `PATCH /user/role/:email`, `GET /users` - accounts and roles

mod error;
mod orders;
mod plants;
mod users;

use std::future::Future;
use std::net::SocketAddr;

use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tracing::info;

use crate::app_system::StorefrontSystem;
use crate::clients::{OrderClient, PlantClient, UserClient};

pub use error::ApiError;

/// Client handles shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub plants: PlantClient,
    pub orders: OrderClient,
    pub users: UserClient,
}

impl From<&StorefrontSystem> for AppState {
    fn from(system: &StorefrontSystem) -> Self {
        Self {
            plants: system.plant_client.clone(),
            orders: system.order_client.clone(),
            users: system.user_client.clone(),
        }
    }
}

/// Build the axum `Router` for the storefront API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // accounts
        .route("/user/:email", post(users::save_user).patch(users::request_seller))
        .route("/user/role/:email", get(users::get_role).patch(users::update_role))
        .route("/users", get(users::list_users))
        // catalog
        .route("/add-plant", post(plants::add_plant))
        .route("/plants", get(plants::list_plants))
        .route("/details/:id", get(plants::plant_details))
        .route("/update/:id", put(plants::update_plant))
        .route("/delete/:id", delete(plants::delete_plant))
        .route(
            "/plants/quantity/:id",
            get(plants::stock_level).patch(plants::update_quantity),
        )
        // orders
        .route("/orderPurchase", post(orders::purchase))
        .route("/cancelorder/:id", delete(orders::cancel_order))
        .route("/myorders/:email", get(orders::my_orders))
        .route("/seller/orders/:email", get(orders::seller_orders))
        .with_state(state)
}

/// Serve the API at `addr` until `shutdown` resolves.
pub async fn serve(
    state: AppState,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "plantNet is listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn index() -> &'static str {
    "Hello from plantNet Server.."
}
