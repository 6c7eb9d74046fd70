//! plantNet storefront: plant catalog, orders with stock reservation, and
//! user accounts, each collection owned by its own actor.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod http;
pub mod order_actor;
pub mod plant_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
