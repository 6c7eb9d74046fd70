//! Typed handles over the resource actors.

mod macros;
pub mod order_client;
pub mod plant_client;
pub mod user_client;

pub use order_client::*;
pub use plant_client::*;
pub use user_client::*;
