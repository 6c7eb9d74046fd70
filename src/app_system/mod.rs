//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod storefront;
pub mod tracing;

pub use self::config::*;
pub use self::storefront::*;
pub use self::tracing::*;
