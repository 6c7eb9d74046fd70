//! Plant-specific domain logic, including stock adjustment actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
