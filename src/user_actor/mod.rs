//! User accounts, roles and the seller-request gate.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
