//! Order documents and the errors of the order lifecycle.

pub mod entity;
pub mod error;

pub use error::*;
