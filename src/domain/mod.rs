pub mod user;
pub mod plant;
pub mod order;

pub use user::*;
pub use plant::*;
pub use order::*;
