// Domain entities

pub mod item;
pub mod runtime_config;
pub mod site;

pub use item::*;
pub use runtime_config::*;
pub use site::*;
