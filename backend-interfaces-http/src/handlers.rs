pub mod catalogue_handlers;
pub mod ops_handlers;
pub mod page_handlers;

pub use catalogue_handlers::*;
pub use ops_handlers::*;
pub use page_handlers::*;
