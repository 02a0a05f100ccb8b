pub mod catalogue_client;
pub mod random_source;
pub mod system_info_service;

pub use catalogue_client::*;
pub use random_source::*;
pub use system_info_service::*;
