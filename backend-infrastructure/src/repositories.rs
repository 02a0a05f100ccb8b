pub mod config_files;

pub use config_files::*;
