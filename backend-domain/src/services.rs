// Domain services

pub mod selector;

pub use selector::*;
