//! DTO modules that bridge services with templates and APIs.

pub mod api;
#[cfg(feature = "server")]
pub mod main;
