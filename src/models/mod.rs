//! Database models and server-side configuration.

#[cfg(feature = "server")]
pub mod auth;
pub mod banner;
#[cfg(feature = "server")]
pub mod config;
pub mod user;
