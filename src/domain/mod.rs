//! Domain entities shared by the server, the repository and the API client.

pub mod banner;
pub mod types;
pub mod user;
