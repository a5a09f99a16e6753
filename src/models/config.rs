//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Minimum secret length: the secret keys the flash-message cookie as well.
pub const MIN_SECRET_LEN: usize = 64;

fn default_per_page() -> usize {
    9
}

fn default_token_ttl_hours() -> i64 {
    24
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// Banners shown on one listing page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    /// Lifetime of the `jwt_token` cookie and the token inside it.
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    #[serde(default)]
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Checks values the deserializer cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(format!(
                "the secret must be at least {MIN_SECRET_LEN} bytes long (got {}), set APP_SECRET",
                self.secret.len()
            ));
        }
        if self.per_page == 0 {
            return Err("per_page must be greater than zero".to_string());
        }
        if self.token_ttl_hours <= 0 {
            return Err("token_ttl_hours must be greater than zero".to_string());
        }
        Ok(())
    }
}
