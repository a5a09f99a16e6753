use std::env;
use std::path::Path;

use config::{Config, Environment, File};
use dotenvy::dotenv;
use log::error;

use banner_board::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(Environment::with_prefix("APP").try_parsing(true))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    if let Some(parent) = Path::new(&server_config.database_url).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    banner_board::run(server_config).await
}
