use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

fn default_listen_port() -> String {
    "8000".into()
}

fn default_pool_max_connections() -> u32 {
    5
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_listen_port")]
    pub listen_port: String,
    // optional so the service can come up on the in-memory store
    pub database_url: Option<String>,
    #[serde(default = "default_pool_max_connections")]
    pub database_pool_max_connections: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
