use serde::Deserialize;

use super::error::ClientError;

/// Environment-derived client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub meeting_server_base_url: String,
}

impl Config {
    /// Loads the configuration from the environment, reading a `.env` file
    /// first when one is present.
    pub fn load() -> Result<Self, ClientError> {
        dotenv::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| ClientError::EnvError(e.to_string()))
    }
}
