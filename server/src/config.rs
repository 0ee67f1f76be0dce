use secrecy::SecretString;
use serde::Deserialize;
use types::Result;
use url::Url;

#[derive(Clone, Deserialize)]
pub struct Config {
    /// Base URL of the marketplace REST API, e.g. `https://api.example.com/v1/`.
    pub backend_url: Url,
    /// Bearer token the admin front-end uses for every backend call.
    pub backend_token: SecretString,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl Config {
    /// Reads `marketdesk.toml` (optional) and `MARKETDESK_*` environment variables.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("marketdesk").required(false))
            .add_source(
                config::Environment::with_prefix("MARKETDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
