//! Configuration model loaded from the environment.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Connection string for the catalog database. When absent the server
    /// still starts, with storage-backed endpoints degraded.
    pub database_url: Option<String>,
    /// Logical database name, reported by the diagnostic endpoint.
    pub database_name: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}
