/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Time budget for each planet store operation (default: `8`).
    pub store_timeout_secs: u64,
    /// Root of the SWAPI-compatible catalog used for enrichment.
    pub swapi_base_url: String,
    /// Timeout for a single catalog lookup (default: `8`).
    pub swapi_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_TIMEOUT_SECS`   | `8`                        |
    /// | `SWAPI_BASE_URL`       | `https://swapi.dev/api`    |
    /// | `SWAPI_TIMEOUT_SECS`   | `8`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = secs_from_env("REQUEST_TIMEOUT_SECS", 30);
        let store_timeout_secs = secs_from_env("STORE_TIMEOUT_SECS", 8);
        let swapi_timeout_secs = secs_from_env("SWAPI_TIMEOUT_SECS", 8);

        let swapi_base_url = std::env::var("SWAPI_BASE_URL")
            .unwrap_or_else(|_| planets_swapi::api::DEFAULT_BASE_URL.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_timeout_secs,
            swapi_base_url,
            swapi_timeout_secs,
        }
    }
}

fn secs_from_env(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid u64")),
        Err(_) => default,
    }
}
