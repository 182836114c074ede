use std::path::PathBuf;

/// Runtime settings read from the environment.
///
/// Every field has a local-development default, so the server starts
/// with nothing set; deployments override through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3333`).
    pub port: u16,
    /// Browser origins allowed by CORS, comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (`REQUEST_TIMEOUT_SECS`).
    pub request_timeout_secs: u64,
    /// Directory holding catalog artwork and uploaded point photos.
    pub upload_dir: PathBuf,
    /// Base URL clients can reach this server on; used to derive the
    /// `image_url` fields at read time.
    pub public_base_url: String,
}

impl ServerConfig {
    /// Read the full configuration, falling back to the defaults below.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3333`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `UPLOAD_DIR`           | `uploads`                |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3333`  |
    ///
    /// Panics when a numeric variable does not parse.
    pub fn from_env() -> Self {
        let port: u16 = env_or("PORT", "3333")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            public_base_url: env_or("PUBLIC_BASE_URL", "http://localhost:3333"),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}
