//! Service configuration.

use std::path::PathBuf;

/// Default port, used when neither `LISTEN_ADDR` nor `PORT` is set.
const DEFAULT_PORT: u16 = 3000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: `0.0.0.0:$PORT`, `PORT` defaulting to 3000).
    pub listen_addr: String,

    /// Path to the `SQLite` database file (default: "./linkzo.db").
    pub database_path: PathBuf,

    /// Directory holding the static site (default: "public").
    pub public_dir: PathBuf,

    /// Key required in `X-Admin-Key` for admin endpoints. Open when unset.
    pub admin_api_key: Option<String>,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| {
            let port = std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("0.0.0.0:{port}")
        });

        Self {
            listen_addr,
            database_path: std::env::var("DATABASE_PATH")
                .map_or_else(|_| PathBuf::from("./linkzo.db"), PathBuf::from),
            public_dir: std::env::var("PUBLIC_DIR")
                .map_or_else(|_| PathBuf::from("public"), PathBuf::from),
            admin_api_key: std::env::var("ADMIN_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Whether the admin endpoints require a key.
    #[must_use]
    pub fn admin_protected(&self) -> bool {
        self.admin_api_key.is_some()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            database_path: PathBuf::from("./linkzo.db"),
            public_dir: PathBuf::from("public"),
            admin_api_key: None,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}
