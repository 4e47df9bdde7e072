//! API configuration.

use std::path::PathBuf;
use std::time::Instant;

use choreboard_persistence::DEFAULT_DATA_FILE;

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 5001;

/// Default name of the front-end entry page.
pub const DEFAULT_ENTRY_PAGE: &str = "index.html";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Allowed CORS origins. `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// JSON file holding the household state.
    pub data_file: PathBuf,
    /// Directory holding the entry page and the `static/` folder.
    pub static_root: PathBuf,
    /// File name of the entry page inside `static_root`.
    pub entry_page: String,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ApiConfig {
    /// Creates a new API configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Sets the data file.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Sets the directory the front-end is served from.
    pub fn with_static_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_root = path.into();
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the path of the entry page.
    pub fn entry_page_path(&self) -> PathBuf {
        self.static_root.join(&self.entry_page)
    }

    /// Returns the directory served under `/static`.
    pub fn assets_dir(&self) -> PathBuf {
        self.static_root.join("static")
    }

    /// Returns true if any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            static_root: PathBuf::from("."),
            entry_page: DEFAULT_ENTRY_PAGE.to_string(),
            start_time: Instant::now(),
        }
    }
}
