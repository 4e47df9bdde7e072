//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use choreboard_api::config::{DEFAULT_ENTRY_PAGE, DEFAULT_PORT};
use choreboard_api::ApiConfig;
use choreboard_persistence::DEFAULT_DATA_FILE;

/// Choreboard - household chore tracking server
#[derive(Parser, Debug)]
#[command(name = "choreboard", version)]
#[command(about = "Serves the chore board front-end and its JSON API")]
pub struct Args {
    /// Address to bind to
    #[arg(long, env = "CHOREBOARD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CHOREBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file holding the household state
    #[arg(short, long, env = "CHOREBOARD_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Directory containing the entry page and the static/ folder
    #[arg(short, long, env = "CHOREBOARD_STATIC_DIR", default_value = ".")]
    pub static_dir: PathBuf,

    /// File name of the entry page inside the static directory
    #[arg(long, default_value = DEFAULT_ENTRY_PAGE)]
    pub entry_page: String,

    /// Allowed CORS origins, comma separated ("*" for any)
    #[arg(
        long,
        env = "CHOREBOARD_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub cors_origins: Vec<String>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "choreboard=info,choreboard_api=info,choreboard_persistence=info",
            1 => "choreboard=debug,choreboard_api=debug,choreboard_core=debug,choreboard_persistence=debug",
            2 => "choreboard=trace,choreboard_api=trace,choreboard_core=trace,tower_http=debug",
            _ => "trace",
        }
    }

    /// Builds the server configuration.
    pub fn api_config(&self) -> ApiConfig {
        let mut config = ApiConfig::new(self.host.clone(), self.port)
            .with_data_file(&self.data_file)
            .with_static_root(&self.static_dir)
            .with_cors_origins(self.cors_origins.clone());
        config.entry_page = self.entry_page.clone();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["choreboard"]).unwrap();
        let config = args.api_config();
        assert_eq!(config.bind_address(), "0.0.0.0:5001");
        assert_eq!(config.data_file, PathBuf::from("db.json"));
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "choreboard",
            "--port",
            "8080",
            "--data-file",
            "/var/lib/choreboard/db.json",
            "--cors-origins",
            "http://a.local,http://b.local",
            "-vv",
        ])
        .unwrap();
        let config = args.api_config();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from("/var/lib/choreboard/db.json"));
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(args.verbose, 2);
    }
}
