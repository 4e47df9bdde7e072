//! Choreboard server binary.
//!
//! ```bash
//! cargo run -p choreboard -- --port 5001 --data-file db.json
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use choreboard_api::{serve, AppState};
use choreboard_persistence::{DocumentStore, FileDocumentStore};

use crate::cli::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment files may set CHOREBOARD_* before clap reads them
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.api_config();
    let store = FileDocumentStore::new(&config.data_file);

    // Fail fast on a corrupted data file, and create the seed file if missing
    if let Err(e) = store.load() {
        tracing::error!(error = %e, path = %store.path().display(), "Cannot load data file");
        return Err(e.into());
    }

    serve(AppState::new(config, store)).await?;
    Ok(())
}
