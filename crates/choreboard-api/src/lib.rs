//! HTTP API for Choreboard.
//!
//! Exposes the household state as JSON and serves the front-end:
//! - `GET /api/state` returns the whole document
//! - one `POST /api/<operation>` per mutation, each returning the updated document
//! - `GET /choreboard` and `GET /static/*` serve the front-end files
//!
//! # Example
//!
//! ```ignore
//! use choreboard_api::{serve, ApiConfig, AppState};
//! use choreboard_persistence::FileDocumentStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let store = FileDocumentStore::new(&config.data_file);
//!
//!     serve(AppState::new(config, store)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
