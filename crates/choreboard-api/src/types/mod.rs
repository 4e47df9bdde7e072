//! Response types for the API.
//!
//! Request bodies are the typed payloads from `choreboard_core`; state
//! endpoints respond with the `RootDocument` itself.

pub mod responses;

pub use responses::*;
