//! API request handlers.

pub mod chores;
pub mod document;
pub mod frontend;
pub mod health;
pub mod week;

pub use chores::*;
pub use document::*;
pub use frontend::*;
pub use health::*;
pub use week::*;
