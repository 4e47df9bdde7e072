//! Document model for Choreboard.
//!
//! The whole application state is a single [`RootDocument`]: the household's
//! users, the master chore catalog, and the current week's assignments and
//! completion log. The document is always read and written as one unit.

pub mod chore;
pub mod document;
pub mod field;
pub mod user;
pub mod week;

// Re-export main types
pub use chore::{AssignedChore, ChoreId, ChoreType, MasterChore};
pub use document::RootDocument;
pub use user::{User, UserId};
pub use week::{CompletedLogEntry, CurrentWeek, DEFAULT_PRIZE};
