//! State mutations for Choreboard.
//!
//! Every change to the household state is a [`Mutation`]: a typed request
//! that is validated up front and then applied to a whole
//! [`RootDocument`](choreboard_models::RootDocument), yielding the next
//! document. Mutations never touch storage; the caller owns the
//! read-modify-write cycle.

pub mod error;
pub mod mutation;
pub mod requests;

pub use error::{Result, ValidationError};
pub use mutation::Mutation;
pub use requests::{AddChoreRequest, DeleteChoreRequest, ResetWeekRequest, UpdateWeeklyChoreRequest};
