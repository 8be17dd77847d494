//! Data models for the newsfeed backend.
//!
//! These models match the frontend TypeScript interfaces and the shapes kept in local storage.

mod comment;
mod news;
mod session;
mod vote;

pub use comment::*;
pub use news::*;
pub use session::*;
pub use vote::*;
