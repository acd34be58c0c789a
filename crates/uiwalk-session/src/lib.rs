//! uiwalk Session Context
//!
//! Explicit session-scoped state for one interactive review.
//!
//! Every component takes the pieces it needs from a [`SessionContext`]
//! instead of reading ambient globals; pre-flight checks (document present
//! and long enough, modules recognized and selected) are typed errors raised
//! before any backend call is attempted.

#![warn(missing_docs)]

mod context;
mod error;

pub use context::SessionContext;
pub use error::SessionError;
