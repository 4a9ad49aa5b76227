//! Request handlers.
//!
//! Handlers validate input at the boundary, call into `magicbook_core` for
//! domain logic and `magicbook_db` for persistence, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod story;
