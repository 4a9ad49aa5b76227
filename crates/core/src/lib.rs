//! Domain layer for the MagicBook story service.
//!
//! Pure logic only: story types, the page generator, variant sizing, the
//! opaque document identifier and the shared error type. Nothing here
//! touches the network or the database.

pub mod error;
pub mod pagination;
pub mod story;
pub mod types;
