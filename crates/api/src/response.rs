//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "items": [...] }` envelope returned by list endpoints.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}
