//! Shared query parameter types for API handlers.

use magicbook_core::story::Variant;
use serde::Deserialize;

/// `?limit=` for list endpoints. Clamped via `magicbook_core::pagination`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?variant=preview|full` for story creation; defaults to `preview`.
#[derive(Debug, Deserialize)]
pub struct VariantParams {
    #[serde(default)]
    pub variant: Variant,
}
