use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Store-assigned identifier of a persisted document.
///
/// Opaque to callers: the only supported operations are [`DocumentId::parse`]
/// and `Display`, which round-trip through the canonical hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Parse an identifier received from a client.
    ///
    /// Only the exact form produced by `Display` (lowercase, hyphenated) is
    /// accepted. `entity` names the document kind for the error message.
    pub fn parse(entity: &'static str, raw: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(raw)
            .ok()
            .filter(|uuid| uuid.hyphenated().to_string() == raw)
            .map(Self)
            .ok_or_else(|| CoreError::MalformedId {
                entity,
                value: raw.to_string(),
            })
    }

    /// Mint a fresh identifier (used by stores that assign ids in-process).
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for DocumentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for DocumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("document", s)
    }
}
