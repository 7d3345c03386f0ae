use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default card color (pale yellow-green), as a packed ARGB value.
pub const DEFAULT_COULEUR: u32 = 0xFFF7F9E7;

/// A single note as persisted and as shown on the list screen.
///
/// Notes are only ever replaced whole: editing produces a new `Note` with
/// the same id and the storage layer swaps the entire row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Card background color as a 32-bit ARGB integer.
    #[serde(default = "default_couleur")]
    pub couleur: u32,
}

fn default_couleur() -> u32 {
    DEFAULT_COULEUR
}

impl Note {
    /// Create a brand-new note with a freshly generated id.
    pub fn new(title: String, description: String, couleur: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            couleur,
        }
    }

    /// Rebuild a note that already has an identity (the edit path).
    pub fn with_id(id: String, title: String, description: String, couleur: u32) -> Self {
        Self {
            id,
            title,
            description,
            couleur,
        }
    }
}
