use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, immutable record identifier generated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UuidIdentity {
    uuid: Uuid,
}

impl UuidIdentity {
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::new_v4(),
        }
    }

    /// Rehydrate an identity read back from storage.
    pub fn from_stored(uuid: Uuid) -> Self {
        Self { uuid }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Default for UuidIdentity {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for UuidIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uuid)
    }
}
