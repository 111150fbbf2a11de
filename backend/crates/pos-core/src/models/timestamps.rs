//! Creation and last-update bookkeeping shared by persisted records.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Current instant at the millisecond precision accounts are stored with.
pub(crate) fn current_instant() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Timestamps {
    /// Both timestamps set to the current instant.
    pub fn now() -> Self {
        let now = current_instant();
        Self {
            created_on: now,
            updated_on: now,
        }
    }

    /// Refresh `updated_on`. Called on every save; `created_on` never moves.
    pub fn touch(&mut self) {
        let now = current_instant();
        // Clock may step backwards between saves; keep updated_on monotonic.
        self.updated_on = now.max(self.updated_on);
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}
