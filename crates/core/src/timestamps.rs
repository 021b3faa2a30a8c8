//! Timestamp capability: creation and last-update instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit instants embedded by timestamp-tracked entities.
///
/// `created_at` is stamped once at construction and then only changes when a
/// persisted row is rehydrated. `updated_at` stays unset until the first
/// tracked mutation calls [`touch`](Timestamps::touch); most setters do not
/// touch on their own, the owning unit of work decides what counts as an
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Stamp a fresh entity: created now, never updated.
    pub fn now() -> Self {
        Self {
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Rebuild from persisted values.
    pub fn from_parts(created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record an update at the current instant.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fresh_timestamps_have_no_update() {
        let stamps = Timestamps::now();
        assert!(stamps.updated_at().is_none());
        assert!(stamps.created_at() <= Utc::now());
    }

    #[test]
    fn touch_records_an_instant_not_before_creation() {
        let mut stamps = Timestamps::now();
        stamps.touch();
        let Some(updated) = stamps.updated_at() else {
            panic!("touch must set updated_at");
        };
        assert!(updated >= stamps.created_at());
    }

    #[test]
    fn from_parts_preserves_persisted_values() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap();
        let stamps = Timestamps::from_parts(created, Some(updated));
        assert_eq!(stamps.created_at(), created);
        assert_eq!(stamps.updated_at(), Some(updated));
    }
}
