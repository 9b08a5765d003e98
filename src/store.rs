use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::SeatMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no saved state at {0}")]
    NotFound(PathBuf),

    #[error("saved state at {path} is unusable: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What actually lands on disk: the map plus when it was written.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    saved_at: DateTime<Utc>,
    map: SeatMap,
}

/// File-backed persistence for the seat map. One snapshot file at a fixed
/// path; the whole map is written on every save.
#[derive(Debug, Clone)]
pub struct SeatStore {
    path: PathBuf,
}

impl SeatStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SeatStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restores the last saved seat map. `NotFound` when the app has never
    /// run before; callers fall back to a fresh map. A snapshot that parses
    /// but violates the venue layout is reported as `Corrupt`, never loaded.
    pub fn load(&self) -> Result<SeatMap, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        snapshot.map.check_layout().map_err(|reason| StoreError::Corrupt {
            path: self.path.clone(),
            reason,
        })?;
        info!(
            "restored seat map from {} (saved at {}, {} seats booked)",
            self.path.display(),
            snapshot.saved_at,
            snapshot.map.booked_seats()
        );
        Ok(snapshot.map)
    }

    /// Writes the map to a temporary sibling and renames it into place, so
    /// a crash mid-save leaves the previous snapshot intact.
    pub fn save(&self, map: &SeatMap) -> Result<(), StoreError> {
        let snapshot = Snapshot {
            saved_at: Utc::now(),
            map: map.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        info!(
            "saved seat map to {} ({} seats booked)",
            self.path.display(),
            map.booked_seats()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::booking;

    fn store_in(dir: &tempfile::TempDir) -> SeatStore {
        SeatStore::new(dir.path().join("seats.json"))
    }

    #[test]
    fn load_without_prior_state_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn save_then_load_round_trips_every_seat() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut map = SeatMap::initialize();
        booking::apply(&mut map, "BOOK A0 3").unwrap();
        booking::apply(&mut map, "BOOK T5 2").unwrap();
        booking::apply(&mut map, "BOOK K7 1").unwrap();

        store.save(&map).unwrap();
        let restored = store.load().unwrap();
        assert_eq!(restored, map);
        assert_eq!(restored.booked_seats(), 6);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut map = SeatMap::initialize();
        booking::apply(&mut map, "BOOK B2 2").unwrap();
        store.save(&map).unwrap();

        booking::apply(&mut map, "CANCEL B2 2").unwrap();
        store.save(&map).unwrap();

        assert_eq!(store.load().unwrap().booked_seats(), 0);
    }

    #[test]
    fn unparseable_snapshot_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn snapshot_with_wrong_layout_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // a parseable snapshot with too few rows must not load
        let json = serde_json::json!({
            "saved_at": "2024-01-01T00:00:00Z",
            "map": { "rows": [{ "letter": "A", "seats": [] }] }
        });
        fs::write(store.path(), json.to_string()).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }
}
