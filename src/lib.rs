pub mod config;
pub mod models;
pub mod services;
pub mod store;

use tracing::info;

use crate::models::SeatMap;
use crate::services::booking::{self, Command, CommandError};
use crate::store::{SeatStore, StoreError};

// Shared state for the whole application
pub struct App {
    pub map: SeatMap,
    pub store: SeatStore,
    pub config: config::Config,
}

impl App {
    /// Restores the seat map from the snapshot file, or starts fresh when
    /// the app has never run before. Any other store failure propagates.
    pub fn new(config: config::Config) -> Result<Self, StoreError> {
        let store = SeatStore::new(&config.storage.data_file);
        let map = match store.load() {
            Ok(map) => map,
            Err(StoreError::NotFound(path)) => {
                info!("no saved state at {}, starting fresh", path.display());
                SeatMap::initialize()
            }
            Err(e) => return Err(e),
        };
        Ok(App { map, store, config })
    }

    /// Applies one command line to the seat map, all-or-nothing.
    pub fn apply(&mut self, line: &str) -> Result<Command, CommandError> {
        booking::apply(&mut self.map, line)
    }

    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Config, StorageConfig};

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config {
            app: AppConfig {
                rust_log: "booking_system=debug".to_string(),
            },
            storage: StorageConfig {
                data_file: dir.path().join(".data"),
            },
        }
    }

    #[test]
    fn fresh_start_then_reload_keeps_bookings() {
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::new(config_in(&dir)).unwrap();
        assert_eq!(app.map.booked_seats(), 0);
        app.apply("BOOK A0 1").unwrap();
        app.save().unwrap();

        // second run restores the saved state
        let app = App::new(config_in(&dir)).unwrap();
        assert_eq!(app.map.booked_seats(), 1);
        assert!(app.map.seat('A', 0).unwrap().booked);
    }

    #[test]
    fn rejected_command_leaves_app_state_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(config_in(&dir)).unwrap();
        app.apply("BOOK C2 3").unwrap();
        let before = app.map.clone();
        assert!(app.apply("CANCEL C0 4").is_err());
        assert_eq!(app.map, before);
    }
}
