//! Progress store
//!
//! Single authority over the persisted progress record. Every mutation is a
//! load→mutate→persist sequence guarded by one mutex, so two completion
//! events fired in quick succession (a rapid double-tap on the reward
//! screen) can never commit against a stale read.
//!
//! Persistence failures never reach the child: reads that fail fall back to
//! a fresh record, writes that fail are logged and the session continues on
//! the in-memory state. Losing one session's stars beats interrupting play.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::catalog::{self, Category, Level, MiniGame};
use crate::storage::Storage;

use super::badges;
use super::record::ProgressRecord;

/// Storage key the progress record lives under.
pub const PROGRESS_KEY: &str = "@learnforkids:progress";

/// The only component permitted to mutate persisted progress.
pub struct ProgressStore {
    storage: Box<dyn Storage>,
    // Serializes all load→mutate→persist sequences
    write_lock: Mutex<()>,
}

impl ProgressStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the persisted record, or a fresh default if none exists.
    ///
    /// Corrupt or unreadable data degrades to the default record; the
    /// record is always repaired against the live catalog before it is
    /// returned.
    pub fn load(&self) -> ProgressRecord {
        self.read_record()
    }

    /// Record a finished level and reconcile all derived state.
    ///
    /// `stars_earned` is clamped to 1..=3. Replaying a completed level
    /// updates the best-stars map but never re-adds stars to the totals.
    /// An unknown `category` skips only the per-category counters; the
    /// level and star updates still apply. Returns the updated record.
    pub fn complete_level(
        &self,
        level_id: &str,
        category: &str,
        stars_earned: u8,
    ) -> ProgressRecord {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let stars_earned = stars_earned.clamp(1, 3);
        let mut record = self.read_record();

        let was_completed = record.completed_levels.contains(level_id);
        let stars_to_add = if was_completed { 0 } else { stars_earned as u32 };

        let best = record.level_stars.entry(level_id.to_string()).or_insert(0);
        *best = (*best).max(stars_earned);

        record.stars += stars_to_add;
        if !was_completed {
            record.completed_levels.insert(level_id.to_string());
        }

        match Category::parse(category) {
            Some(cat) => {
                let total = catalog::category_level_count(cat);
                let entry = record
                    .category_progress
                    .entry(cat.as_str().to_string())
                    .or_default();
                entry.total = total;
                if !was_completed {
                    entry.completed = (entry.completed + 1).min(total);
                }
                entry.stars += stars_to_add;
            }
            None => {
                debug!(category, level_id, "unknown category, skipping category counters");
            }
        }

        // A finished level no longer needs its resume cursor
        if record.current_level.as_deref() == Some(level_id) {
            record.current_level = None;
            record.current_level_index = None;
        }

        for badge in badges::newly_earned(&record) {
            debug!(badge = badge.as_str(), "badge earned");
            record.badges.insert(badge.as_str().to_string());
        }

        self.write_record(&record);
        record
    }

    /// Remember where the user paused a level. Best-effort; a stale cursor
    /// is harmless.
    pub fn save_cursor(&self, level_id: &str, item_index: usize) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut record = self.read_record();
        record.current_level = Some(level_id.to_string());
        record.current_level_index = Some(item_index);
        self.write_record(&record);
    }

    /// Drop the resume cursor.
    pub fn clear_cursor(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut record = self.read_record();
        if record.current_level.is_none() && record.current_level_index.is_none() {
            return;
        }
        record.current_level = None;
        record.current_level_index = None;
        self.write_record(&record);
    }

    /// Irrecoverably discard the persisted record. The next [`load`] returns
    /// fresh defaults. Confirmation is the caller's problem.
    ///
    /// [`load`]: ProgressStore::load
    pub fn reset(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(err) = self.storage.remove(PROGRESS_KEY) {
            warn!(error = %err, "failed to reset progress");
        }
    }

    /// Whether `level` is playable for the current record.
    pub fn is_level_unlocked(&self, level: &Level) -> bool {
        self.load().is_level_unlocked(level)
    }

    /// Whether `game` is playable for the current record.
    pub fn is_mini_game_unlocked(&self, game: &MiniGame) -> bool {
        self.load().is_mini_game_unlocked(game)
    }

    /// Category completion in percent for the current record.
    pub fn category_completion_percent(&self, category: Category) -> f32 {
        self.load().category_completion_percent(category)
    }

    fn read_record(&self) -> ProgressRecord {
        let raw = match self.storage.get(PROGRESS_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to read progress, starting from defaults");
                None
            }
        };

        let mut record = match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(error = %err, "corrupt progress record, starting from defaults");
                ProgressRecord::new()
            }),
            None => ProgressRecord::new(),
        };
        record.repair();
        record
    }

    fn write_record(&self, record: &ProgressRecord) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize progress record");
                return;
            }
        };
        if let Err(err) = self.storage.set(PROGRESS_KEY, &json) {
            // This session's progress stays in memory only
            warn!(error = %err, "failed to persist progress record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::BadgeId;
    use crate::storage::{MemoryStorage, StorageError};

    fn store() -> ProgressStore {
        ProgressStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn first_completion_counts_everything_once() {
        let store = store();
        let record = store.complete_level("numbers-1", "numbers", 3);

        assert_eq!(record.stars, 3);
        assert!(record.is_level_completed("numbers-1"));
        assert_eq!(record.level_stars("numbers-1"), 3);
        let numbers = &record.category_progress["numbers"];
        assert_eq!(numbers.completed, 1);
        assert_eq!(numbers.stars, 3);
        assert!(record.badges.contains(BadgeId::FirstStar.as_str()));
    }

    #[test]
    fn stars_out_of_range_are_clamped() {
        let store = store();
        let record = store.complete_level("numbers-1", "numbers", 9);
        assert_eq!(record.stars, 3);
        assert_eq!(record.level_stars("numbers-1"), 3);
    }

    #[test]
    fn unknown_category_still_records_the_level() {
        let store = store();
        let record = store.complete_level("letters-1", "letters", 2);

        assert_eq!(record.stars, 2);
        assert!(record.is_level_completed("letters-1"));
        assert_eq!(record.level_stars("letters-1"), 2);
        assert!(!record.category_progress.contains_key("letters"));
    }

    #[test]
    fn completing_a_level_clears_its_cursor() {
        let store = store();
        store.save_cursor("animals-1", 4);
        assert_eq!(store.load().current_level.as_deref(), Some("animals-1"));

        let record = store.complete_level("animals-1", "animals", 2);
        assert!(record.current_level.is_none());
        assert!(record.current_level_index.is_none());
    }

    #[test]
    fn cursor_for_another_level_survives_completion() {
        let store = store();
        store.save_cursor("animals-2", 1);
        let record = store.complete_level("animals-1", "animals", 2);
        assert_eq!(record.current_level.as_deref(), Some("animals-2"));
        assert_eq!(record.current_level_index, Some(1));
    }

    #[test]
    fn clear_cursor_persists() {
        let store = store();
        store.save_cursor("animals-1", 2);
        store.clear_cursor();
        let record = store.load();
        assert!(record.current_level.is_none());
        assert!(record.current_level_index.is_none());
    }

    /// Backend that accepts reads but rejects every write.
    struct ReadOnlyStorage(MemoryStorage);

    impl Storage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn write_failures_keep_the_in_memory_result() {
        let store = ProgressStore::new(Box::new(ReadOnlyStorage(MemoryStorage::new())));

        // The returned record reflects the completion even though the write
        // was lost
        let record = store.complete_level("numbers-1", "numbers", 3);
        assert_eq!(record.stars, 3);

        // ...and the next load starts over, as if the session never happened
        assert_eq!(store.load().stars, 0);

        // Reset on a failing backend must not panic either
        store.reset();
    }

    #[test]
    fn corrupt_persisted_json_degrades_to_defaults() {
        let storage = MemoryStorage::new();
        storage.set(PROGRESS_KEY, "{not json").unwrap();
        let store = ProgressStore::new(Box::new(storage));

        let record = store.load();
        assert_eq!(record, ProgressRecord::new());
    }
}
