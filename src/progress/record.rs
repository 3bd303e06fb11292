//! Persisted progress record
//!
//! The JSON shape of [`ProgressRecord`] is the durable contract with
//! previously shipped app versions. Every field carries a serde default so
//! records written before a field existed (early releases had no
//! `levelStars` or `badges`) still deserialize; missing data is repaired on
//! load instead of migrated.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, Level, MiniGame};

/// Per-category completion counters as shown on the category cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Distinct levels completed in this category.
    #[serde(default)]
    pub completed: u32,
    /// Catalog level count. Derived data; re-synced from the catalog on
    /// every load and never trusted from persisted history.
    #[serde(default)]
    pub total: u32,
    /// Stars earned in this category (first completions only).
    #[serde(default)]
    pub stars: u32,
}

/// The single persisted progress aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Level ids ever completed. Set semantics: replays do not grow it.
    #[serde(default)]
    pub completed_levels: BTreeSet<String>,
    /// Total stars, counted once per level on first completion.
    #[serde(default)]
    pub stars: u32,
    /// Earned badge ids. Never revoked.
    #[serde(default)]
    pub badges: BTreeSet<String>,
    /// Best star rating per level, kept current across replays.
    #[serde(default)]
    pub level_stars: BTreeMap<String, u8>,
    /// Per-category counters, keyed by category string. Unknown keys from
    /// older catalogs are preserved untouched.
    #[serde(default)]
    pub category_progress: BTreeMap<String, CategoryProgress>,
    /// Resume cursor: level the user paused in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,
    /// Resume cursor: question/item index within that level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level_index: Option<usize>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressRecord {
    /// Fresh all-zero record with a progress slot for every known category.
    pub fn new() -> Self {
        let mut category_progress = BTreeMap::new();
        for category in Category::all() {
            category_progress.insert(
                category.as_str().to_string(),
                CategoryProgress {
                    completed: 0,
                    total: catalog::category_level_count(*category),
                    stars: 0,
                },
            );
        }
        Self {
            completed_levels: BTreeSet::new(),
            stars: 0,
            badges: BTreeSet::new(),
            level_stars: BTreeMap::new(),
            category_progress,
            current_level: None,
            current_level_index: None,
        }
    }

    /// Reconcile the record against the live catalog.
    ///
    /// Ensures every known category has an entry, re-derives each `total`
    /// from the catalog, and clamps `completed` so it never exceeds the true
    /// level count even if a stale record says otherwise.
    pub fn repair(&mut self) {
        for category in Category::all() {
            let total = catalog::category_level_count(*category);
            let entry = self
                .category_progress
                .entry(category.as_str().to_string())
                .or_default();
            entry.total = total;
            entry.completed = entry.completed.min(total);
        }
    }

    /// Whether a level has ever been completed.
    pub fn is_level_completed(&self, level_id: &str) -> bool {
        self.completed_levels.contains(level_id)
    }

    /// Best star rating earned for a level, 0 if never played to the end.
    pub fn level_stars(&self, level_id: &str) -> u8 {
        self.level_stars.get(level_id).copied().unwrap_or(0)
    }

    /// A level is playable once the total star count reaches its gate.
    pub fn is_level_unlocked(&self, level: &Level) -> bool {
        level.required_stars == 0 || self.stars >= level.required_stars
    }

    /// Mini-games unlock on earned badge count.
    pub fn is_mini_game_unlocked(&self, game: &MiniGame) -> bool {
        self.badges.len() >= game.required_badges
    }

    /// Category completion in percent (0.0 to 100.0).
    pub fn category_completion_percent(&self, category: Category) -> f32 {
        let total = catalog::category_level_count(category);
        if total == 0 {
            return 0.0;
        }
        let completed = self
            .category_progress
            .get(category.as_str())
            .map(|p| p.completed.min(total))
            .unwrap_or(0);
        completed as f32 / total as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_knows_catalog_totals() {
        let record = ProgressRecord::new();
        assert_eq!(record.stars, 0);
        assert!(record.completed_levels.is_empty());
        assert!(record.badges.is_empty());
        for category in Category::all() {
            let entry = &record.category_progress[category.as_str()];
            assert_eq!(entry.completed, 0);
            assert_eq!(entry.total, catalog::category_level_count(*category));
            assert_eq!(entry.stars, 0);
        }
    }

    #[test]
    fn legacy_record_without_new_fields_still_loads() {
        // Shape written by the first release: no levelStars, no badges,
        // no cursor.
        let legacy = r#"{
            "completedLevels": ["animals-1"],
            "stars": 2,
            "categoryProgress": {
                "animals": {"completed": 1, "total": 4, "stars": 2}
            }
        }"#;
        let mut record: ProgressRecord = serde_json::from_str(legacy).expect("legacy loads");
        record.repair();

        assert_eq!(record.stars, 2);
        assert!(record.is_level_completed("animals-1"));
        assert!(record.badges.is_empty());
        assert_eq!(record.level_stars("animals-1"), 0);
        // Repair fills in the categories the old record never saw
        assert_eq!(
            record.category_progress["vehicles"].total,
            catalog::category_level_count(Category::Vehicles)
        );
    }

    #[test]
    fn repair_clamps_stale_completed_counts() {
        let mut record = ProgressRecord::new();
        let entry = record.category_progress.get_mut("animals").unwrap();
        entry.completed = 99;
        entry.total = 99;

        record.repair();

        let total = catalog::category_level_count(Category::Animals);
        let entry = &record.category_progress["animals"];
        assert_eq!(entry.total, total);
        assert_eq!(entry.completed, total);
    }

    #[test]
    fn repair_keeps_unknown_category_keys() {
        let mut record = ProgressRecord::new();
        record.category_progress.insert(
            "letters".to_string(),
            CategoryProgress {
                completed: 1,
                total: 4,
                stars: 2,
            },
        );
        record.repair();
        assert_eq!(record.category_progress["letters"].completed, 1);
    }

    #[test]
    fn json_field_names_match_the_durable_contract() {
        let mut record = ProgressRecord::new();
        record.completed_levels.insert("numbers-1".to_string());
        record.level_stars.insert("numbers-1".to_string(), 3);
        record.current_level = Some("numbers-2".to_string());
        record.current_level_index = Some(2);

        let json: serde_json::Value =
            serde_json::to_value(&record).expect("record serializes");
        assert!(json["completedLevels"].is_array());
        assert!(json["levelStars"]["numbers-1"].is_u64());
        assert!(json["categoryProgress"]["animals"]["total"].is_u64());
        assert_eq!(json["currentLevel"], "numbers-2");
        assert_eq!(json["currentLevelIndex"], 2);
    }

    #[test]
    fn completion_percent_tracks_completed_over_catalog_count() {
        let mut record = ProgressRecord::new();
        assert_eq!(record.category_completion_percent(Category::Animals), 0.0);

        record
            .category_progress
            .get_mut("animals")
            .unwrap()
            .completed = 1;
        assert_eq!(record.category_completion_percent(Category::Animals), 25.0);
    }
}
