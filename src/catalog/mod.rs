//! Static level catalog
//!
//! The catalog is compiled-in content: themed categories, the levels inside
//! them, and the mini-game descriptors. It is read-only to the rest of the
//! crate and is the source of truth for category totals and unlock
//! thresholds; persisted progress is always reconciled against it rather
//! than trusted to carry its own totals.

mod games;
mod levels;

pub use games::{game_by_id, MiniGame, MINI_GAMES};
pub use levels::LEVELS;

use serde::{Deserialize, Serialize};

/// Themed grouping of levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Animals,
    Numbers,
    Colors,
    Shapes,
    Countries,
    Fruits,
    Sports,
    Vehicles,
}

impl Category {
    /// String id used in level ids and persisted category keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Numbers => "numbers",
            Self::Colors => "colors",
            Self::Shapes => "shapes",
            Self::Countries => "countries",
            Self::Fruits => "fruits",
            Self::Sports => "sports",
            Self::Vehicles => "vehicles",
        }
    }

    /// Parse a persisted category key. Unknown keys return `None`; old
    /// records may carry categories the catalog no longer ships.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "animals" => Some(Self::Animals),
            "numbers" => Some(Self::Numbers),
            "colors" => Some(Self::Colors),
            "shapes" => Some(Self::Shapes),
            "countries" => Some(Self::Countries),
            "fruits" => Some(Self::Fruits),
            "sports" => Some(Self::Sports),
            "vehicles" => Some(Self::Vehicles),
            _ => None,
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Animals,
            Self::Numbers,
            Self::Colors,
            Self::Shapes,
            Self::Countries,
            Self::Fruits,
            Self::Sports,
            Self::Vehicles,
        ]
    }
}

/// Extra payload attached to a learning item, used by the quiz screens to
/// render counting dots, color swatches or shape outlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemData {
    /// Numeric value and how many objects to draw for counting questions.
    Number { value: u32, count: u32 },
    /// Hex color for the swatch.
    Color { hex: &'static str },
    /// Shape kind to render.
    Shape { kind: &'static str },
}

/// One learnable thing inside a level (a word, a number, a color...).
#[derive(Debug, Clone, PartialEq)]
pub struct LearningItem {
    pub id: &'static str,
    pub name: &'static str,
    /// Text handed to the TTS/audio collaborator.
    pub pronunciation: &'static str,
    pub data: Option<ItemData>,
}

/// Catalog entry: a named, ordered bundle of learning items.
///
/// `required_stars` is the unlock gate; whether a level is actually unlocked
/// is derived from the user's progress record, never stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: &'static str,
    pub category: Category,
    pub level_number: u32,
    pub title: &'static str,
    pub required_stars: u32,
    pub items: Vec<LearningItem>,
}

/// All levels in catalog order.
pub fn all_levels() -> &'static [Level] {
    &LEVELS
}

/// Levels belonging to one category, in level-number order.
pub fn levels_by_category(category: Category) -> Vec<&'static Level> {
    LEVELS.iter().filter(|l| l.category == category).collect()
}

/// Look up a level by id.
pub fn level_by_id(id: &str) -> Option<&'static Level> {
    LEVELS.iter().find(|l| l.id == id)
}

/// True number of levels in a category. Category progress totals are always
/// recomputed from this, never trusted from persisted history.
pub fn category_level_count(category: Category) -> u32 {
    LEVELS.iter().filter(|l| l.category == category).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_ships_levels() {
        for category in Category::all() {
            let levels = levels_by_category(*category);
            assert!(!levels.is_empty(), "{} has no levels", category.as_str());
            assert_eq!(category_level_count(*category), levels.len() as u32);
        }
    }

    #[test]
    fn level_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for level in all_levels() {
            assert!(seen.insert(level.id), "duplicate level id {}", level.id);
        }
    }

    #[test]
    fn first_level_of_each_category_is_ungated() {
        for category in Category::all() {
            let levels = levels_by_category(*category);
            assert_eq!(levels[0].level_number, 1);
            assert_eq!(levels[0].required_stars, 0);
        }
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.as_str()), Some(*category));
        }
        assert_eq!(Category::parse("letters"), None);
    }

    #[test]
    fn lookup_by_id() {
        let level = level_by_id("animals-1").expect("animals-1 exists");
        assert_eq!(level.category, Category::Animals);
        assert_eq!(level.title, "Farm Animals");
        assert!(level_by_id("animals-99").is_none());
    }
}
