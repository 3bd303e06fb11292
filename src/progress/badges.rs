//! Badge definitions and eligibility
//!
//! A badge is a non-revocable achievement flag. Every predicate is a pure
//! function of the current progress record plus the static catalog, and all
//! predicates are monotonic in stars/completions, so a record that earned a
//! badge can never de-qualify for it.

use crate::catalog::{self, Category};

use super::record::ProgressRecord;

/// Unique identifier for each badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    // Star badges
    FirstStar,
    StarCollector,
    SuperLearner,

    // Category-complete badges, one per category
    AnimalExpert,
    NumberWhiz,
    ColorArtist,
    ShapeGenius,
    GlobeTrotter,
    HealthyEater,
    SportsChamp,
    RoadTripper,
}

impl BadgeId {
    /// String id used in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstStar => "first-star",
            Self::StarCollector => "star-collector",
            Self::SuperLearner => "super-learner",
            Self::AnimalExpert => "animal-expert",
            Self::NumberWhiz => "number-whiz",
            Self::ColorArtist => "color-artist",
            Self::ShapeGenius => "shape-genius",
            Self::GlobeTrotter => "globe-trotter",
            Self::HealthyEater => "healthy-eater",
            Self::SportsChamp => "sports-champ",
            Self::RoadTripper => "road-tripper",
        }
    }

    /// The badge awarded for completing every level of a category.
    pub fn for_category(category: Category) -> BadgeId {
        match category {
            Category::Animals => Self::AnimalExpert,
            Category::Numbers => Self::NumberWhiz,
            Category::Colors => Self::ColorArtist,
            Category::Shapes => Self::ShapeGenius,
            Category::Countries => Self::GlobeTrotter,
            Category::Fruits => Self::HealthyEater,
            Category::Sports => Self::SportsChamp,
            Category::Vehicles => Self::RoadTripper,
        }
    }

    /// All badge ids.
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::FirstStar,
            Self::StarCollector,
            Self::SuperLearner,
            Self::AnimalExpert,
            Self::NumberWhiz,
            Self::ColorArtist,
            Self::ShapeGenius,
            Self::GlobeTrotter,
            Self::HealthyEater,
            Self::SportsChamp,
            Self::RoadTripper,
        ]
    }

    /// Whether this badge's earning predicate holds for `record`.
    fn is_earned_by(&self, record: &ProgressRecord) -> bool {
        match self {
            Self::FirstStar => record.stars >= 1,
            Self::StarCollector => record.stars >= 10,
            Self::SuperLearner => record.stars >= 25,
            _ => {
                let category = Badge::get(*self).category.expect("category badge");
                let total = catalog::category_level_count(category);
                let completed = record
                    .category_progress
                    .get(category.as_str())
                    .map(|p| p.completed)
                    .unwrap_or(0);
                total > 0 && completed >= total
            }
        }
    }
}

/// Badge metadata for the collection screen.
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Set for category-complete badges.
    pub category: Option<Category>,
}

/// All badge definitions.
pub static BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::FirstStar,
        name: "First Star",
        description: "Earn your first star",
        icon: "⭐",
        category: None,
    },
    Badge {
        id: BadgeId::StarCollector,
        name: "Star Collector",
        description: "Earn 10 stars",
        icon: "🌟",
        category: None,
    },
    Badge {
        id: BadgeId::SuperLearner,
        name: "Super Learner",
        description: "Earn 25 stars",
        icon: "🏆",
        category: None,
    },
    Badge {
        id: BadgeId::AnimalExpert,
        name: "Animal Expert",
        description: "Complete all animal levels",
        icon: "🦁",
        category: Some(Category::Animals),
    },
    Badge {
        id: BadgeId::NumberWhiz,
        name: "Number Whiz",
        description: "Complete all number levels",
        icon: "🔢",
        category: Some(Category::Numbers),
    },
    Badge {
        id: BadgeId::ColorArtist,
        name: "Color Artist",
        description: "Complete all color levels",
        icon: "🎨",
        category: Some(Category::Colors),
    },
    Badge {
        id: BadgeId::ShapeGenius,
        name: "Shape Genius",
        description: "Complete all shape levels",
        icon: "🔷",
        category: Some(Category::Shapes),
    },
    Badge {
        id: BadgeId::GlobeTrotter,
        name: "Globe Trotter",
        description: "Complete all country levels",
        icon: "🌍",
        category: Some(Category::Countries),
    },
    Badge {
        id: BadgeId::HealthyEater,
        name: "Healthy Eater",
        description: "Complete all fruit & vegetable levels",
        icon: "🍎",
        category: Some(Category::Fruits),
    },
    Badge {
        id: BadgeId::SportsChamp,
        name: "Sports Champ",
        description: "Complete all sports levels",
        icon: "⚽",
        category: Some(Category::Sports),
    },
    Badge {
        id: BadgeId::RoadTripper,
        name: "Road Tripper",
        description: "Complete all vehicle levels",
        icon: "🚗",
        category: Some(Category::Vehicles),
    },
];

impl Badge {
    /// Get badge definition by id.
    pub fn get(id: BadgeId) -> &'static Badge {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("all badges are defined")
    }
}

/// Badges whose predicate holds for `record` but which are not yet in its
/// badge set. The caller merges these in; nothing is ever removed.
pub fn newly_earned(record: &ProgressRecord) -> Vec<BadgeId> {
    BadgeId::all()
        .iter()
        .copied()
        .filter(|id| !record.badges.contains(id.as_str()) && id.is_earned_by(record))
        .collect()
}
