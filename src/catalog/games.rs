//! Mini-game descriptors
//!
//! Mini-games are gated on earned badge count rather than stars, so they
//! open up as a longer-term reward. Game logic lives in the UI layer; this
//! module only carries the unlock metadata.

/// A mini-game entry on the games screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniGame {
    pub id: &'static str,
    pub name: &'static str,
    /// Number of earned badges required before the game is playable.
    pub required_badges: usize,
}

/// All mini-games in display order.
pub static MINI_GAMES: &[MiniGame] = &[
    MiniGame {
        id: "memory-match",
        name: "Memory Match",
        required_badges: 2,
    },
    MiniGame {
        id: "color-tap",
        name: "Color Tap",
        required_badges: 4,
    },
    MiniGame {
        id: "number-sequence",
        name: "Number Sequence",
        required_badges: 6,
    },
];

/// Look up a mini-game by id.
pub fn game_by_id(id: &str) -> Option<&'static MiniGame> {
    MINI_GAMES.iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn games_are_ordered_by_unlock_cost() {
        let mut previous = 0;
        for game in MINI_GAMES {
            assert!(game.required_badges >= previous);
            previous = game.required_badges;
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(game_by_id("color-tap").unwrap().required_badges, 4);
        assert!(game_by_id("rocket-race").is_none());
    }
}
