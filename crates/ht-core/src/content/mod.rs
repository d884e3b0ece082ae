//! Static per-genre content tables.
//!
//! Each genre ships a fixed set of locations, flavor text for exploring and
//! resting, and two enemy tables. The tables are `'static` and shared
//! read-only by every session of that genre.

mod fantasy;
mod mystery;
mod sci_fi;

use crate::genre::Genre;

/// Enemy names exempt from the "already defeated" exclusion.
///
/// Membership here decides boss status, regardless of which table an enemy
/// was drawn from.
pub const BOSS_NAMES: &[&str] = &[
    "The Nightbinder",
    "Cosmic Entity",
    "Society Mastermind",
    "Dragon",
    "Celestial Being",
    "Demon Lord",
    "Ancient Dragon",
    "God of War",
    "Void Entity",
    "AI Overlord",
    "Time Master",
    "Reality Weaver",
];

/// Whether an enemy name belongs to the global boss set.
pub fn is_boss(name: &str) -> bool {
    BOSS_NAMES.contains(&name)
}

/// A named place with its arrival description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Display name.
    pub name: &'static str,
    /// Text shown on arrival.
    pub description: &'static str,
}

/// A static enemy stat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    /// Display name.
    pub name: &'static str,
    /// Enemy level (1-15).
    pub level: u32,
    /// Starting hit points.
    pub hp: u32,
    /// Experience granted on defeat.
    pub xp: u32,
    /// Items the enemy may drop.
    pub drops: &'static [&'static str],
}

/// The full content pack for one genre.
#[derive(Debug)]
pub struct GenreContent {
    /// The genre this pack belongs to.
    pub genre: Genre,
    /// Locations in table order. Locations past index 2 are dangerous.
    pub locations: &'static [Location],
    /// Flavor lines for exploring.
    pub exploration_events: &'static [&'static str],
    /// Flavor lines for resting.
    pub rest_events: &'static [&'static str],
    /// Ordinary enemies.
    pub regular_enemies: &'static [EnemyTemplate],
    /// Boss-table enemies.
    pub boss_enemies: &'static [EnemyTemplate],
}

const fn enemy(
    name: &'static str,
    level: u32,
    hp: u32,
    xp: u32,
    drops: &'static [&'static str],
) -> EnemyTemplate {
    EnemyTemplate {
        name,
        level,
        hp,
        xp,
        drops,
    }
}

const fn place(name: &'static str, description: &'static str) -> Location {
    Location { name, description }
}

/// Index past which a location counts as dangerous.
const SAFE_LOCATION_COUNT: usize = 3;

impl GenreContent {
    /// Look up the content pack for a genre.
    pub fn for_genre(genre: Genre) -> &'static GenreContent {
        match genre {
            Genre::Fantasy => &fantasy::CONTENT,
            Genre::SciFi => &sci_fi::CONTENT,
            Genre::Mystery => &mystery::CONTENT,
        }
    }

    /// Where a new adventure begins (the first listed location).
    pub fn starting_location(&self) -> &'static Location {
        &self.locations[0]
    }

    /// Find a location by exact name.
    pub fn location(&self, name: &str) -> Option<&'static Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Arrival description for a location, if it belongs to this pack.
    pub fn describe(&self, name: &str) -> Option<&'static str> {
        self.location(name).map(|l| l.description)
    }

    /// Whether a location is in the dangerous tail of the table.
    pub fn is_dangerous(&self, name: &str) -> bool {
        self.locations
            .iter()
            .position(|l| l.name == name)
            .is_some_and(|i| i >= SAFE_LOCATION_COUNT)
    }

    /// Regular and boss tables combined, regular first.
    pub fn all_enemies(&self) -> Vec<&'static EnemyTemplate> {
        self.regular_enemies
            .iter()
            .chain(self.boss_enemies.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_genre_has_complete_tables() {
        for genre in Genre::ALL {
            let content = GenreContent::for_genre(genre);
            assert_eq!(content.genre, genre);
            assert_eq!(content.locations.len(), 6);
            assert_eq!(content.exploration_events.len(), 4);
            assert_eq!(content.rest_events.len(), 3);
            assert_eq!(content.regular_enemies.len(), 13);
            assert_eq!(content.boss_enemies.len(), 6);
            for enemy in content.all_enemies() {
                assert!(enemy.level >= 1);
                assert!(enemy.hp > 0);
                assert!(!enemy.drops.is_empty(), "{} has no drops", enemy.name);
            }
        }
    }

    #[test]
    fn starting_locations() {
        assert_eq!(
            GenreContent::for_genre(Genre::Fantasy).starting_location().name,
            "Ancient Forest"
        );
        assert_eq!(
            GenreContent::for_genre(Genre::SciFi).starting_location().name,
            "Derelict Space Station"
        );
        assert_eq!(
            GenreContent::for_genre(Genre::Mystery).starting_location().name,
            "Hawthorne Manor"
        );
    }

    #[test]
    fn dangerous_locations_are_past_index_two() {
        let content = GenreContent::for_genre(Genre::Fantasy);
        assert!(!content.is_dangerous("Ancient Forest"));
        assert!(!content.is_dangerous("Enchanted Castle"));
        assert!(content.is_dangerous("Mystic Ruins"));
        assert!(content.is_dangerous("Shadow Swamp"));
        assert!(!content.is_dangerous("Nowhere"));
    }

    #[test]
    fn describe_known_and_unknown() {
        let content = GenreContent::for_genre(Genre::Mystery);
        assert!(content.describe("Clocktower").unwrap().contains("Gears"));
        assert!(content.describe("Dragon Cave").is_none());
    }

    #[test]
    fn boss_membership_is_global() {
        assert!(is_boss("Dragon"));
        assert!(is_boss("AI Overlord"));
        assert!(!is_boss("Goblin"));
        // Listed in the sci-fi boss table but not in the global set.
        assert!(!is_boss("Alien Warrior"));
    }

    #[test]
    fn all_enemies_lists_regulars_first() {
        let content = GenreContent::for_genre(Genre::Fantasy);
        let all = content.all_enemies();
        assert_eq!(all.len(), 19);
        assert_eq!(all[0].name, "Goblin");
        assert_eq!(all[13].name, "Dragon");
    }
}
