//! Adventure character and session state.
//!
//! A single record owned by the session. Resolvers receive it by `&mut`
//! and every mutation goes through the helpers here, which keep
//! `0 <= hp <= max_hp` and saturate gold and experience at zero.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ht_core::{EnemyTemplate, Genre, GenreContent};

/// Items every adventurer starts with.
pub const STARTING_INVENTORY: &[&str] = &["Torch", "Water Flask"];

/// Hit points at level 1.
pub const STARTING_HP: u32 = 100;

/// Experience needed to reach level 2.
pub const STARTING_XP_THRESHOLD: u32 = 100;

/// An active opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Enemy level.
    pub level: u32,
    /// Remaining hit points. Negative once the killing blow lands.
    pub hp: i64,
    /// Hit points at spawn.
    pub max_hp: u32,
    /// Experience granted on defeat.
    pub xp: u32,
    /// Possible drops.
    pub drops: Vec<String>,
}

impl Enemy {
    /// Spawn with the template's own stats.
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            level: template.level,
            hp: i64::from(template.hp),
            max_hp: template.hp,
            xp: template.xp,
            drops: template.drops.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Spawn with hit points and experience derived from level
    /// (`30 * level` / `20 * level`) and a single fixed drop.
    pub fn scaled(template: &EnemyTemplate, drop: &str) -> Self {
        let hp = 30 * template.level;
        Self {
            name: template.name.to_string(),
            level: template.level,
            hp: i64::from(hp),
            max_hp: hp,
            xp: 20 * template.level,
            drops: vec![drop.to_string()],
        }
    }

    /// Whether the enemy has been brought to zero or below.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// The full adventure state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureState {
    /// Unique id of this session.
    pub session_id: Uuid,
    /// Player display name.
    pub player_name: String,
    /// Content genre.
    pub genre: Genre,
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Character level, starting at 1.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Experience required for the next level. Always positive.
    pub xp_to_next_level: u32,
    /// Gold coins.
    pub gold: u32,
    /// Carried items in pickup order; duplicates are stacks.
    pub inventory: Vec<String>,
    /// Current location name.
    pub location: String,
    /// Locations travelled to, in first-visit order.
    pub visited_locations: Vec<String>,
    /// The opponent currently engaged, if any.
    pub enemy: Option<Enemy>,
    /// Non-boss enemies defeated this session, in defeat order.
    pub defeated_enemies: Vec<String>,
    /// Set when hit points reach zero. Terminal.
    pub game_over: bool,
    /// Cosmetic readiness flag.
    pub ready_for_battle: bool,
    /// Activities completed toward readiness.
    pub activity_progress: u32,
    /// Activities required for readiness; 0 disables the gate.
    pub required_activities_for_readiness: u32,
}

impl AdventureState {
    /// A fresh level-1 character at the genre's starting location.
    pub fn new(player_name: impl Into<String>, genre: Genre) -> Self {
        let content = GenreContent::for_genre(genre);
        Self {
            session_id: Uuid::new_v4(),
            player_name: player_name.into(),
            genre,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            level: 1,
            xp: 0,
            xp_to_next_level: STARTING_XP_THRESHOLD,
            gold: 0,
            inventory: STARTING_INVENTORY.iter().map(|i| i.to_string()).collect(),
            location: content.starting_location().name.to_string(),
            visited_locations: Vec::new(),
            enemy: None,
            defeated_enemies: Vec::new(),
            game_over: false,
            ready_for_battle: false,
            activity_progress: 0,
            required_activities_for_readiness: 0,
        }
    }

    /// The content pack for this state's genre.
    pub fn content(&self) -> &'static GenreContent {
        GenreContent::for_genre(self.genre)
    }

    /// Heal up to `amount`, capped at `max_hp`. Returns the HP actually
    /// restored.
    pub fn heal(&mut self, amount: i64) -> u32 {
        let before = self.hp;
        let target = (i64::from(self.hp) + amount.max(0)).min(i64::from(self.max_hp));
        self.hp = u32::try_from(target).unwrap_or(self.max_hp);
        self.hp - before
    }

    /// Take damage, flooring at zero. Returns the remaining HP.
    pub fn take_damage(&mut self, amount: i64) -> u32 {
        let remaining = (i64::from(self.hp) - amount.max(0)).max(0);
        self.hp = u32::try_from(remaining).unwrap_or(0);
        self.hp
    }

    /// Add experience. Negative grants are ignored.
    pub fn grant_xp(&mut self, amount: i64) {
        let amount = u32::try_from(amount.max(0)).unwrap_or(u32::MAX);
        self.xp = self.xp.saturating_add(amount);
    }

    /// Add gold. Negative grants are ignored.
    pub fn grant_gold(&mut self, amount: i64) {
        let amount = u32::try_from(amount.max(0)).unwrap_or(u32::MAX);
        self.gold = self.gold.saturating_add(amount);
    }

    /// Append one unit of an item.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Whether at least one unit of `item` is carried.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Remove exactly one unit of `item`. Returns false if none was carried.
    pub fn remove_one(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|i| i == item) {
            Some(pos) => {
                self.inventory.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Record a location as visited (idempotent).
    pub fn mark_visited(&mut self, location: &str) {
        if !self.visited_locations.iter().any(|l| l == location) {
            self.visited_locations.push(location.to_string());
        }
    }

    /// Record a defeated enemy name (idempotent).
    pub fn mark_defeated(&mut self, name: &str) {
        if !self.defeated_enemies.iter().any(|n| n == name) {
            self.defeated_enemies.push(name.to_string());
        }
    }

    /// Whether `name` has been defeated before.
    pub fn has_defeated(&self, name: &str) -> bool {
        self.defeated_enemies.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_defaults() {
        let s = AdventureState::new("Rin", Genre::SciFi);
        assert_eq!(s.player_name, "Rin");
        assert_eq!(s.hp, 100);
        assert_eq!(s.max_hp, 100);
        assert_eq!(s.level, 1);
        assert_eq!(s.xp_to_next_level, 100);
        assert_eq!(s.inventory, vec!["Torch", "Water Flask"]);
        assert_eq!(s.location, "Derelict Space Station");
        assert!(s.enemy.is_none());
        assert!(!s.game_over);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut s = AdventureState::new("Rin", Genre::Fantasy);
        s.hp = 90;
        assert_eq!(s.heal(30), 10);
        assert_eq!(s.hp, 100);
        assert_eq!(s.heal(-5), 0);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut s = AdventureState::new("Rin", Genre::Fantasy);
        assert_eq!(s.take_damage(40), 60);
        assert_eq!(s.take_damage(500), 0);
        assert_eq!(s.take_damage(-3), 0);
    }

    #[test]
    fn remove_one_unit_only() {
        let mut s = AdventureState::new("Rin", Genre::Fantasy);
        s.add_item("Torch");
        assert!(s.remove_one("Torch"));
        assert_eq!(s.inventory, vec!["Water Flask", "Torch"]);
        assert!(!s.remove_one("Rope"));
    }

    #[test]
    fn visited_and_defeated_are_sets() {
        let mut s = AdventureState::new("Rin", Genre::Fantasy);
        s.mark_visited("Dragon Cave");
        s.mark_visited("Dragon Cave");
        s.mark_defeated("Goblin");
        s.mark_defeated("Goblin");
        assert_eq!(s.visited_locations.len(), 1);
        assert_eq!(s.defeated_enemies.len(), 1);
        assert!(s.has_defeated("Goblin"));
    }

    #[test]
    fn scaled_enemy_stats() {
        let content = GenreContent::for_genre(Genre::Fantasy);
        let orc = &content.regular_enemies[2];
        let e = Enemy::scaled(orc, "Health Potion");
        assert_eq!(e.hp, 60);
        assert_eq!(e.max_hp, 60);
        assert_eq!(e.xp, 40);
        assert_eq!(e.drops, vec!["Health Potion"]);

        let e = Enemy::from_template(orc);
        assert_eq!(e.hp, 50);
        assert_eq!(e.xp, 35);
    }
}
