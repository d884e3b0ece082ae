//! Read-only view of an adventure for display.

use serde::{Deserialize, Serialize};

use crate::inventory::{group_inventory, icon_for};
use crate::state::AdventureState;

/// One grouped inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    /// Display icon.
    pub icon: String,
    /// Item name.
    pub name: String,
    /// Units carried.
    pub count: usize,
}

/// Everything a status display needs, detached from the live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player display name.
    pub name: String,
    /// Genre label.
    pub genre: String,
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Character level.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Experience required for the next level.
    pub xp_to_next_level: u32,
    /// Gold coins.
    pub gold: u32,
    /// Current location.
    pub location: String,
    /// HP bar fill, 0-100.
    pub hp_percent: f64,
    /// XP bar fill, capped at 100.
    pub xp_percent: f64,
    /// Grouped inventory.
    pub inventory: Vec<InventoryRow>,
    /// "Name (Level N)" or "None".
    pub enemy: String,
    /// Whether the readiness flag is set.
    pub ready_for_battle: bool,
    /// Whether the adventure has ended.
    pub game_over: bool,
}

fn percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(max) * 100.0
}

impl Snapshot {
    /// Capture the current state.
    pub fn capture(state: &AdventureState) -> Self {
        Self {
            name: state.player_name.clone(),
            genre: state.genre.label().to_string(),
            hp: state.hp,
            max_hp: state.max_hp,
            level: state.level,
            xp: state.xp,
            xp_to_next_level: state.xp_to_next_level,
            gold: state.gold,
            location: state.location.clone(),
            hp_percent: percent(state.hp, state.max_hp),
            xp_percent: percent(state.xp, state.xp_to_next_level).min(100.0),
            inventory: group_inventory(&state.inventory)
                .into_iter()
                .map(|(name, count)| InventoryRow {
                    icon: icon_for(&name).to_string(),
                    name,
                    count,
                })
                .collect(),
            enemy: state
                .enemy
                .as_ref()
                .map(|e| format!("{} (Level {})", e.name, e.level))
                .unwrap_or_else(|| "None".to_string()),
            ready_for_battle: state.ready_for_battle,
            game_over: state.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Enemy;
    use ht_core::Genre;

    #[test]
    fn fresh_character() {
        let s = AdventureState::new("Ari", Genre::SciFi);
        let snap = Snapshot::capture(&s);
        assert_eq!(snap.genre, "Sci-fi");
        assert_eq!(snap.hp_percent, 100.0);
        assert_eq!(snap.xp_percent, 0.0);
        assert_eq!(snap.enemy, "None");
        assert_eq!(snap.inventory.len(), 2);
        assert_eq!(snap.inventory[0].icon, "🔦");
    }

    #[test]
    fn bars_and_enemy() {
        let mut s = AdventureState::new("Ari", Genre::Fantasy);
        s.hp = 25;
        s.xp = 150;
        s.enemy = Some(Enemy::from_template(&s.content().regular_enemies[2]));
        let snap = Snapshot::capture(&s);
        assert_eq!(snap.hp_percent, 25.0);
        assert_eq!(snap.xp_percent, 100.0);
        assert_eq!(snap.enemy, "Orc (Level 2)");
    }

    #[test]
    fn serializes_to_json() {
        let s = AdventureState::new("Ari", Genre::Fantasy);
        let json = serde_json::to_value(Snapshot::capture(&s)).unwrap();
        assert_eq!(json["name"], "Ari");
        assert_eq!(json["inventory"][1]["name"], "Water Flask");
    }
}
