//! Experience, leveling, and kill rewards.

use ht_core::RandomSource;

use crate::state::AdventureState;

/// Items granted on every third level.
pub const UNCOMMON_ITEMS: &[&str] = &[
    "Magic Sword",
    "Greater Health Potion",
    "Mana Potion",
    "Leather Armor",
];

/// Chance that a kill awards a gift from the level pool.
pub const GIFT_CHANCE: f64 = 0.6;

/// Gift pool for an enemy of the given level.
pub fn gift_pool(enemy_level: u32) -> &'static [&'static str] {
    match enemy_level {
        1 => &["Ration", "Lesser Rune"],
        2 => &["Minor Amulet", "Iron Tincture"],
        3 => &["Greater Rune", "Enchanted Band"],
        _ => &["Coin Pouch"],
    }
}

/// Apply every level-up the current experience pays for.
///
/// Each level consumes the current threshold, grows the next one by half
/// (floored, never below 1), raises max HP by `20 + 2 * level`, heals fully,
/// and grants `10 * level` gold. Every third level also grants an uncommon
/// item and sets the battle-ready flag. Returns one announcement per level
/// plus the battle-ready notices; empty when nothing changed.
pub fn apply_level_ups<R: RandomSource>(state: &mut AdventureState, rng: &mut R) -> Vec<String> {
    let mut lines = Vec::new();
    state.xp_to_next_level = state.xp_to_next_level.max(1);

    while state.xp >= state.xp_to_next_level {
        state.level += 1;
        state.xp -= state.xp_to_next_level;
        state.xp_to_next_level = (state.xp_to_next_level.saturating_mul(3) / 2).max(1);

        let old_max = state.max_hp;
        state.max_hp += 20 + state.level * 2;
        state.hp = state.max_hp;

        let mut rewards = Vec::new();
        let milestone = state.level % 3 == 0;
        if milestone && let Some(item) = rng.pick(UNCOMMON_ITEMS) {
            state.add_item(*item);
            rewards.push(item.to_string());
        }
        let gold = state.level * 10;
        state.grant_gold(i64::from(gold));
        rewards.push(format!("{gold} gold"));

        tracing::debug!(level = state.level, max_hp = state.max_hp, "level up");
        lines.push(format!(
            "🎉 LEVEL UP! You are now Level {}! Your maximum HP increased from {old_max} to {}. \
             You are fully healed! You receive: {}!",
            state.level,
            state.max_hp,
            rewards.join(" and "),
        ));

        if milestone {
            state.ready_for_battle = true;
            lines.push(
                "You feel battle-ready. Your training and experience make you prepared for tougher foes."
                    .to_string(),
            );
        }
    }

    lines
}

/// Secondary rewards for a kill: a chance at a gift from the level pool,
/// guaranteed bonus experience of `floor(5 * level + [0, 6))`, then a
/// level-up check.
pub fn grant_kill_rewards<R: RandomSource>(
    state: &mut AdventureState,
    enemy_level: u32,
    rng: &mut R,
) -> Vec<String> {
    let mut lines = Vec::new();

    if rng.chance(GIFT_CHANCE)
        && let Some(gift) = rng.pick(gift_pool(enemy_level))
    {
        state.add_item(*gift);
        lines.push(format!("You receive a gift: {gift}"));
    }

    let bonus = (f64::from(enemy_level) * 5.0 + rng.next_unit() * 6.0).floor() as i64;
    state.grant_xp(bonus);
    lines.push(format!("Bonus XP gained: {bonus}"));

    lines.extend(apply_level_ups(state, rng));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ht_core::{Genre, ScriptedSource};

    fn fresh() -> AdventureState {
        AdventureState::new("T", Genre::Fantasy)
    }

    #[test]
    fn no_level_below_threshold() {
        let mut s = fresh();
        s.xp = 99;
        let mut rng = ScriptedSource::constant(0.0);
        assert!(apply_level_ups(&mut s, &mut rng).is_empty());
        assert_eq!(s.level, 1);
        assert_eq!(s.xp, 99);
    }

    #[test]
    fn single_level_up() {
        let mut s = fresh();
        s.xp = 120;
        s.hp = 10;
        let mut rng = ScriptedSource::constant(0.0);
        let lines = apply_level_ups(&mut s, &mut rng);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("LEVEL UP! You are now Level 2!"));
        assert!(lines[0].contains("from 100 to 124"));
        assert_eq!(s.level, 2);
        assert_eq!(s.xp, 20);
        assert_eq!(s.xp_to_next_level, 150);
        assert_eq!(s.max_hp, 124);
        assert_eq!(s.hp, 124);
        assert_eq!(s.gold, 20);
    }

    #[test]
    fn multi_level_grant_compounds() {
        let mut s = fresh();
        s.xp = 250;
        let mut rng = ScriptedSource::constant(0.0);
        let lines = apply_level_ups(&mut s, &mut rng);
        assert_eq!(s.level, 3);
        assert_eq!(s.xp, 0);
        assert_eq!(s.xp_to_next_level, 225);
        // 100 + (20 + 4) + (20 + 6)
        assert_eq!(s.max_hp, 150);
        assert_eq!(s.hp, 150);
        // 20 + 30 gold
        assert_eq!(s.gold, 50);
        // Level 3 grants an uncommon item and the battle-ready notice.
        assert_eq!(lines.len(), 3);
        assert!(s.ready_for_battle);
        assert_eq!(s.inventory.last().map(String::as_str), Some("Magic Sword"));
    }

    #[test]
    fn idempotent_at_fixed_point() {
        let mut s = fresh();
        s.xp = 250;
        let mut rng = ScriptedSource::constant(0.0);
        apply_level_ups(&mut s, &mut rng);
        let snapshot = (s.level, s.xp, s.xp_to_next_level, s.max_hp, s.gold);
        assert!(apply_level_ups(&mut s, &mut rng).is_empty());
        assert_eq!(
            snapshot,
            (s.level, s.xp, s.xp_to_next_level, s.max_hp, s.gold)
        );
    }

    #[test]
    fn zero_threshold_is_guarded() {
        let mut s = fresh();
        s.xp_to_next_level = 0;
        s.xp = 3;
        let mut rng = ScriptedSource::constant(0.0);
        apply_level_ups(&mut s, &mut rng);
        assert!(s.xp_to_next_level >= 1);
        assert!(s.xp < s.xp_to_next_level);
    }

    #[test]
    fn kill_rewards_with_gift() {
        let mut s = fresh();
        // gift roll hits, pick index 1, bonus fraction 0.5 -> floor(5 + 3)
        let mut rng = ScriptedSource::new([0.1, 0.6, 0.5]);
        let lines = grant_kill_rewards(&mut s, 1, &mut rng);
        assert_eq!(lines[0], "You receive a gift: Lesser Rune");
        assert_eq!(lines[1], "Bonus XP gained: 8");
        assert_eq!(s.xp, 8);
        assert!(s.has_item("Lesser Rune"));
    }

    #[test]
    fn kill_rewards_without_gift() {
        let mut s = fresh();
        let mut rng = ScriptedSource::new([0.9, 0.0]);
        let lines = grant_kill_rewards(&mut s, 7, &mut rng);
        assert_eq!(lines, vec!["Bonus XP gained: 35"]);
        assert_eq!(s.inventory.len(), 2);
    }

    #[test]
    fn gift_pools_by_level() {
        assert_eq!(gift_pool(2), &["Minor Amulet", "Iron Tincture"]);
        assert_eq!(gift_pool(0), &["Coin Pouch"]);
        assert_eq!(gift_pool(9), &["Coin Pouch"]);
    }
}
