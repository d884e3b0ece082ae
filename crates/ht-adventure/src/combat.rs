//! Combat resolution.
//!
//! One call is one exchange: the first attack draws an opponent, each
//! later attack trades blows until one side drops. Player defeat sets the
//! terminal `game_over` flag in the same exchange.

use ht_core::{GenreContent, RandomSource, is_boss};

use crate::progression::grant_kill_rewards;
use crate::spawn::{Scaling, level_warning, spawn};
use crate::state::AdventureState;

/// Chance that a slain enemy leaves one of its drops.
pub const DROP_CHANCE: f64 = 0.7;

/// Player damage for one swing: `[0, 10] + (10 + 5 * level) - 5`.
pub fn player_damage<R: RandomSource>(level: u32, rng: &mut R) -> i64 {
    rng.int_inclusive(0, 10) + 10 + i64::from(level) * 5 - 5
}

/// Enemy damage for one counterattack: `[0, 8] + (8 + 4 * level) - 3`.
pub fn enemy_damage<R: RandomSource>(enemy_level: u32, rng: &mut R) -> i64 {
    rng.int_inclusive(0, 8) + 8 + i64::from(enemy_level) * 4 - 3
}

/// Resolve one attack.
pub fn attack<R: RandomSource>(
    state: &mut AdventureState,
    content: &GenreContent,
    rng: &mut R,
) -> Vec<String> {
    let level = state.level;

    if state.enemy.is_none() {
        let candidates = content.all_enemies();
        let enemy = spawn(state, &candidates, Scaling::Template, rng);
        let mut lines: Vec<String> = level_warning(level, enemy).into_iter().collect();
        lines.push(format!(
            "You prepare for battle! A {} (Level {}) appears and attacks!",
            enemy.name, enemy.level
        ));
        return lines;
    }
    let Some(enemy) = state.enemy.as_mut() else {
        return Vec::new();
    };

    let dealt = player_damage(level, rng);
    enemy.hp -= dealt;
    let mut text = format!("You attack the {} dealing {dealt} damage! ", enemy.name);

    if !enemy.is_defeated() {
        let name = enemy.name.clone();
        let taken = enemy_damage(enemy.level, rng);
        let hp = state.take_damage(taken);
        text.push_str(&format!(
            "The {name} counterattacks! You take {taken} damage. HP: {hp}/{}",
            state.max_hp
        ));
        if hp == 0 {
            text.push_str(" You have been defeated! The adventure ends here.");
            state.game_over = true;
            tracing::debug!(enemy = %name, "player defeated");
        }
        return vec![text];
    }

    let Some(enemy) = state.enemy.take() else {
        return vec![text];
    };
    state.grant_xp(i64::from(enemy.xp));
    if !is_boss(&enemy.name) {
        state.mark_defeated(&enemy.name);
    }
    tracing::debug!(enemy = %enemy.name, xp = enemy.xp, "enemy defeated");

    let rewards = grant_kill_rewards(state, enemy.level, rng);

    text.push_str(&format!("You defeat the {} and gain {} XP!", enemy.name, enemy.xp));
    if rng.chance(DROP_CHANCE)
        && let Some(item) = rng.pick(&enemy.drops)
    {
        state.add_item(item.clone());
        text.push_str(&format!(" The enemy drops a {item}!"));
    }
    let gold = enemy.level * 5;
    state.grant_gold(i64::from(gold));
    text.push_str(&format!(" You find {gold} gold coins."));

    let mut lines = vec![text];
    lines.extend(rewards);
    lines
}

/// Disengage from the current enemy. The enemy is dismissed without being
/// recorded as defeated.
pub fn flee(state: &mut AdventureState) -> Vec<String> {
    match state.enemy.take() {
        Some(enemy) => vec![format!(
            "You slip away from the {} before it can strike again.",
            enemy.name
        )],
        None => vec!["There is nothing to flee from.".to_string()],
    }
}
