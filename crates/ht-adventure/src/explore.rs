//! Exploring, travelling, and resting.

use ht_core::{GenreContent, RandomSource};

use crate::spawn::{Scaling, level_warning, spawn, spawn_boss};
use crate::state::AdventureState;

/// Items that can turn up while exploring.
pub const COMMON_ITEMS: &[&str] = &["Health Potion", "Torch", "Rations", "Water Flask"];

/// Chance of finding an item while exploring.
pub const ITEM_CHANCE: f64 = 0.5;
/// Chance of finding gold while exploring.
pub const GOLD_CHANCE: f64 = 0.3;
/// Chance of an encounter while exploring with no active enemy.
pub const ENCOUNTER_CHANCE: f64 = 0.4;
/// Share of exploration encounters that are bosses.
pub const BOSS_CHANCE: f64 = 0.1;
/// Chance of an ambush on arrival at a dangerous location.
pub const AMBUSH_CHANCE: f64 = 0.7;
/// Chance of a flavor event while resting.
pub const REST_EVENT_CHANCE: f64 = 0.3;

/// Search the current area for events, loot, and trouble.
pub fn explore<R: RandomSource>(
    state: &mut AdventureState,
    content: &GenreContent,
    rng: &mut R,
) -> Vec<String> {
    let mut text = rng
        .pick(content.exploration_events)
        .map(|e| e.to_string())
        .unwrap_or_else(|| "You search the area carefully.".to_string());

    let mut found = Vec::new();
    if rng.chance(ITEM_CHANCE)
        && let Some(item) = rng.pick(COMMON_ITEMS)
    {
        state.add_item(*item);
        found.push(format!("a {item}"));
    }
    if rng.chance(GOLD_CHANCE) {
        let gold = rng.int_inclusive(0, 15) + 5 * i64::from(state.level);
        state.grant_gold(gold);
        found.push(format!("{gold} gold coins"));
    }
    if !found.is_empty() {
        text.push_str(&format!(" You find {}.", found.join(" and ")));
    }

    let mut warning = None;
    if state.enemy.is_none() && rng.chance(ENCOUNTER_CHANCE) {
        if rng.chance(BOSS_CHANCE) {
            if let Some(boss) = spawn_boss(state, content, rng) {
                text.push_str(&format!(
                    " A powerful {} appears! This is a boss encounter!",
                    boss.name
                ));
            }
        } else {
            let level = state.level;
            let candidates: Vec<_> = content.regular_enemies.iter().collect();
            let enemy = spawn(state, &candidates, Scaling::Level("Health Potion"), rng);
            text.push_str(&format!(" Suddenly, a {} appears!", enemy.name));
            warning = level_warning(level, enemy);
        }
    }

    let mut lines: Vec<String> = warning.into_iter().collect();
    lines.push(text);
    lines
}

/// Travel to a random location other than the current one.
pub fn travel<R: RandomSource>(
    state: &mut AdventureState,
    content: &GenreContent,
    rng: &mut R,
) -> Vec<String> {
    let options: Vec<_> = content
        .locations
        .iter()
        .filter(|l| l.name != state.location)
        .collect();

    let Some(destination) = rng.pick(&options) else {
        return vec![
            "You're already familiar with this area. Perhaps you should explore it more thoroughly."
                .to_string(),
        ];
    };

    state.location = destination.name.to_string();
    state.mark_visited(destination.name);
    tracing::debug!(location = destination.name, "travelled");
    let mut text = format!("You travel to {}. {}", destination.name, destination.description);

    let mut warning = None;
    if content.is_dangerous(destination.name)
        && state.enemy.is_none()
        && rng.chance(AMBUSH_CHANCE)
    {
        let level = state.level;
        let candidates = content.all_enemies();
        let enemy = spawn(
            state,
            &candidates,
            Scaling::Level("Greater Health Potion"),
            rng,
        );
        text.push_str(&format!(" A {} emerges, blocking your path!", enemy.name));
        warning = level_warning(level, enemy);
    }

    let mut lines: Vec<String> = warning.into_iter().collect();
    lines.push(text);
    lines
}

/// Rest to recover `[0, 10] + 20 + 5 * level - 5` hit points.
pub fn rest<R: RandomSource>(
    state: &mut AdventureState,
    content: &GenreContent,
    rng: &mut R,
) -> Vec<String> {
    let amount = rng.int_inclusive(0, 10) + 20 + i64::from(state.level) * 5 - 5;
    let healed = state.heal(amount);
    let mut text = format!(
        "You take a moment to rest and recover. You regain {healed} HP. Current HP: {}/{}",
        state.hp, state.max_hp
    );
    if rng.chance(REST_EVENT_CHANCE)
        && let Some(event) = rng.pick(content.rest_events)
    {
        text.push(' ');
        text.push_str(event);
    }
    vec![text]
}
