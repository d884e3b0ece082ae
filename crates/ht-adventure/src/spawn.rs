//! Enemy selection and spawning.
//!
//! Regular enemies that the player has already defeated are excluded from
//! future draws; boss names are always eligible. When nothing is left to
//! draw, a stranger scaled to the player's level stands in.

use ht_core::{EnemyTemplate, GenreContent, RandomSource, is_boss};

use crate::state::{AdventureState, Enemy};

/// Levels above the player's at which a spawn prints a warning.
pub const DANGER_MARGIN: u32 = 3;

/// Stand-in used when every candidate has been defeated.
pub fn fallback_enemy(player_level: u32) -> EnemyTemplate {
    EnemyTemplate {
        name: "Mysterious Stranger",
        level: player_level,
        hp: 50,
        xp: 25,
        drops: &["Health Potion"],
    }
}

/// How a drawn template becomes a live enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Use the template's stats as listed.
    Template,
    /// Level-derived stats with the given single drop.
    Level(&'static str),
}

/// Draw one template uniformly from the candidates the player may still
/// face.
pub fn draw_template<R: RandomSource>(
    state: &AdventureState,
    candidates: &[&EnemyTemplate],
    rng: &mut R,
) -> EnemyTemplate {
    let available: Vec<&EnemyTemplate> = candidates
        .iter()
        .copied()
        .filter(|e| is_boss(e.name) || !state.has_defeated(e.name))
        .collect();

    match rng.pick(&available) {
        Some(template) => **template,
        None => {
            tracing::debug!(level = state.level, "no eligible enemies left, using fallback");
            fallback_enemy(state.level)
        }
    }
}

/// Draw from `candidates` and install the result as the active enemy.
/// Returns a reference to the new enemy.
pub fn spawn<'s, R: RandomSource>(
    state: &'s mut AdventureState,
    candidates: &[&EnemyTemplate],
    scaling: Scaling,
    rng: &mut R,
) -> &'s Enemy {
    let template = draw_template(state, candidates, rng);
    let enemy = match scaling {
        Scaling::Template => Enemy::from_template(&template),
        Scaling::Level(drop) => Enemy::scaled(&template, drop),
    };
    tracing::debug!(name = %enemy.name, level = enemy.level, hp = enemy.hp, "enemy spawned");
    state.enemy.insert(enemy)
}

/// Spawn a boss from the genre's boss table, ignoring the defeated list.
///
/// A boss below the player's level is raised to it, with hit points scaled
/// in proportion. Returns `None` only if the boss table is empty.
pub fn spawn_boss<'s, R: RandomSource>(
    state: &'s mut AdventureState,
    content: &GenreContent,
    rng: &mut R,
) -> Option<&'s Enemy> {
    let boss = rng.pick(content.boss_enemies)?;
    let level = boss.level.max(state.level);
    let hp = boss.hp * level / boss.level.max(1);
    let enemy = Enemy {
        name: boss.name.to_string(),
        level,
        hp: i64::from(hp),
        max_hp: hp,
        xp: boss.xp,
        drops: boss.drops.iter().map(|d| d.to_string()).collect(),
    };
    tracing::debug!(name = %enemy.name, level, hp, "boss spawned");
    Some(state.enemy.insert(enemy))
}

/// Warning line for an enemy far above the player's level. Spawning is
/// never blocked.
pub fn level_warning(player_level: u32, enemy: &Enemy) -> Option<String> {
    (enemy.level > player_level + DANGER_MARGIN).then(|| {
        format!(
            "Warning: The {} (Level {}) is much stronger than you! Proceed with caution.",
            enemy.name, enemy.level
        )
    })
}
