//! Fixed narration: the opening scene, the status sheet, and replies to
//! input that matches no action.

use ht_core::{Genre, GenreContent, RandomSource};

use crate::state::AdventureState;

/// The scene that opens a new adventure.
pub fn opening_scene(player_name: &str, genre: Genre) -> String {
    match genre {
        Genre::Fantasy => format!(
            "Welcome, {player_name}! You stand at the edge of an ancient forest. Tall trees \
             whisper secrets in the wind, and a narrow path leads into the mysterious depths. \
             The air is thick with magic and possibility."
        ),
        Genre::SciFi => format!(
            "Commander {player_name}, your starship emerges from hyperspace. Before you floats \
             the derelict station XT-7, its lights flickering erratically. Scanners show \
             anomalous energy readings from the core."
        ),
        Genre::Mystery => format!(
            "Detective {player_name}, the rain pours down as you approach the old Hawthorne \
             Manor. A single light flickers in an upstairs window. The case file in your pocket \
             speaks of strange occurrences and missing persons."
        ),
    }
}

/// Multi-line character sheet.
pub fn status_sheet(state: &AdventureState) -> String {
    let mut text = format!(
        "Character Status:\n\
         Name: {}\n\
         Level: {}\n\
         HP: {}/{}\n\
         XP: {}/{}\n\
         Location: {}\n\
         Gold: {}\n\
         Visited Locations: {}\n\
         Defeated Enemies: {}",
        state.player_name,
        state.level,
        state.hp,
        state.max_hp,
        state.xp,
        state.xp_to_next_level,
        state.location,
        state.gold,
        state.visited_locations.len(),
        state.defeated_enemies.len(),
    );
    if let Some(enemy) = &state.enemy {
        text.push_str(&format!(
            "\nCurrent Enemy: {} (Level {})",
            enemy.name, enemy.level
        ));
    }
    text
}

const CLOSERS: &[&str] = &[
    "your actions shape the world around you.",
    "every choice leads to new possibilities.",
    "the adventure continues based on your decisions.",
    "what destiny will you forge next?",
];

const HINTS: &[&str] = &[
    "Try exploring, resting, or checking your inventory.",
    "You can attack enemies, move to new locations, or use items.",
    "Consider your options carefully, since each action has consequences.",
];

/// Reply to unrecognized input: combat tension if engaged, otherwise a
/// line about the surroundings, then a hint.
pub fn general_reply<R: RandomSource>(
    state: &AdventureState,
    content: &GenreContent,
    rng: &mut R,
) -> String {
    let mut text = match &state.enemy {
        Some(enemy) => {
            let name = &enemy.name;
            let tension = [
                format!("The {name} growls menacingly. You need to decide your next move in combat."),
                format!("With the {name} before you, the tension is palpable. What will you do?"),
                format!("The battle continues! The {name} awaits your action."),
            ];
            let i = rng.index(tension.len());
            tension[i].clone()
        }
        None => {
            let place = content
                .describe(&state.location)
                .unwrap_or("In this mysterious place,");
            let closer = rng.pick(CLOSERS).copied().unwrap_or_default();
            format!("{place} {closer}")
        }
    };
    if let Some(hint) = rng.pick(HINTS) {
        text.push(' ');
        text.push_str(hint);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Enemy;
    use ht_core::ScriptedSource;

    #[test]
    fn openings_name_the_player() {
        assert!(opening_scene("Ari", Genre::Fantasy).starts_with("Welcome, Ari!"));
        assert!(opening_scene("Vex", Genre::SciFi).starts_with("Commander Vex,"));
        assert!(opening_scene("Moss", Genre::Mystery).starts_with("Detective Moss,"));
    }

    #[test]
    fn status_lists_enemy_when_engaged() {
        let mut s = AdventureState::new("Ari", Genre::Fantasy);
        let sheet = status_sheet(&s);
        assert!(sheet.starts_with("Character Status:\nName: Ari\nLevel: 1\nHP: 100/100"));
        assert!(sheet.ends_with("Defeated Enemies: 0"));

        s.enemy = Some(Enemy::from_template(&s.content().regular_enemies[0]));
        assert!(status_sheet(&s).ends_with("\nCurrent Enemy: Goblin (Level 1)"));
    }

    #[test]
    fn general_reply_describes_surroundings() {
        let s = AdventureState::new("Ari", Genre::Fantasy);
        let mut rng = ScriptedSource::constant(0.0);
        let text = general_reply(&s, s.content(), &mut rng);
        assert!(text.starts_with("The trees here are ancient"));
        assert!(text.contains("your actions shape the world around you."));
        assert!(text.ends_with("Try exploring, resting, or checking your inventory."));
    }

    #[test]
    fn general_reply_in_combat() {
        let mut s = AdventureState::new("Ari", Genre::Fantasy);
        s.enemy = Some(Enemy::from_template(&s.content().regular_enemies[1]));
        let mut rng = ScriptedSource::new([0.5, 0.9]);
        let text = general_reply(&s, s.content(), &mut rng);
        assert!(text.starts_with("With the Kobold before you"));
    }

    #[test]
    fn unknown_location_uses_fallback() {
        let mut s = AdventureState::new("Ari", Genre::Fantasy);
        s.location = "Nowhere".into();
        let mut rng = ScriptedSource::constant(0.0);
        assert!(general_reply(&s, s.content(), &mut rng).starts_with("In this mysterious place,"));
    }
}
