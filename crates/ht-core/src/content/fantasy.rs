use super::{EnemyTemplate, GenreContent, Location, enemy, place};
use crate::genre::Genre;

const LOCATIONS: &[Location] = &[
    place(
        "Ancient Forest",
        "The trees here are ancient, their bark carved with mysterious runes that glow with faint magic.",
    ),
    place(
        "Dragon Cave",
        "The air is hot and smells of sulfur. Gold coins and precious gems glitter in the dim light.",
    ),
    place(
        "Enchanted Castle",
        "Magic crackles in the air. Portraits on the walls seem to watch your every move with knowing eyes.",
    ),
    place(
        "Mystic Ruins",
        "Stones float in the air, arranged in patterns that defy gravity and conventional understanding.",
    ),
    place(
        "Elven Village",
        "Ethereal music floats through the air. The elves watch you with curious, ancient eyes.",
    ),
    place(
        "Shadow Swamp",
        "Thick mist obscures your vision. Strange creatures move in the murky waters.",
    ),
];

const EXPLORATION_EVENTS: &[&str] = &[
    "You discover ancient runes carved into a standing stone. They seem to tell a story of lost kingdoms and forgotten magic.",
    "An ancient tree whispers secrets of a forgotten kingdom as you pass beneath its branches.",
    "You find a hidden path that leads to a shimmering portal of pure energy.",
    "A friendly fairy offers to guide you through the forest in exchange for a story.",
];

const REST_EVENTS: &[&str] = &[
    "During your rest, you have a vivid dream about a legendary artifact hidden deep in the mountains.",
    "While resting, you notice strange symbols carved into nearby trees that you hadn't seen before.",
    "As you rest, a gentle rain begins to fall, washing away your fatigue and refreshing the forest.",
];

const REGULAR_ENEMIES: &[EnemyTemplate] = &[
    enemy("Goblin", 1, 30, 20, &["Health Potion", "Rusty Dagger"]),
    enemy("Kobold", 1, 25, 15, &["Torch", "Rations"]),
    enemy("Orc", 2, 50, 35, &["Health Potion", "Iron Sword"]),
    enemy("Skeleton Warrior", 2, 45, 30, &["Bone Dust", "Rusty Sword"]),
    enemy("Forest Troll", 3, 80, 50, &["Greater Health Potion", "Troll Hide"]),
    enemy("Dark Wizard", 4, 100, 70, &["Mana Potion", "Spell Scroll"]),
    enemy("Ogre", 4, 120, 65, &["Greater Health Potion", "Ogre Club"]),
    enemy("Minotaur", 5, 140, 90, &["Magic Sword", "Leather Armor"]),
    enemy("Ancient Lich", 6, 180, 130, &["Phoenix Feather", "Crown of Kings"]),
    enemy("Giant", 6, 200, 120, &["Giant Club", "Ancient Coin"]),
    enemy("Archmage", 7, 190, 160, &["Ancient Scroll", "Crystal Shard"]),
    enemy("Phoenix", 8, 230, 190, &["Phoenix Feather", "Fire Essence"]),
    enemy("Titan", 9, 280, 230, &["Titan Hammer", "Star Metal"]),
];

const BOSS_ENEMIES: &[EnemyTemplate] = &[
    enemy("Dragon", 5, 150, 100, &["Dragon Scale", "Ancient Artifact"]),
    enemy("Celestial Being", 7, 220, 170, &["Excalibur", "Dragon Heart"]),
    enemy("Demon Lord", 8, 250, 200, &["Demon Horn", "Enchanted Amulet"]),
    enemy("Ancient Dragon", 9, 300, 250, &["Dragon Heart", "Scale Armor"]),
    enemy("God of War", 10, 350, 300, &["Divine Sword", "Godly Armor"]),
    enemy("The Nightbinder", 15, 500, 500, &["Ultimate Artifact", "Eternal Crown"]),
];

pub(super) static CONTENT: GenreContent = GenreContent {
    genre: Genre::Fantasy,
    locations: LOCATIONS,
    exploration_events: EXPLORATION_EVENTS,
    rest_events: REST_EVENTS,
    regular_enemies: REGULAR_ENEMIES,
    boss_enemies: BOSS_ENEMIES,
};
