use super::{EnemyTemplate, GenreContent, Location, enemy, place};
use crate::genre::Genre;

const LOCATIONS: &[Location] = &[
    place(
        "Derelict Space Station",
        "Flickering lights and emergency alerts create an eerie atmosphere. The station hums with residual power.",
    ),
    place(
        "Alien Planet",
        "Strange flora glows with bioluminescent light. The air smells of ozone and unknown minerals.",
    ),
    place(
        "Cybernetic City",
        "Holographic advertisements flicker between buildings. Drones patrol the skies silently.",
    ),
    place(
        "Quantum Laboratory",
        "Reality seems to warp at the edges. Strange particles float in containment fields.",
    ),
    place(
        "Asteroid Base",
        "Artificial gravity generators create a comfortable environment amidst the vacuum of space.",
    ),
    place(
        "Dimensional Rift",
        "Colors shift unnaturally. The laws of physics seem to bend and twist around you.",
    ),
];

const EXPLORATION_EVENTS: &[&str] = &[
    "You discover a hidden data terminal with classified information about the station's final moments.",
    "An alien artifact pulses with strange energy, revealing star maps to unknown systems.",
    "You find a working escape pod with emergency supplies and navigation data.",
    "A holographic recording shows the last moments of the station crew before something went wrong.",
];

const REST_EVENTS: &[&str] = &[
    "During your rest cycle, the ship's AI analyzes combat data and suggests tactical improvements.",
    "While recharging, you discover a hidden compartment with advanced technology blueprints.",
    "The station's environmental systems create a perfect resting atmosphere, accelerating your recovery.",
];

const REGULAR_ENEMIES: &[EnemyTemplate] = &[
    enemy("Security Drone", 1, 30, 20, &["Energy Cell", "Scrap Metal"]),
    enemy("Mutant Rat", 1, 25, 15, &["Bio-sample", "Emergency Rations"]),
    enemy("Cyborg Guard", 2, 50, 35, &["Laser Pistol", "Medkit"]),
    enemy("Alien Scout", 2, 45, 30, &["Alien Alloy", "Strange Crystal"]),
    enemy("Combat Android", 3, 80, 50, &["Plasma Cartridge", "Circuit Board"]),
    enemy("Hologram Assassin", 4, 100, 70, &["Holo-emitter", "Data Chip"]),
    enemy("Plasma Trooper", 4, 120, 65, &["Plasma Rifle", "Shield Generator"]),
    enemy("Battle Mech", 5, 140, 90, &["Heavy Armor", "Rocket Pack"]),
    enemy("AI Core", 6, 180, 130, &["Quantum Processor", "Neural Interface"]),
    enemy("Quantum Soldier", 6, 200, 120, &["Phase Rifle", "Temporal Device"]),
    enemy("Starship Captain", 7, 190, 160, &["Command Codes", "Advanced Medkit"]),
    enemy("Time Agent", 8, 230, 190, &["Chronal Stabilizer", "Reality Anchor"]),
    enemy("Cyborg Tyrant", 9, 280, 230, &["Cybernetic Implants", "Force Field"]),
];

const BOSS_ENEMIES: &[EnemyTemplate] = &[
    enemy("Alien Warrior", 5, 150, 100, &["Alien Technology", "Warp Crystal"]),
    enemy("Dimensional Being", 7, 220, 170, &["Dimensional Shard", "Reality Gem"]),
    enemy("AI Overlord", 8, 250, 200, &["Master AI Core", "Network Key"]),
    enemy("Cosmic Horror", 9, 300, 250, &["Eldritch Essence", "Star Map"]),
    enemy("Galactic Emperor", 10, 350, 300, &["Imperial Seal", "Fleet Codes"]),
    enemy("Cosmic Entity", 15, 500, 500, &["Cosmic Core", "Universal Key"]),
];

pub(super) static CONTENT: GenreContent = GenreContent {
    genre: Genre::SciFi,
    locations: LOCATIONS,
    exploration_events: EXPLORATION_EVENTS,
    rest_events: REST_EVENTS,
    regular_enemies: REGULAR_ENEMIES,
    boss_enemies: BOSS_ENEMIES,
};
