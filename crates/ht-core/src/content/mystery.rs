use super::{EnemyTemplate, GenreContent, Location, enemy, place};
use crate::genre::Genre;

const LOCATIONS: &[Location] = &[
    place(
        "Hawthorne Manor",
        "Dust covers every surface. Portraits of stern ancestors watch your every move from the walls.",
    ),
    place(
        "Abandoned Asylum",
        "The air is cold and heavy. Faint whispers seem to echo from empty rooms.",
    ),
    place(
        "Museum of Antiquities",
        "Ancient artifacts stand in glass cases, their histories shrouded in mystery and legend.",
    ),
    place(
        "Underground Tunnels",
        "Damp stone walls glisten in the dim light. The sound of dripping water echoes endlessly.",
    ),
    place(
        "Seaside Cliff",
        "Waves crash against the rocks below. A lonely lighthouse stands guard over the turbulent sea.",
    ),
    place(
        "Clocktower",
        "Gears turn rhythmically. Each tick of the clock seems to measure something more than just time.",
    ),
];

const EXPLORATION_EVENTS: &[&str] = &[
    "You discover a hidden diary page that reveals a crucial clue about the mystery.",
    "An old photograph falls from a book, showing people who shouldn't have been together.",
    "You find a secret passage behind a moving bookcase, leading to unknown depths.",
    "A coded message is hidden in plain sight, waiting for someone clever enough to decipher it.",
];

const REST_EVENTS: &[&str] = &[
    "During your rest, you piece together clues in your mind, gaining new insights into the case.",
    "While taking a break, you notice a pattern you hadn't seen before in the evidence.",
    "A moment of quiet reflection brings sudden clarity to the mysterious events.",
];

const REGULAR_ENEMIES: &[EnemyTemplate] = &[
    enemy("Thug", 1, 30, 20, &["Brass Knuckles", "Whiskey Flask"]),
    enemy("Corrupt Guard", 1, 25, 15, &["Badge", "Handcuffs"]),
    enemy("Assassin", 2, 50, 35, &["Silenced Pistol", "Smoke Bomb"]),
    enemy("Crime Boss", 2, 45, 30, &["Ledger", "Expensive Cigar"]),
    enemy("Cultist", 3, 80, 50, &["Ritual Dagger", "Strange Symbol"]),
    enemy("Mad Scientist", 4, 100, 70, &["Experimental Serum", "Research Notes"]),
    enemy("Doppelganger", 4, 120, 65, &["Disguise Kit", "Mirror Shard"]),
    enemy("Ghost", 5, 140, 90, &["Ectoplasmic Residue", "Haunted Locket"]),
    enemy("Crime Lord", 6, 180, 130, &["Blackmail Evidence", "Safe Combination"]),
    enemy("Ancient Spirit", 6, 200, 120, &["Spirit Essence", "Ancient Talisman"]),
    enemy("Master Criminal", 7, 190, 160, &["Master Key", "Cipher Book"]),
    enemy("Reality Warper", 8, 230, 190, &["Reality Shard", "Paradox Crystal"]),
    enemy("Dimension Walker", 9, 280, 230, &["Dimensional Map", "Portal Key"]),
];

const BOSS_ENEMIES: &[EnemyTemplate] = &[
    enemy("Vampire", 5, 150, 100, &["Vampire Dust", "Ancient Ring"]),
    enemy("Time Traveler", 7, 220, 170, &["Pocket Watch", "Temporal Device"]),
    enemy("Ultimate Conspirator", 8, 250, 200, &["Conspiracy Files", "Master Plan"]),
    enemy("Fate Weaver", 9, 300, 250, &["Thread of Fate", "Destiny Crystal"]),
    enemy("Mastermind of Reality", 10, 350, 300, &["Reality Anchor", "Cosmic Blueprint"]),
    enemy("Society Mastermind", 15, 500, 500, &["Master Key", "Final Evidence"]),
];

pub(super) static CONTENT: GenreContent = GenreContent {
    genre: Genre::Mystery,
    locations: LOCATIONS,
    exploration_events: EXPLORATION_EVENTS,
    rest_events: REST_EVENTS,
    regular_enemies: REGULAR_ENEMIES,
    boss_enemies: BOSS_ENEMIES,
};
