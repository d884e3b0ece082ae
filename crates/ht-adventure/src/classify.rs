//! Keyword classification of adventure input.
//!
//! Input is lower-cased and checked against an ordered table of keyword
//! groups; the first group with any substring hit decides the action.

use std::fmt;

/// What the player is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start or continue a fight.
    Attack,
    /// Search the current location.
    Explore,
    /// Recover hit points.
    Rest,
    /// Travel to another location.
    Move,
    /// List carried items.
    Inventory,
    /// Consume an item.
    UseItem,
    /// Show the character sheet.
    Status,
    /// Disengage from the current enemy.
    Flee,
    /// Anything unrecognized.
    General,
}

/// Keyword groups in precedence order.
pub const RULES: &[(&[&str], Action)] = &[
    (&["attack", "fight", "battle"], Action::Attack),
    (&["explore", "search", "look"], Action::Explore),
    (&["rest", "sleep", "heal"], Action::Rest),
    (&["move", "go", "travel"], Action::Move),
    (&["inventory", "items", "equipment"], Action::Inventory),
    (&["use", "consume", "drink"], Action::UseItem),
    (&["level", "stats", "status"], Action::Status),
    (&["flee", "run away", "escape"], Action::Flee),
];

/// Suggestions shown when a session opens.
pub const OPENING_CHOICES: &[&str] = &[
    "Explore the area carefully",
    "Check your equipment",
    "Move forward cautiously",
];

/// Classify raw input. Never fails; unmatched or empty input is
/// [`Action::General`].
pub fn classify(input: &str) -> Action {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, action)| *action)
        .unwrap_or(Action::General)
}

impl Action {
    /// Whether the action is still available once the game is over.
    /// Only the read-only views are.
    pub fn allowed_after_defeat(&self) -> bool {
        matches!(self, Self::Inventory | Self::Status)
    }

    /// Verb used in refusal messages ("You cannot {verb} while defeated.").
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Attack => "fight",
            Self::Explore => "explore",
            Self::Rest => "rest",
            Self::Move => "travel",
            Self::Inventory => "check your inventory",
            Self::UseItem => "use items",
            Self::Status => "check your status",
            Self::Flee => "flee",
            Self::General => "act",
        }
    }

    /// Quick-choice suggestions following this action.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::Attack => &["Attack again", "Try to flee", "Use item from inventory"],
            Self::Explore => &[
                "Continue exploring",
                "Move to new area",
                "Check your surroundings",
            ],
            Self::Rest => &["Continue your journey", "Explore the area", "Check inventory"],
            Self::Move => &["Explore this area", "Continue moving", "Rest for a moment"],
            Self::Inventory => &["Continue adventure", "Explore area", "Move to new location"],
            Self::UseItem | Self::Status => {
                &["Continue adventure", "Check inventory", "Explore area"]
            }
            Self::Flee => &["Rest for a moment", "Explore the area", "Check status"],
            Self::General => &["Explore", "Move forward", "Check status", "Look for clues"],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Attack => "attack",
            Self::Explore => "explore",
            Self::Rest => "rest",
            Self::Move => "move",
            Self::Inventory => "inventory",
            Self::UseItem => "use item",
            Self::Status => "status",
            Self::Flee => "flee",
            Self::General => "general",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_matches() {
        assert_eq!(classify("ATTACK the goblin"), Action::Attack);
        assert_eq!(classify("search the room"), Action::Explore);
        assert_eq!(classify("sleep a while"), Action::Rest);
        assert_eq!(classify("travel north"), Action::Move);
        assert_eq!(classify("show equipment"), Action::Inventory);
        assert_eq!(classify("drink a potion"), Action::UseItem);
        assert_eq!(classify("stats"), Action::Status);
        assert_eq!(classify("flee!"), Action::Flee);
        assert_eq!(classify("run away"), Action::Flee);
        assert_eq!(classify("sing a song"), Action::General);
    }

    #[test]
    fn empty_input_is_general() {
        assert_eq!(classify(""), Action::General);
        assert_eq!(classify("   "), Action::General);
    }

    #[test]
    fn earliest_group_wins() {
        // Matches both attack and use.
        assert_eq!(classify("use my sword to attack"), Action::Attack);
        // Matches explore ("look") and move ("go").
        assert_eq!(classify("go look around"), Action::Explore);
    }

    #[test]
    fn substring_matching_is_greedy() {
        // "good" contains "go".
        assert_eq!(classify("good day"), Action::Move);
        // "Check inventory" hits inventory before anything else.
        assert_eq!(classify("Check inventory"), Action::Inventory);
        // "Check your equipment" opens the inventory.
        assert_eq!(classify(OPENING_CHOICES[1]), Action::Inventory);
    }

    #[test]
    fn quick_choices_route_back_into_the_classifier() {
        assert_eq!(classify("Attack again"), Action::Attack);
        assert_eq!(classify("Explore the area"), Action::Explore);
        // "exploring" and "moving" hold neither "explore" nor "move".
        assert_eq!(classify("Continue exploring"), Action::General);
        assert_eq!(classify("Continue moving"), Action::General);
        assert_eq!(classify("Rest for a moment"), Action::Rest);
        assert_eq!(classify("Check status"), Action::Status);
    }

    #[test]
    fn flee_keywords_do_not_shadow_earlier_groups() {
        // "return" must not read as running away.
        assert_eq!(classify("return home"), Action::General);
        // "Try to flee" is offered after combat and must reach flee.
        assert_eq!(classify(Action::Attack.choices()[1]), Action::Flee);
    }

    #[test]
    fn read_only_actions() {
        assert!(Action::Inventory.allowed_after_defeat());
        assert!(Action::Status.allowed_after_defeat());
        assert!(!Action::Attack.allowed_after_defeat());
        assert!(!Action::General.allowed_after_defeat());
    }

    #[test]
    fn every_action_has_choices() {
        for (_, action) in RULES {
            assert!(!action.choices().is_empty());
        }
        assert_eq!(Action::General.choices().len(), 4);
    }
}
