//! Inventory display and item use.

use strsim::jaro_winkler;

use crate::state::AdventureState;

/// Minimum similarity for a "did you mean" suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Icon for items without an entry in the table.
pub const DEFAULT_ICON: &str = "📦";

const ICONS: &[(&str, &str)] = &[
    ("Health Potion", "❤️"),
    ("Greater Health Potion", "💖"),
    ("Mana Potion", "🔮"),
    ("Torch", "🔦"),
    ("Water Flask", "💧"),
    ("Rations", "🍖"),
    ("Rope", "🪢"),
    ("Magic Sword", "⚔️"),
    ("Leather Armor", "🛡️"),
    ("Rusty Dagger", "🔪"),
    ("Iron Sword", "🗡️"),
    ("Spell Scroll", "📜"),
    ("Dragon Scale", "🐉"),
    ("Ancient Artifact", "💎"),
    ("Ancient Scroll", "📜"),
    ("Crystal Shard", "💎"),
    ("Enchanted Amulet", "✨"),
    ("Excalibur", "⚔️"),
    ("Phoenix Feather", "🔥"),
    ("Dragon Heart", "🐉"),
    ("Crown of Kings", "👑"),
    ("Troll Hide", "🛡️"),
    ("Bone Dust", "💀"),
    ("Ancient Coin", "💰"),
    ("Energy Cell", "🔋"),
    ("Laser Pistol", "🔫"),
    ("Medkit", "💊"),
    ("Data Chip", "💿"),
    ("Plasma Rifle", "🔫"),
    ("Quantum Processor", "🧠"),
    ("Brass Knuckles", "👊"),
    ("Silenced Pistol", "🔫"),
    ("Ritual Dagger", "🔪"),
    ("Research Notes", "📄"),
    ("Haunted Locket", "📿"),
];

/// Display icon for an item name.
pub fn icon_for(item: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Group a multiset into `(name, count)` pairs, ordered by first
/// occurrence.
pub fn group_inventory(items: &[String]) -> Vec<(String, usize)> {
    let mut grouped: Vec<(String, usize)> = Vec::new();
    for item in items {
        match grouped.iter_mut().find(|(name, _)| name == item) {
            Some((_, count)) => *count += 1,
            None => grouped.push((item.clone(), 1)),
        }
    }
    grouped
}

/// The inventory reply.
pub fn describe_inventory(state: &AdventureState) -> String {
    if state.inventory.is_empty() {
        return "Your inventory is empty. Explore areas to find useful items!".to_string();
    }
    let mut text = String::from("You check your inventory:\n\n");
    for (item, count) in group_inventory(&state.inventory) {
        text.push_str(&format!("{} {item} x{count}\n", icon_for(&item)));
    }
    if state.gold > 0 {
        text.push_str(&format!("\n💰 Gold: {} coins", state.gold));
    }
    text
}

/// A consumable with a hardcoded effect.
struct Consumable {
    name: &'static str,
    /// `(base, per_level)` healing, or `None` for flavor-only items.
    heal: Option<(i64, i64)>,
    verb: &'static str,
}

/// Checked in order; "greater health potion" must precede "health potion".
const CONSUMABLES: &[Consumable] = &[
    Consumable {
        name: "Greater Health Potion",
        heal: Some((60, 8)),
        verb: "drink",
    },
    Consumable {
        name: "Health Potion",
        heal: Some((30, 5)),
        verb: "drink",
    },
    Consumable {
        name: "Mana Potion",
        heal: None,
        verb: "drink",
    },
    Consumable {
        name: "Medkit",
        heal: Some((40, 6)),
        verb: "use",
    },
];

/// Use the item named in free-text input. Each use consumes exactly one
/// unit.
pub fn use_item(state: &mut AdventureState, input: &str) -> String {
    let lower = input.to_lowercase();

    for item in CONSUMABLES {
        if !lower.contains(&item.name.to_lowercase()) || !state.remove_one(item.name) {
            continue;
        }
        return match item.heal {
            Some((base, per_level)) => {
                let healed = state.heal(base + per_level * i64::from(state.level));
                format!(
                    "You {} a {} and recover {healed} HP. Current HP: {}/{}",
                    item.verb, item.name, state.hp, state.max_hp
                )
            }
            None => "You drink a Mana Potion. Magical energy courses through your veins, \
                     enhancing your abilities temporarily."
                .to_string(),
        };
    }

    let mentioned = state
        .inventory
        .iter()
        .find(|item| lower.contains(&item.to_lowercase()))
        .cloned();
    if let Some(item) = mentioned {
        state.remove_one(&item);
        tracing::debug!(item = %item, "generic item used");
        return format!("You use the {item}. It serves its purpose well.");
    }

    let mut text = "You need to specify which item to use.".to_string();
    if let Some(guess) = suggest_item(state, &lower) {
        text.push_str(&format!(" Did you mean {guess}?"));
    }
    text
}

/// Closest carried item to the object of a "use" phrase.
fn suggest_item(state: &AdventureState, lower: &str) -> Option<String> {
    let object = lower
        .split_whitespace()
        .filter(|w| !matches!(*w, "use" | "consume" | "drink" | "the" | "a" | "an" | "my"))
        .collect::<Vec<_>>()
        .join(" ");
    if object.is_empty() {
        return None;
    }

    let mut scored: Vec<(&String, f64)> = state
        .inventory
        .iter()
        .map(|item| (item, jaro_winkler(&object, &item.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.first().map(|(item, _)| (*item).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ht_core::Genre;

    fn state() -> AdventureState {
        AdventureState::new("T", Genre::Fantasy)
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let items: Vec<String> = ["Torch", "Torch", "Water Flask"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            group_inventory(&items),
            vec![("Torch".to_string(), 2), ("Water Flask".to_string(), 1)]
        );
    }

    #[test]
    fn inventory_listing() {
        let mut s = state();
        s.gold = 12;
        assert_eq!(
            describe_inventory(&s),
            "You check your inventory:\n\n🔦 Torch x1\n💧 Water Flask x1\n\n💰 Gold: 12 coins"
        );
        s.inventory.clear();
        assert_eq!(
            describe_inventory(&s),
            "Your inventory is empty. Explore areas to find useful items!"
        );
    }

    #[test]
    fn unknown_items_get_default_icon() {
        assert_eq!(icon_for("Coin Pouch"), DEFAULT_ICON);
        assert_eq!(icon_for("Medkit"), "💊");
    }

    #[test]
    fn health_potion_heals_and_removes_one() {
        let mut s = state();
        s.hp = 40;
        s.add_item("Health Potion");
        s.add_item("Health Potion");
        let text = use_item(&mut s, "drink health potion");
        assert_eq!(text, "You drink a Health Potion and recover 35 HP. Current HP: 75/100");
        assert_eq!(s.hp, 75);
        assert_eq!(
            s.inventory.iter().filter(|i| *i == "Health Potion").count(),
            1
        );
    }

    #[test]
    fn heal_is_capped() {
        let mut s = state();
        s.hp = 90;
        s.add_item("Medkit");
        let text = use_item(&mut s, "use medkit");
        assert_eq!(text, "You use a Medkit and recover 10 HP. Current HP: 100/100");
    }

    #[test]
    fn greater_potion_is_not_mistaken_for_plain() {
        let mut s = state();
        s.hp = 1;
        s.add_item("Health Potion");
        s.add_item("Greater Health Potion");
        let text = use_item(&mut s, "drink the greater health potion");
        assert!(text.starts_with("You drink a Greater Health Potion and recover 68 HP."));
        assert!(s.has_item("Health Potion"));
        assert!(!s.has_item("Greater Health Potion"));
    }

    #[test]
    fn absent_potion_leaves_state_alone() {
        let mut s = state();
        s.hp = 40;
        let before = s.inventory.clone();
        let text = use_item(&mut s, "drink health potion");
        assert!(text.starts_with("You need to specify which item to use."));
        assert_eq!(s.hp, 40);
        assert_eq!(s.inventory, before);
    }

    #[test]
    fn mana_potion_is_flavor_only() {
        let mut s = state();
        s.hp = 10;
        s.add_item("Mana Potion");
        let text = use_item(&mut s, "drink mana potion");
        assert!(text.starts_with("You drink a Mana Potion."));
        assert_eq!(s.hp, 10);
        assert!(!s.has_item("Mana Potion"));
    }

    #[test]
    fn generic_item_by_substring() {
        let mut s = state();
        let text = use_item(&mut s, "use the torch");
        assert_eq!(text, "You use the Torch. It serves its purpose well.");
        assert!(!s.has_item("Torch"));
    }

    #[test]
    fn near_miss_gets_suggestion() {
        let mut s = state();
        let text = use_item(&mut s, "use torhc");
        assert_eq!(
            text,
            "You need to specify which item to use. Did you mean Torch?"
        );
        assert_eq!(s.inventory.len(), 2);
    }

    #[test]
    fn bare_use_has_no_suggestion() {
        let mut s = state();
        assert_eq!(use_item(&mut s, "use"), "You need to specify which item to use.");
    }
}
