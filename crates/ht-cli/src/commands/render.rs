use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

use ht_adventure::Snapshot;
use ht_core::{MessageKind, Reply};

const BAR_WIDTH: usize = 10;

/// Style a narrative line by its message kind.
fn paint(text: &str) -> ColoredString {
    match MessageKind::classify(text) {
        MessageKind::LevelUp => text.yellow().bold(),
        MessageKind::Combat => text.red(),
        MessageKind::Exploration => text.green(),
        MessageKind::Inventory => text.cyan(),
        MessageKind::Plain => text.normal(),
    }
}

/// Print a reply's lines followed by its numbered choices.
pub fn print_reply(reply: &Reply) {
    for line in &reply.lines {
        println!("{}\n", paint(line));
    }
    if reply.choices.is_empty() {
        return;
    }
    for (i, choice) in reply.choices.iter().enumerate() {
        println!("  {} {choice}", format!("[{}]", i + 1).dimmed());
    }
    println!();
}

/// Replace a choice number with the choice text.
pub fn resolve_choice(input: &str, choices: &[String]) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| choices.get(i))
        .cloned()
        .unwrap_or_else(|| input.to_string())
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Status table for an adventure snapshot.
pub fn hud_table(snapshot: &Snapshot) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        format!("{} ({})", snapshot.name, snapshot.genre),
        format!("Level {}", snapshot.level),
    ]);

    table.add_row(vec![
        "HP".to_string(),
        format!("{} {}/{}", bar(snapshot.hp_percent), snapshot.hp, snapshot.max_hp),
    ]);
    table.add_row(vec![
        "XP".to_string(),
        format!(
            "{} {}/{}",
            bar(snapshot.xp_percent),
            snapshot.xp,
            snapshot.xp_to_next_level
        ),
    ]);
    table.add_row(vec!["Gold".to_string(), snapshot.gold.to_string()]);
    table.add_row(vec!["Location".to_string(), snapshot.location.clone()]);
    table.add_row(vec!["Enemy".to_string(), snapshot.enemy.clone()]);

    let items = if snapshot.inventory.is_empty() {
        "empty".to_string()
    } else {
        snapshot
            .inventory
            .iter()
            .map(|row| format!("{} {} x{}", row.icon, row.name, row.count))
            .collect::<Vec<_>>()
            .join("\n")
    };
    table.add_row(vec!["Inventory".to_string(), items]);

    if snapshot.ready_for_battle {
        table.add_row(vec!["Ready".to_string(), "battle-ready".to_string()]);
    }
    if snapshot.game_over {
        table.add_row(vec!["State".to_string(), "defeated".to_string()]);
    }
    table
}
