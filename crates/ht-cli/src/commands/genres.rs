use comfy_table::{ContentArrangement, Table};

use ht_core::{Genre, GenreContent};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Genre", "Name", "Starts at", "Locations", "Enemies", "Bosses"]);

    for genre in Genre::ALL {
        let content = GenreContent::for_genre(genre);
        table.add_row(vec![
            genre.as_str().to_string(),
            genre.label().to_string(),
            content.starting_location().name.to_string(),
            content.locations.len().to_string(),
            content.regular_enemies.len().to_string(),
            content.boss_enemies.len().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
