use std::io;
use std::path::Path;

use colored::Colorize;

use ht_story::{ExportFormat, StoryConfig, StorySession};

use super::render::print_reply;
use super::{read_input, write_file};

const HELP: &str = "\
Story Commands:
  <text>              Add to the story
  /continue           Let the narrator move the story forward
  /summarize          Recap the latest lines
  /reframe            Suggest a new perspective
  /inspire            Offer an idea to build on
  /export [format]    Print the story (markdown, text, json)
  /new                Start over with the same name and genre
  quit                Leave the story";

pub fn run(config: StoryConfig, transcript: Option<&Path>) -> Result<(), String> {
    let mut session = StorySession::new(config.clone());

    println!(
        "  {} {} story for {}",
        "Starting".bold(),
        config.genre.label(),
        config.player_name
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    print_reply(&session.opening());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while let Some(input) = read_input(&mut reader, &mut line, false)? {
        if input.is_empty() {
            continue;
        }
        match input.to_lowercase().as_str() {
            "quit" | "q" => {
                println!("Until the next chapter, {}.", config.player_name);
                break;
            }
            "help" => {
                println!("{HELP}\n");
                continue;
            }
            "/new" => {
                println!("  New story: {}\n", session.new_session_link());
                session = StorySession::new(config.clone());
                print_reply(&session.opening());
                continue;
            }
            _ => {}
        }

        match session.process(&input) {
            Ok(reply) => print_reply(&reply),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if let Some(path) = transcript {
        let format = format_for(path);
        let document = session.export(format).map_err(|e| e.to_string())?;
        write_file(path, &document)?;
    }
    Ok(())
}

/// Pick an export format from a file extension.
fn format_for(path: &Path) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") | Some("markdown") => ExportFormat::Markdown,
        Some("json") => ExportFormat::Json,
        _ => ExportFormat::Text,
    }
}
