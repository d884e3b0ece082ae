use std::io;
use std::path::PathBuf;

use colored::Colorize;
use serde_json::json;

use ht_adventure::{Activity, AdventureConfig, AdventureResult, AdventureSession};
use ht_core::Reply;

use super::render::{hud_table, print_reply, resolve_choice};
use super::{read_input, save_transcript};

const HELP: &str = "\
Adventure Commands:
  attack, explore, rest, move, inventory, use <item>, status, flee
  hunt | practice | job   Side activities that build experience
  hud                     Show the status table
  snapshot                Print the status as JSON
  new                     Start over with the same name and genre
  quit                    Leave the adventure

Type a choice number to pick a suggestion.";

/// Rendering options for an adventure run.
#[derive(Debug, Default)]
pub struct AdventureOptions {
    pub hud: bool,
    pub json: bool,
    pub transcript: Option<PathBuf>,
}

pub fn run(config: AdventureConfig, options: &AdventureOptions) -> Result<(), String> {
    let mut session = AdventureSession::new(config.clone());

    if !options.json {
        println!(
            "  {} {} adventure for {}",
            "Starting".bold(),
            config.genre.label(),
            config.player_name
        );
        if let Some(seed) = config.seed {
            println!("  Seed: {seed}");
        }
        println!("  Type 'help' for commands, 'quit' to exit.\n");
    }

    let mut choices = show(&session, Ok(session.opening()), options)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while let Some(raw) = read_input(&mut reader, &mut line, options.json)? {
        if raw.is_empty() {
            continue;
        }
        let input = resolve_choice(&raw, &choices);

        match input.to_lowercase().as_str() {
            "quit" | "q" => {
                if !options.json {
                    println!("Farewell, {}!", session.state().player_name);
                }
                break;
            }
            "help" => {
                if options.json {
                    println!("{}", json!({ "help": HELP }));
                } else {
                    println!("{HELP}\n");
                }
                continue;
            }
            "hud" | "snapshot" if options.json => {
                println!("{}", json!({ "snapshot": session.snapshot() }));
                continue;
            }
            "hud" => {
                println!("{}\n", hud_table(&session.snapshot()));
                continue;
            }
            "snapshot" => {
                let text = serde_json::to_string_pretty(&session.snapshot())
                    .map_err(|e| e.to_string())?;
                println!("{text}");
                continue;
            }
            "new" => {
                if !options.json {
                    println!("  New adventure: {}\n", session.new_session_link());
                }
                session = AdventureSession::new(config.clone());
                choices = show(&session, Ok(session.opening()), options)?;
                continue;
            }
            _ => {}
        }

        let result = match input.parse::<Activity>() {
            Ok(activity) => session.perform(activity),
            Err(()) => session.process(&input),
        };
        let next = show(&session, result, options)?;
        if !next.is_empty() {
            choices = next;
        }
    }

    if let Some(path) = &options.transcript {
        save_transcript(path, session.log().transcript())?;
    }
    Ok(())
}

/// Print one reply (or refusal) and return its choices.
fn show(
    session: &AdventureSession,
    result: AdventureResult<Reply>,
    options: &AdventureOptions,
) -> Result<Vec<String>, String> {
    if options.json {
        let value = match &result {
            Ok(reply) => json!({ "reply": reply, "snapshot": session.snapshot() }),
            Err(e) => json!({ "error": e.to_string(), "snapshot": session.snapshot() }),
        };
        println!("{value}");
        return Ok(result.map(|r| r.choices).unwrap_or_default());
    }

    match result {
        Ok(reply) => {
            print_reply(&reply);
            if options.hud {
                println!("{}\n", hud_table(&session.snapshot()));
            }
            Ok(reply.choices)
        }
        Err(e) => {
            println!("{}\n", e.to_string().yellow());
            Ok(Vec::new())
        }
    }
}
