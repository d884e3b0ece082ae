pub mod adventure;
pub mod genres;
pub mod launch;
pub mod render;
pub mod story;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use ht_core::{Genre, TranscriptLine};

/// Parse a genre name strictly.
pub fn parse_genre(name: &str) -> Result<Genre, String> {
    name.parse::<Genre>().map_err(|e| e.to_string())
}

/// Print the prompt (unless quiet) and read one line. Returns `None` at EOF.
fn read_input(
    reader: &mut impl BufRead,
    line: &mut String,
    quiet: bool,
) -> Result<Option<String>, String> {
    if !quiet {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
    }
    line.clear();
    match reader.read_line(line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

/// Write `You: ...` / `AI: ...` lines to a file.
fn save_transcript(path: &Path, transcript: &[TranscriptLine]) -> Result<(), String> {
    let text: String = transcript.iter().map(|line| format!("{line}\n")).collect();
    write_file(path, &text)
}

fn write_file(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    eprintln!("  Wrote {}", path.display());
    Ok(())
}
