//! Story transcript export.

use std::str::FromStr;

use serde::Serialize;

use ht_core::{Genre, Sender, TranscriptLine};

use crate::error::StoryError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown document.
    Markdown,
    /// Plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for ExportFormat {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(StoryError::UnknownExportFormat(other.to_string())),
        }
    }
}

/// Everything an export carries.
#[derive(Debug, Serialize)]
pub struct StoryDocument<'a> {
    /// Storyteller display name.
    pub player_name: &'a str,
    /// Story genre.
    pub genre: Genre,
    /// The latest continuation, if any.
    pub current_scene: Option<&'a str>,
    /// Every line in order.
    pub transcript: &'a [TranscriptLine],
}

impl StoryDocument<'_> {
    /// Render as markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "# {}'s {} Story\n\n",
            self.player_name,
            self.genre.label()
        );
        for line in self.transcript {
            match line.sender {
                Sender::Player => out.push_str(&format!("> **You**: {}\n\n", line.text)),
                Sender::Narrator => out.push_str(&format!("{}\n\n", line.text)),
            }
        }
        if let Some(scene) = self.current_scene {
            out.push_str(&format!("## Current Scene\n\n{scene}\n"));
        }
        out
    }

    /// Render as plain text, one tagged line per entry.
    pub fn to_text(&self) -> String {
        let title = format!("{}'s {} Story", self.player_name, self.genre.label());
        let mut out = format!("{title}\n{}\n\n", "=".repeat(title.chars().count()));
        for line in self.transcript {
            out.push_str(&format!("{line}\n\n"));
        }
        out
    }

    /// Render as pretty JSON.
    pub fn to_json(&self) -> Result<String, StoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the given format.
    pub fn render(&self, format: ExportFormat) -> Result<String, StoryError> {
        match format {
            ExportFormat::Markdown => Ok(self.to_markdown()),
            ExportFormat::Text => Ok(self.to_text()),
            ExportFormat::Json => self.to_json(),
        }
    }
}
