//! Story session management.
//!
//! `StorySession` keeps the shared transcript and the latest continuation.
//! Free text is classified and answered from the genre's templates; slash
//! commands drive the continue, summarize, reframe, inspire, and export
//! actions.

use rand::SeedableRng;
use rand::rngs::StdRng;

use ht_core::{MessageLog, RandomSource, Reply, SessionMode};

use crate::classify::{StoryInput, classify};
use crate::config::StoryConfig;
use crate::error::{StoryError, StoryResult};
use crate::export::{ExportFormat, StoryDocument};
use crate::templates;

/// Transcript lines quoted in a summary.
pub const SUMMARY_WINDOW: usize = 8;

/// An interactive collaborative story.
pub struct StorySession<R = StdRng> {
    config: StoryConfig,
    log: MessageLog,
    current_scene: Option<String>,
    rng: R,
}

impl StorySession<StdRng> {
    /// Create a session with a seeded (or OS-seeded) `StdRng`.
    pub fn new(config: StoryConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> StorySession<R> {
    /// Create a session drawing from the given random source.
    pub fn with_rng(config: StoryConfig, rng: R) -> Self {
        let mut log = MessageLog::new();
        log.narrator(templates::opening(&config.player_name, config.genre));
        tracing::info!(player = %config.player_name, genre = %config.genre, "story started");
        Self {
            config,
            log,
            current_scene: None,
            rng,
        }
    }

    /// The configuration this session was started with.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// The message log.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The latest continuation, if any.
    pub fn current_scene(&self) -> Option<&str> {
        self.current_scene.as_deref()
    }

    /// The opening scene.
    pub fn opening(&self) -> Reply {
        Reply::line(templates::opening(
            &self.config.player_name,
            self.config.genre,
        ))
    }

    /// Link that starts a fresh story with the same name and genre.
    pub fn new_session_link(&self) -> String {
        self.config.launch_params().setup_link(SessionMode::Story)
    }

    /// Process a line of input: a slash command or a story contribution.
    pub fn process(&mut self, input: &str) -> StoryResult<Reply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Reply::default());
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return Ok(self.respond(trimmed));
        };

        let parts: Vec<&str> = command.splitn(2, ' ').collect();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");
        match parts[0].to_lowercase().as_str() {
            "continue" => Ok(self.continue_story()),
            "summarize" | "summary" => Ok(self.summarize()),
            "reframe" => Ok(self.reframe()),
            "inspire" => Ok(self.inspire()),
            "export" => Ok(Reply::line(self.export(rest.parse()?)?)),
            other => Err(StoryError::UnknownCommand(format!("/{other}"))),
        }
    }

    /// Answer a free-text contribution.
    pub fn respond(&mut self, input: &str) -> Reply {
        self.log.player(input);
        let genre = self.config.genre;
        let kind = classify(input);
        tracing::debug!(?kind, "story input");
        let text = match kind {
            StoryInput::Description => templates::description(genre).to_string(),
            StoryInput::Question => templates::reflection(genre).to_string(),
            StoryInput::Brief => self
                .rng
                .pick(templates::BRIEF_PROMPTS)
                .map(|p| p.to_string())
                .unwrap_or_default(),
            StoryInput::Detailed => templates::elaboration(genre).to_string(),
        };
        self.narrate(text)
    }

    /// Advance the story and remember the passage as the current scene.
    pub fn continue_story(&mut self) -> Reply {
        let text = templates::continuation(self.config.genre).to_string();
        self.current_scene = Some(text.clone());
        self.narrate(text)
    }

    /// Recap the most recent transcript lines.
    pub fn summarize(&mut self) -> Reply {
        let transcript = self.log.transcript();
        if transcript.is_empty() {
            return self.narrate(templates::BLANK_CANVAS.to_string());
        }
        let mut text = format!("{}\n\n", templates::SUMMARY_HEADER);
        for line in self.log.recent(SUMMARY_WINDOW) {
            text.push_str(&format!("• {line}\n"));
        }
        text.push('\n');
        text.push_str(templates::SUMMARY_FOOTER);
        self.narrate(text)
    }

    /// Suggest a shift in perspective.
    pub fn reframe(&mut self) -> Reply {
        let text = self
            .rng
            .pick(templates::PERSPECTIVES)
            .map(|p| p.to_string())
            .unwrap_or_default();
        self.narrate(text)
    }

    /// Offer a genre-flavored idea.
    pub fn inspire(&mut self) -> Reply {
        let idea = self
            .rng
            .pick(templates::inspirations(self.config.genre))
            .copied()
            .unwrap_or_default();
        self.narrate(templates::inspiration_message(idea))
    }

    /// Render the story so far. Does not add to the transcript.
    pub fn export(&self, format: ExportFormat) -> StoryResult<String> {
        StoryDocument {
            player_name: &self.config.player_name,
            genre: self.config.genre,
            current_scene: self.current_scene.as_deref(),
            transcript: self.log.transcript(),
        }
        .render(format)
    }

    fn narrate(&mut self, text: String) -> Reply {
        self.log.narrator(text.as_str());
        Reply::line(text)
    }
}
