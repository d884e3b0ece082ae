//! Chat-style message log and transcript.
//!
//! The visible log keeps the most recent [`MESSAGE_LOG_CAPACITY`] messages;
//! older ones are trimmed from the front. Every message is also appended to
//! an unbounded transcript of `You: ...` / `AI: ...` lines that summaries
//! and exports read from.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of messages kept in the visible log.
pub const MESSAGE_LOG_CAPACITY: usize = 50;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Text typed by the player.
    Player,
    /// Text produced by the engine.
    Narrator,
}

impl Sender {
    /// Transcript tag for this sender.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Player => "You",
            Self::Narrator => "AI",
        }
    }
}

/// Display category of a message, used by front ends for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// A level-up announcement.
    LevelUp,
    /// Attacks, damage, and defeats.
    Combat,
    /// Exploring and discoveries.
    Exploration,
    /// Inventory listings.
    Inventory,
    /// Anything else.
    Plain,
}

impl MessageKind {
    /// Categorize a message by its text. First matching rule wins.
    pub fn classify(text: &str) -> Self {
        if text.contains("LEVEL UP") || text.contains('🎉') {
            return Self::LevelUp;
        }
        let lower = text.to_lowercase();
        if ["attack", "damage", "defeat"].iter().any(|k| lower.contains(k)) {
            Self::Combat
        } else if ["explore", "discover", "find"].iter().any(|k| lower.contains(k)) {
            Self::Exploration
        } else if lower.contains("inventory") || text.contains('🔦') || text.contains("❤️") {
            Self::Inventory
        } else {
            Self::Plain
        }
    }
}

/// A single logged message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Who produced it.
    pub sender: Sender,
    /// The message text.
    pub text: String,
    /// Display category.
    pub kind: MessageKind,
    /// When it was logged.
    pub timestamp: DateTime<Utc>,
}

/// One line of the append-only transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Who produced it.
    pub sender: Sender,
    /// The line text, untagged.
    pub text: String,
    /// When it was recorded.
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender.tag(), self.text)
    }
}

/// Capped visible log plus unbounded transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLog {
    visible: VecDeque<Message>,
    transcript: Vec<TranscriptLine>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(MESSAGE_LOG_CAPACITY)
    }
}

impl MessageLog {
    /// Create an empty log with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log keeping at most `capacity` visible messages
    /// (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            transcript: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a message, trimming the oldest visible one past capacity.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        let text = text.into();
        let timestamp = Utc::now();
        self.transcript.push(TranscriptLine {
            sender,
            text: text.clone(),
            timestamp,
        });
        self.visible.push_back(Message {
            sender,
            kind: MessageKind::classify(&text),
            text,
            timestamp,
        });
        while self.visible.len() > self.capacity {
            self.visible.pop_front();
        }
        &self.visible[self.visible.len() - 1]
    }

    /// Append a player message.
    pub fn player(&mut self, text: impl Into<String>) -> &Message {
        self.push(Sender::Player, text)
    }

    /// Append a narrator message.
    pub fn narrator(&mut self, text: impl Into<String>) -> &Message {
        self.push(Sender::Narrator, text)
    }

    /// Visible messages, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Message> {
        self.visible.iter()
    }

    /// Number of visible messages.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// The full transcript, oldest first.
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    /// The last `n` transcript lines.
    pub fn recent(&self, n: usize) -> &[TranscriptLine] {
        let start = self.transcript.len().saturating_sub(n);
        &self.transcript[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_kinds() {
        assert_eq!(
            MessageKind::classify("🎉 LEVEL UP! You are now Level 2!"),
            MessageKind::LevelUp
        );
        assert_eq!(
            MessageKind::classify("You attack the Goblin dealing 12 damage!"),
            MessageKind::Combat
        );
        assert_eq!(
            MessageKind::classify("You discover ancient runes."),
            MessageKind::Exploration
        );
        assert_eq!(
            MessageKind::classify("You check your inventory:"),
            MessageKind::Inventory
        );
        assert_eq!(MessageKind::classify("Hello there."), MessageKind::Plain);
    }

    #[test]
    fn combat_wins_over_exploration() {
        // "defeat" and "find" both match; combat is checked first.
        assert_eq!(
            MessageKind::classify("You defeat the Orc and find 10 gold."),
            MessageKind::Combat
        );
    }

    #[test]
    fn transcript_tags() {
        let mut log = MessageLog::new();
        log.player("look around");
        log.narrator("You see trees.");
        let lines: Vec<String> = log.transcript().iter().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["You: look around", "AI: You see trees."]);
    }

    #[test]
    fn visible_log_is_capped() {
        let mut log = MessageLog::new();
        for i in 0..60 {
            log.narrator(format!("line {i}"));
        }
        assert_eq!(log.len(), MESSAGE_LOG_CAPACITY);
        assert_eq!(log.visible().next().unwrap().text, "line 10");
        assert_eq!(log.transcript().len(), 60);
    }

    #[test]
    fn recent_lines() {
        let mut log = MessageLog::with_capacity(2);
        log.player("a");
        log.player("b");
        log.player("c");
        let recent: Vec<&str> = log.recent(2).iter().map(|l| l.text.as_str()).collect();
        assert_eq!(recent, vec!["b", "c"]);
        assert_eq!(log.recent(10).len(), 3);
    }

    #[test]
    fn empty_log() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.recent(8).is_empty());
    }
}
