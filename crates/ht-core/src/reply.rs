//! Engine replies.

use serde::{Deserialize, Serialize};

/// What a session hands back for one player action: narrative lines in
/// display order and the quick-choice suggestions to offer next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Narrative lines, each one chat message.
    pub lines: Vec<String>,
    /// Suggested follow-up inputs.
    pub choices: Vec<String>,
}

impl Reply {
    /// A reply with the given lines and no suggestions.
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            choices: Vec::new(),
        }
    }

    /// A single-line reply.
    pub fn line(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    /// Attach quick-choice suggestions.
    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = choices.iter().map(|c| c.to_string()).collect();
        self
    }

    /// All lines joined by blank lines.
    pub fn text(&self) -> String {
        self.lines.join("\n\n")
    }

    /// Whether the reply carries any text.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let reply = Reply::line("Hello").with_choices(&["Explore", "Rest"]);
        assert_eq!(reply.lines, vec!["Hello"]);
        assert_eq!(reply.choices, vec!["Explore", "Rest"]);
        assert!(!reply.is_empty());
    }

    #[test]
    fn text_joins_lines() {
        let reply = Reply::new(vec!["a".into(), "b".into()]);
        assert_eq!(reply.text(), "a\n\nb");
        assert!(Reply::default().is_empty());
    }
}
