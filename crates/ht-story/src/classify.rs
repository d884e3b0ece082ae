//! Classification of free-text story contributions.

/// Inputs shorter than this many UTF-16 code units count as brief.
pub const BRIEF_LIMIT: usize = 15;

const DESCRIPTION_KEYWORDS: &[&str] = &["more about", "tell me about", "describe", "explain"];
const QUESTION_KEYWORDS: &[&str] = &["how", "why", "what if"];

/// The kind of contribution a line of input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryInput {
    /// Asks for more detail about the world.
    Description,
    /// Asks a question.
    Question,
    /// A short fragment.
    Brief,
    /// A longer contribution.
    Detailed,
}

/// Classify one line of input.
///
/// Keyword groups are matched as lower-case substrings and take
/// precedence over length. Length is measured in UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
pub fn classify(input: &str) -> StoryInput {
    let lower = input.to_lowercase();
    if DESCRIPTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        StoryInput::Description
    } else if QUESTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        StoryInput::Question
    } else if input.encode_utf16().count() < BRIEF_LIMIT {
        StoryInput::Brief
    } else {
        StoryInput::Detailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_groups_win_over_length() {
        assert_eq!(classify("describe it"), StoryInput::Description);
        assert_eq!(classify("Tell me about the king"), StoryInput::Description);
        assert_eq!(classify("why?"), StoryInput::Question);
        // Both groups: description is checked first.
        assert_eq!(classify("how would you describe her"), StoryInput::Description);
    }

    #[test]
    fn length_split() {
        assert_eq!(classify("a red door"), StoryInput::Brief);
        assert_eq!(classify("fourteen chars"), StoryInput::Brief);
        assert_eq!(classify("fifteen chars!!"), StoryInput::Detailed);
        assert_eq!(
            classify("My character is a retired cartographer."),
            StoryInput::Detailed
        );
    }

    #[test]
    fn length_counts_utf16_units() {
        // Seven dragons are 14 units, eight are 16.
        assert_eq!(classify(&"🐉".repeat(7)), StoryInput::Brief);
        assert_eq!(classify(&"🐉".repeat(8)), StoryInput::Detailed);
        // Accented letters stay one unit each.
        assert_eq!(classify("café au lait xy"), StoryInput::Detailed);
        assert_eq!(classify("café au lait x"), StoryInput::Brief);
    }

    #[test]
    fn substring_question_match() {
        // "show" contains "how".
        assert_eq!(classify("show me the long corridor"), StoryInput::Question);
    }
}
