use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of sentences.
///
/// Implementations must be safe for concurrent read access; the engine holds
/// one behind a shared reference and never mutates it after construction.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Sentence splitter backed by the UAX#29 sentence boundary rules from
/// `unicode-segmentation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Words that end with a period without terminating a sentence.
const ABBREVIATIONS: [&str; 20] = [
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "vs.", "etc.", "i.e.", "e.g.", "Inc.",
    "Ltd.", "Corp.", "Co.", "No.", "Vol.", "Ch.", "Fig.", "Eq.",
];

/// Regex-based fallback splitter: breaks after `.`, `!` or `?` followed by
/// whitespace and an uppercase letter, unless the terminator belongs to a
/// known abbreviation.
#[derive(Debug, Clone)]
pub struct RegexSentenceSplitter {
    terminator: Regex,
}

impl RegexSentenceSplitter {
    pub fn new() -> Self {
        Self {
            terminator: Regex::new(r"[.!?]\s+").unwrap(),
        }
    }
}

impl Default for RegexSentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter for RegexSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut last = 0usize;

        for m in self.terminator.find_iter(text) {
            let follows_uppercase = text[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase());
            if !follows_uppercase {
                continue;
            }
            // The terminator itself is a single ASCII byte.
            let candidate = &text[last..m.start() + 1];
            if ends_with_abbreviation(candidate) {
                continue;
            }
            let trimmed = candidate.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            last = m.end();
        }

        let tail = text[last..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}

fn ends_with_abbreviation(candidate: &str) -> bool {
    candidate
        .split_whitespace()
        .next_back()
        .is_some_and(|word| ABBREVIATIONS.contains(&word))
}
