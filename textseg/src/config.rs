use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentationError};

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: FromStr>(var: &str) -> Option<T>
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

/// Unit a segmentation run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMethod {
    Character,
    Word,
    Sentence,
    Paragraph,
    Token,
}

impl SegmentationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentationMethod::Character => "character",
            SegmentationMethod::Word => "word",
            SegmentationMethod::Sentence => "sentence",
            SegmentationMethod::Paragraph => "paragraph",
            SegmentationMethod::Token => "token",
        }
    }
}

impl fmt::Display for SegmentationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentationMethod {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "character" => Ok(SegmentationMethod::Character),
            "word" => Ok(SegmentationMethod::Word),
            "sentence" => Ok(SegmentationMethod::Sentence),
            "paragraph" => Ok(SegmentationMethod::Paragraph),
            "token" => Ok(SegmentationMethod::Token),
            other => Err(SegmentationError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Immutable segmentation configuration, passed into every `segment` call.
///
/// `target_size` and `overlap` are interpreted in the unit of `method`:
/// characters, words, cumulative sentence/paragraph length, or tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationPolicy {
    pub method: SegmentationMethod,
    pub target_size: usize,
    pub overlap: usize,
    /// Alternative to `overlap`: fraction of `target_size` (0.0..1.0).
    /// Takes precedence over `overlap` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_percentage: Option<f64>,
    /// Prefer ending Character/Token chunks at a sentence terminator found
    /// in the trailing region of the chunk.
    pub preserve_sentence_boundaries: bool,
    /// Keep paragraphs whole and group several into one chunk instead of
    /// treating each as an independent unit.
    pub preserve_paragraph_grouping: bool,
    /// Chunks whose trimmed character length falls below this are dropped.
    pub min_chunk_length: usize,
    /// Drop chunks that are empty or whitespace-only.
    pub skip_empty: bool,
}

impl Default for SegmentationPolicy {
    fn default() -> Self {
        Self {
            method: SegmentationMethod::Paragraph,
            target_size: 1000,
            overlap: 100,
            overlap_percentage: None,
            preserve_sentence_boundaries: true,
            preserve_paragraph_grouping: false,
            min_chunk_length: 10,
            skip_empty: true,
        }
    }
}

impl SegmentationPolicy {
    /// Build a policy from environment variables, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let method = match env::var("CHUNK_METHOD") {
            Ok(val) => match val.parse() {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(
                        "Invalid value '{}' for CHUNK_METHOD: {}. Using default.",
                        val,
                        e
                    );
                    defaults.method
                }
            },
            Err(_) => defaults.method,
        };
        Self {
            method,
            target_size: parse_env_or("CHUNK_SIZE", defaults.target_size),
            overlap: parse_env_or("CHUNK_OVERLAP", defaults.overlap),
            overlap_percentage: parse_env_opt("CHUNK_OVERLAP_PERCENTAGE"),
            preserve_sentence_boundaries: parse_env_or(
                "PRESERVE_SENTENCES",
                defaults.preserve_sentence_boundaries,
            ),
            preserve_paragraph_grouping: parse_env_or(
                "PRESERVE_PARAGRAPHS",
                defaults.preserve_paragraph_grouping,
            ),
            min_chunk_length: parse_env_or("MIN_CHUNK_LENGTH", defaults.min_chunk_length),
            skip_empty: parse_env_or("SKIP_EMPTY_CHUNKS", defaults.skip_empty),
        }
    }

    /// Policy tuned for article-style prose: whole paragraphs grouped into
    /// chunks.
    pub fn for_articles() -> Self {
        Self {
            method: SegmentationMethod::Paragraph,
            preserve_paragraph_grouping: true,
            ..Self::default()
        }
    }

    /// Policy tuned for LLM context windows: token-bounded chunks that end
    /// on sentence boundaries where possible.
    pub fn for_llm(max_tokens: usize) -> Self {
        Self {
            method: SegmentationMethod::Token,
            target_size: max_tokens,
            overlap: max_tokens / 10,
            preserve_sentence_boundaries: true,
            ..Self::default()
        }
    }

    /// Overlap actually applied during segmentation: the configured fraction
    /// of `target_size` when `overlap_percentage` is set, `overlap` otherwise.
    pub fn effective_overlap(&self) -> usize {
        match self.overlap_percentage {
            Some(pct) => (self.target_size as f64 * pct) as usize,
            None => self.overlap,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(SegmentationError::InvalidInput(
                "target_size must be positive".to_string(),
            ));
        }
        if let Some(pct) = self.overlap_percentage {
            if !(0.0..1.0).contains(&pct) {
                return Err(SegmentationError::InvalidInput(format!(
                    "overlap_percentage must be within [0.0, 1.0), got {pct}"
                )));
            }
        }
        if self.effective_overlap() >= self.target_size {
            return Err(SegmentationError::InvalidInput(format!(
                "overlap ({}) must be less than target_size ({})",
                self.effective_overlap(),
                self.target_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_policy_defaults() {
        let policy = SegmentationPolicy::default();
        assert_eq!(policy.method, SegmentationMethod::Paragraph);
        assert_eq!(policy.target_size, 1000);
        assert_eq!(policy.overlap, 100);
        assert!(policy.preserve_sentence_boundaries);
        assert!(!policy.preserve_paragraph_grouping);
        assert_eq!(policy.min_chunk_length, 10);
        assert!(policy.skip_empty);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(
            "token".parse::<SegmentationMethod>().unwrap(),
            SegmentationMethod::Token
        );
        assert_eq!(
            " Sentence ".parse::<SegmentationMethod>().unwrap(),
            SegmentationMethod::Sentence
        );
        let err = "syllable".parse::<SegmentationMethod>().unwrap_err();
        assert!(matches!(err, SegmentationError::UnsupportedMethod(_)));
    }

    #[test]
    fn test_method_display_round_trip() {
        for method in [
            SegmentationMethod::Character,
            SegmentationMethod::Word,
            SegmentationMethod::Sentence,
            SegmentationMethod::Paragraph,
            SegmentationMethod::Token,
        ] {
            assert_eq!(method.to_string().parse::<SegmentationMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_validate_rejects_zero_target_size() {
        let policy = SegmentationPolicy {
            target_size: 0,
            overlap: 0,
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(SegmentationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_overlap_at_target_size() {
        let policy = SegmentationPolicy {
            target_size: 100,
            overlap: 100,
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(SegmentationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overlap_percentage_overrides_absolute_overlap() {
        let policy = SegmentationPolicy {
            target_size: 200,
            overlap: 100,
            overlap_percentage: Some(0.1),
            ..Default::default()
        };
        assert_eq!(policy.effective_overlap(), 20);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_full_overlap_percentage() {
        let policy = SegmentationPolicy {
            overlap_percentage: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(SegmentationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_for_llm_preset() {
        let policy = SegmentationPolicy::for_llm(500);
        assert_eq!(policy.method, SegmentationMethod::Token);
        assert_eq!(policy.target_size, 500);
        assert_eq!(policy.overlap, 50);
        assert!(policy.preserve_sentence_boundaries);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_for_articles_preset() {
        let policy = SegmentationPolicy::for_articles();
        assert_eq!(policy.method, SegmentationMethod::Paragraph);
        assert!(policy.preserve_paragraph_grouping);
    }

    #[test]
    fn test_from_env_defaults() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        std::env::remove_var("CHUNK_METHOD");
        std::env::remove_var("CHUNK_SIZE");
        std::env::remove_var("CHUNK_OVERLAP");

        let policy = SegmentationPolicy::from_env();
        assert_eq!(policy.method, SegmentationMethod::Paragraph);
        assert_eq!(policy.target_size, 1000);
    }

    #[test]
    fn test_from_env_overrides() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        std::env::set_var("CHUNK_METHOD", "word");
        std::env::set_var("CHUNK_SIZE", "64");
        std::env::set_var("CHUNK_OVERLAP", "8");

        let policy = SegmentationPolicy::from_env();
        assert_eq!(policy.method, SegmentationMethod::Word);
        assert_eq!(policy.target_size, 64);
        assert_eq!(policy.overlap, 8);

        std::env::remove_var("CHUNK_METHOD");
        std::env::remove_var("CHUNK_SIZE");
        std::env::remove_var("CHUNK_OVERLAP");
    }

    #[test]
    fn test_from_env_invalid_method_falls_back() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        std::env::set_var("CHUNK_METHOD", "syllable");

        let policy = SegmentationPolicy::from_env();
        assert_eq!(policy.method, SegmentationMethod::Paragraph);

        std::env::remove_var("CHUNK_METHOD");
    }
}
