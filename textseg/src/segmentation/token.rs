use crate::config::SegmentationPolicy;
use crate::error::Result;

use super::boundary;
use super::tokenizer::TokenEncoder;

/// Fraction of the decoded chunk searched for a sentence terminator when
/// `preserve_sentence_boundaries` is set.
const SNAP_WINDOW: f64 = 0.1;

/// Split text into chunks of at most `target_size` tokens, decoding each
/// token window back to text and optionally snapping the decoded text back
/// to the nearest sentence terminator in its tail.
///
/// Snapping trims the decoded text only; the cursor still advances from the
/// unsnapped token end, so coverage is not exact under
/// `preserve_sentence_boundaries` unless the overlap spans the trimmed tail.
pub(crate) fn split_tokens(
    text: &str,
    encoder: &dyn TokenEncoder,
    policy: &SegmentationPolicy,
) -> Result<Vec<String>> {
    let tokens = encoder.encode(text);
    let target = policy.target_size;
    let overlap = policy.effective_overlap();

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < tokens.len() {
        let end = (start + target).min(tokens.len());
        let mut chunk_text = encoder.decode(&tokens[start..end])?;

        if policy.preserve_sentence_boundaries && end < tokens.len() {
            let chars: Vec<char> = chunk_text.chars().collect();
            let search_start = (chars.len() as f64 * (1.0 - SNAP_WINDOW)) as usize;
            if let Some(snapped) =
                boundary::rscan_sentence_end(&chars, search_start, chars.len(), false)
            {
                chunk_text = chars[..snapped].iter().collect();
            }
        }

        let trimmed = chunk_text.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        let next = start + target - overlap;
        if next <= start {
            break;
        }
        start = next;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SegmentationMethod;
    use crate::error::SegmentationError;

    /// Deterministic encoder for tests: one token per character.
    struct CharEncoder;

    impl TokenEncoder for CharEncoder {
        fn name(&self) -> &str {
            "char"
        }

        fn encode(&self, text: &str) -> Vec<u32> {
            text.chars().map(|c| c as u32).collect()
        }

        fn decode(&self, tokens: &[u32]) -> Result<String> {
            tokens
                .iter()
                .map(|&t| {
                    char::from_u32(t).ok_or_else(|| {
                        SegmentationError::ResourceUnavailable(format!(
                            "token {t} is not a valid scalar value"
                        ))
                    })
                })
                .collect()
        }
    }

    fn policy(target: usize, overlap: usize, preserve: bool) -> SegmentationPolicy {
        SegmentationPolicy {
            method: SegmentationMethod::Token,
            target_size: target,
            overlap,
            overlap_percentage: None,
            preserve_sentence_boundaries: preserve,
            preserve_paragraph_grouping: false,
            min_chunk_length: 0,
            skip_empty: true,
        }
    }

    #[test]
    fn test_token_windows_no_overlap() {
        let chunks = split_tokens("abcdefgh", &CharEncoder, &policy(4, 0, false)).unwrap();
        assert_eq!(chunks, vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_token_overlap_restarts_cursor() {
        let chunks = split_tokens("abcdefgh", &CharEncoder, &policy(4, 1, false)).unwrap();
        assert_eq!(chunks, vec!["abcd", "defg", "gh"]);
    }

    #[test]
    fn test_decoded_chunks_trimmed() {
        let chunks = split_tokens("ab  cd  ", &CharEncoder, &policy(4, 0, false)).unwrap();
        assert_eq!(chunks, vec!["ab", "cd"]);
    }

    #[test]
    fn test_snap_to_sentence_end_in_decoded_tail() {
        // With 1:1 char tokens the 10% tail of a 40-token window covers the
        // terminator after "done." only in the first window.
        let text = "This sentence will be over soon, done. Next sentence continues for a while longer.";
        let chunks = split_tokens(text, &CharEncoder, &policy(40, 0, true)).unwrap();
        assert_eq!(chunks[0], "This sentence will be over soon, done.");
    }

    #[test]
    fn test_whole_text_fits_single_chunk() {
        let chunks = split_tokens("short text", &CharEncoder, &policy(100, 10, true)).unwrap();
        assert_eq!(chunks, vec!["short text"]);
    }
}
