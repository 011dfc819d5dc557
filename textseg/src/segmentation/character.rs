use crate::config::SegmentationPolicy;

use super::boundary;

/// Fraction of the chunk tail searched for a sentence terminator when
/// `preserve_sentence_boundaries` is set.
const SNAP_WINDOW: f64 = 0.2;

/// Split text into chunks of at most `target_size` characters, re-starting
/// each chunk `overlap` characters before the end of the previous one.
pub(crate) fn split_characters(text: &str, policy: &SegmentationPolicy) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    let target = policy.target_size;
    let overlap = policy.effective_overlap();

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < total {
        let mut end = (start + target).min(total);

        if policy.preserve_sentence_boundaries && end < total {
            let window = (target as f64 * SNAP_WINDOW) as usize;
            let search_start = start.max(end.saturating_sub(window));
            if let Some(snapped) = boundary::rscan_sentence_end(&chars, search_start, end, true) {
                end = snapped;
            }
        }

        let chunk: String = chars[start..end].iter().collect();
        if !chunk.trim().is_empty() {
            chunks.push(chunk);
        }

        // Re-start the cursor `overlap` characters back, always advancing.
        let next = end.saturating_sub(overlap);
        start = if next > start { next } else { end };
    }

    chunks
}
