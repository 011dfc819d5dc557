use crate::config::SegmentationPolicy;

/// Split text into chunks of at most `target_size` whitespace-delimited
/// words. Cuts always fall on word boundaries by construction.
pub(crate) fn split_words(text: &str, policy: &SegmentationPolicy) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let target = policy.target_size;
    let overlap = policy.effective_overlap();

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < words.len() {
        let end = (start + target).min(words.len());
        chunks.push(words[start..end].join(" "));

        let next = start + target - overlap;
        if next <= start {
            break;
        }
        start = next;
    }

    chunks
}
