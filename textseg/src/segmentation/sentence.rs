use crate::config::SegmentationPolicy;

use super::boundary;
use super::splitter::SentenceSplitter;

/// Split text into chunks of whole sentences whose cumulative character
/// length stays within `target_size`, carrying whole trailing sentences
/// forward as overlap. A sentence that alone exceeds `target_size` becomes
/// its own oversized chunk.
pub(crate) fn split_sentences(
    text: &str,
    splitter: &dyn SentenceSplitter,
    policy: &SegmentationPolicy,
) -> Vec<String> {
    let sentences = splitter.split(text);
    boundary::accumulate_units(
        sentences,
        " ",
        policy.target_size,
        policy.effective_overlap(),
    )
}
