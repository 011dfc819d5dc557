use crate::config::SegmentationPolicy;

use super::boundary;
use super::sentence;
use super::splitter::SentenceSplitter;

/// Split text into chunks of blank-line-separated paragraphs.
///
/// With `preserve_paragraph_grouping`, paragraphs are kept whole and grouped
/// until `target_size`; a paragraph that alone exceeds the target is
/// re-segmented at sentence granularity and its sub-chunks spliced into the
/// output in place. Without grouping, paragraphs are flattened and handed to
/// the sentence strategy.
pub(crate) fn split_paragraphs(
    text: &str,
    splitter: &dyn SentenceSplitter,
    policy: &SegmentationPolicy,
) -> Vec<String> {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    if !policy.preserve_paragraph_grouping {
        return sentence::split_sentences(&paragraphs.join("\n"), splitter, policy);
    }

    let target = policy.target_size;
    let overlap = policy.effective_overlap();

    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_size = 0usize;

    for para in paragraphs {
        let para_size = para.chars().count();

        if para_size > target {
            if !current.is_empty() {
                chunks.push(current.join("\n\n"));
                current.clear();
                current_size = 0;
            }
            chunks.extend(sentence::split_sentences(&para, splitter, policy));
            continue;
        }

        if current_size + para_size > target && !current.is_empty() {
            chunks.push(current.join("\n\n"));

            if overlap > 0 {
                let (carried, carried_size) = boundary::carry_overlap(&current, overlap);
                current = carried;
                current_size = carried_size;
            } else {
                current.clear();
                current_size = 0;
            }
        }

        current.push(para);
        current_size += para_size;
    }

    if !current.is_empty() {
        chunks.push(current.join("\n\n"));
    }

    chunks
}
