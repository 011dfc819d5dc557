use serde::{Deserialize, Serialize};

/// One bounded piece of segmented text plus its positional metadata.
///
/// Chunks are immutable value objects produced atomically by a single
/// segmentation run; beyond adjacency and the shared `total` they carry no
/// relationship to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    /// 0-based position in the output sequence.
    pub index: usize,
    /// Total chunk count of the run this chunk belongs to.
    pub total: usize,
    /// Character length of `text`.
    pub length: usize,
    /// Whitespace-delimited word count of `text`.
    pub word_count: usize,
    pub is_first: bool,
    pub is_last: bool,
    /// Character length of the longest suffix of the previous chunk that is
    /// also a prefix of this chunk. Diagnostic only; it can disagree with the
    /// unit-based overlap for methods with non-trivial separators. 0 for the
    /// first chunk.
    pub overlap_with_previous: usize,
}

impl Chunk {
    pub fn new(text: String, index: usize, total: usize, overlap_with_previous: usize) -> Self {
        let length = text.chars().count();
        let word_count = text.split_whitespace().count();
        Self {
            text,
            index,
            total,
            length,
            word_count,
            is_first: index == 0,
            is_last: index + 1 == total,
            overlap_with_previous,
        }
    }
}
