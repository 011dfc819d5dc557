use serde::{Deserialize, Serialize};

use crate::config::SegmentationMethod;

use super::Chunk;

/// Diagnostic summary accompanying every segmentation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationSummary {
    pub method: SegmentationMethod,
    pub target_size: usize,
    pub overlap: usize,
    pub chunk_count: usize,
    /// Mean character length over the surviving chunks.
    pub mean_chunk_length: f64,
    /// Wall-clock time spent segmenting. Diagnostic, not a contract.
    pub elapsed_ms: u64,
}

/// Complete output of one segmentation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segmentation {
    pub chunks: Vec<Chunk>,
    pub summary: SegmentationSummary,
}
