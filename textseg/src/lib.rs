//! Segmentation engine for cleaned document text.
//!
//! Splits arbitrary-length text into a bounded sequence of chunks under five
//! policies — character, word, sentence, paragraph, and token — each with
//! inter-chunk overlap, boundary-preserving cuts, and recursive fallback for
//! units that exceed the target size. Chunks are suitable for search
//! indexing, embedding pipelines, and LLM context windows.
//!
//! ```
//! use textseg::{SegmentationEngine, SegmentationMethod, SegmentationPolicy};
//!
//! let engine = SegmentationEngine::new();
//! let policy = SegmentationPolicy {
//!     method: SegmentationMethod::Sentence,
//!     target_size: 200,
//!     overlap: 20,
//!     min_chunk_length: 0,
//!     ..SegmentationPolicy::default()
//! };
//! let result = engine
//!     .segment("First sentence. Second sentence. Third sentence.", &policy)
//!     .unwrap();
//! assert!(result.chunks[0].is_first);
//! assert_eq!(result.summary.chunk_count, result.chunks.len());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod segmentation;

pub use config::{SegmentationMethod, SegmentationPolicy};
pub use error::{Result, SegmentationError};
pub use models::{Chunk, Segmentation, SegmentationSummary};
pub use segmentation::{
    RegexSentenceSplitter, SegmentationEngine, SegmentationEngineBuilder, SentenceSplitter,
    TokenEncoder, UnicodeSentenceSplitter,
};
#[cfg(feature = "tiktoken")]
pub use segmentation::TiktokenEncoder;
