use std::sync::Arc;
use std::time::Instant;

use crate::config::{SegmentationMethod, SegmentationPolicy};
use crate::error::{Result, SegmentationError};
use crate::models::{Chunk, Segmentation, SegmentationSummary};

use super::splitter::{RegexSentenceSplitter, SentenceSplitter, UnicodeSentenceSplitter};
use super::tokenizer::TokenEncoder;
use super::{character, paragraph, sentence, token, word};

/// Stateless segmentation engine: one `segment` call turns one text and one
/// policy into an ordered chunk sequence.
///
/// The engine owns its sentence splitter and optional token encoder as
/// shared read-only resources, so a single instance can serve concurrent
/// callers; all mutable state lives inside each `segment` call.
pub struct SegmentationEngine {
    splitter: Arc<dyn SentenceSplitter>,
    tokenizer: Option<Arc<dyn TokenEncoder>>,
}

impl SegmentationEngine {
    /// Engine with the default resources: the UAX#29 sentence splitter and,
    /// when available, the default token encoder.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> SegmentationEngineBuilder {
        SegmentationEngineBuilder::default()
    }

    /// Segment `text` under `policy`.
    ///
    /// Fails on empty/whitespace-only input, on a policy that violates its
    /// invariants, and when filtering leaves no surviving chunks. A missing
    /// token encoder is not an error: the Token method falls back to Word
    /// with a logged warning, and the summary reports the method actually
    /// used.
    pub fn segment(&self, text: &str, policy: &SegmentationPolicy) -> Result<Segmentation> {
        let started = Instant::now();

        policy.validate()?;
        if text.trim().is_empty() {
            return Err(SegmentationError::InvalidInput(
                "cannot segment empty text".to_string(),
            ));
        }

        tracing::debug!("Segmenting content with method: {}", policy.method);

        let mut method_used = policy.method;
        let raw = match policy.method {
            SegmentationMethod::Character => character::split_characters(text, policy),
            SegmentationMethod::Word => word::split_words(text, policy),
            SegmentationMethod::Sentence => {
                sentence::split_sentences(text, self.splitter.as_ref(), policy)
            }
            SegmentationMethod::Paragraph => {
                paragraph::split_paragraphs(text, self.splitter.as_ref(), policy)
            }
            SegmentationMethod::Token => match &self.tokenizer {
                Some(encoder) => token::split_tokens(text, encoder.as_ref(), policy)?,
                None => {
                    tracing::warn!(
                        "Token encoder not available, falling back to word segmentation"
                    );
                    method_used = SegmentationMethod::Word;
                    word::split_words(text, policy)
                }
            },
        };

        let chunks = finalize(raw, policy)?;

        let chunk_count = chunks.len();
        let mean_chunk_length =
            chunks.iter().map(|c| c.length).sum::<usize>() as f64 / chunk_count as f64;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            "Segmented content: {} chunks, avg_length={:.0}, method={}, elapsed={}ms",
            chunk_count,
            mean_chunk_length,
            method_used,
            elapsed_ms
        );

        Ok(Segmentation {
            chunks,
            summary: SegmentationSummary {
                method: method_used,
                target_size: policy.target_size,
                overlap: policy.effective_overlap(),
                chunk_count,
                mean_chunk_length,
                elapsed_ms,
            },
        })
    }
}

impl Default for SegmentationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`SegmentationEngine`]: inject either resource, or drop them
/// to exercise the fallback paths.
#[derive(Default)]
pub struct SegmentationEngineBuilder {
    splitter: Option<Arc<dyn SentenceSplitter>>,
    tokenizer: Option<Arc<dyn TokenEncoder>>,
    no_splitter: bool,
    no_tokenizer: bool,
}

impl SegmentationEngineBuilder {
    pub fn sentence_splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        self.splitter = Some(Arc::new(splitter));
        self
    }

    pub fn token_encoder(mut self, encoder: impl TokenEncoder + 'static) -> Self {
        self.tokenizer = Some(Arc::new(encoder));
        self
    }

    /// Build without an external sentence splitter; the engine uses the
    /// regex fallback instead.
    pub fn without_sentence_splitter(mut self) -> Self {
        self.no_splitter = true;
        self
    }

    /// Build without a token encoder; the Token method will fall back to
    /// Word segmentation.
    pub fn without_token_encoder(mut self) -> Self {
        self.no_tokenizer = true;
        self
    }

    pub fn build(self) -> SegmentationEngine {
        let splitter: Arc<dyn SentenceSplitter> = if self.no_splitter {
            tracing::warn!("Sentence splitter unavailable, using regex fallback splitter");
            Arc::new(RegexSentenceSplitter::new())
        } else {
            self.splitter
                .unwrap_or_else(|| Arc::new(UnicodeSentenceSplitter))
        };

        let tokenizer = if self.no_tokenizer {
            None
        } else {
            self.tokenizer.or_else(default_token_encoder)
        };

        SegmentationEngine { splitter, tokenizer }
    }
}

#[cfg(feature = "tiktoken")]
fn default_token_encoder() -> Option<Arc<dyn TokenEncoder>> {
    let encoding =
        std::env::var("TOKEN_ENCODING").unwrap_or_else(|_| "cl100k_base".to_string());
    match super::tokenizer::TiktokenEncoder::new(&encoding) {
        Ok(encoder) => Some(Arc::new(encoder)),
        Err(e) => {
            tracing::warn!(
                "Failed to initialize token encoder '{}': {}. Token method will fall back to words.",
                encoding,
                e
            );
            None
        }
    }
}

#[cfg(not(feature = "tiktoken"))]
fn default_token_encoder() -> Option<Arc<dyn TokenEncoder>> {
    None
}

/// Apply post-processing to the raw chunk strings: drop empty and too-short
/// chunks, then attach positional metadata in final order.
fn finalize(raw: Vec<String>, policy: &SegmentationPolicy) -> Result<Vec<Chunk>> {
    let kept: Vec<String> = raw
        .into_iter()
        .filter(|c| !policy.skip_empty || !c.trim().is_empty())
        .filter(|c| c.trim().chars().count() >= policy.min_chunk_length)
        .collect();

    if kept.is_empty() {
        return Err(SegmentationError::EmptyResult);
    }

    let total = kept.len();
    let mut chunks = Vec::with_capacity(total);
    for (index, text) in kept.iter().enumerate() {
        let overlap_with_previous = if index == 0 {
            0
        } else {
            suffix_prefix_overlap(&kept[index - 1], text)
        };
        chunks.push(Chunk::new(
            text.clone(),
            index,
            total,
            overlap_with_previous,
        ));
    }
    Ok(chunks)
}

/// Character length of the longest suffix of `prev` that is also a prefix of
/// `cur`.
fn suffix_prefix_overlap(prev: &str, cur: &str) -> usize {
    let mut overlap = 0usize;
    let mut prefix_chars = 0usize;
    for (byte_start, ch) in cur.char_indices() {
        let prefix_end = byte_start + ch.len_utf8();
        prefix_chars += 1;
        if prefix_end > prev.len() {
            break;
        }
        if prev.ends_with(&cur[..prefix_end]) {
            overlap = prefix_chars;
        }
    }
    overlap
}
