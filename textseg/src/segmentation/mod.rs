mod boundary;
mod character;
mod engine;
mod paragraph;
mod sentence;
mod splitter;
mod token;
mod tokenizer;
mod word;

pub use engine::{SegmentationEngine, SegmentationEngineBuilder};
pub use splitter::{RegexSentenceSplitter, SentenceSplitter, UnicodeSentenceSplitter};
#[cfg(feature = "tiktoken")]
pub use tokenizer::TiktokenEncoder;
pub use tokenizer::TokenEncoder;
