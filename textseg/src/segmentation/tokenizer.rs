use crate::error::Result;

/// Token encode/decode capability provided by an external tokenizer.
///
/// `encode` and `decode` must round-trip losslessly for Unicode text.
/// Implementations must be safe for concurrent read access.
pub trait TokenEncoder: Send + Sync {
    /// Encoding name, for diagnostics.
    fn name(&self) -> &str;
    fn encode(&self, text: &str) -> Vec<u32>;
    fn decode(&self, tokens: &[u32]) -> Result<String>;
}

#[cfg(feature = "tiktoken")]
pub use tiktoken_impl::TiktokenEncoder;

#[cfg(feature = "tiktoken")]
mod tiktoken_impl {
    use tiktoken_rs::CoreBPE;

    use crate::error::{Result, SegmentationError};

    use super::TokenEncoder;

    /// BPE token encoder backed by `tiktoken-rs`.
    pub struct TiktokenEncoder {
        bpe: CoreBPE,
        encoding: String,
    }

    impl std::fmt::Debug for TiktokenEncoder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("TiktokenEncoder")
                .field("encoding", &self.encoding)
                .finish_non_exhaustive()
        }
    }

    impl TiktokenEncoder {
        /// Load a named tiktoken encoding (`cl100k_base`, `o200k_base`,
        /// `p50k_base`, `r50k_base`).
        pub fn new(encoding: &str) -> Result<Self> {
            let loaded = match encoding {
                "cl100k_base" => tiktoken_rs::cl100k_base(),
                "o200k_base" => tiktoken_rs::o200k_base(),
                "p50k_base" => tiktoken_rs::p50k_base(),
                "r50k_base" => tiktoken_rs::r50k_base(),
                other => {
                    return Err(SegmentationError::ResourceUnavailable(format!(
                        "unknown token encoding: {other}"
                    )))
                }
            };
            let bpe = loaded.map_err(|e| {
                SegmentationError::ResourceUnavailable(format!(
                    "failed to load token encoding '{encoding}': {e}"
                ))
            })?;
            Ok(Self {
                bpe,
                encoding: encoding.to_string(),
            })
        }
    }

    impl TokenEncoder for TiktokenEncoder {
        fn name(&self) -> &str {
            &self.encoding
        }

        fn encode(&self, text: &str) -> Vec<u32> {
            self.bpe.encode_with_special_tokens(text)
        }

        fn decode(&self, tokens: &[u32]) -> Result<String> {
            self.bpe.decode(tokens.to_vec()).map_err(|e| {
                SegmentationError::ResourceUnavailable(format!("token decode failed: {e}"))
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_tiktoken_round_trip() {
            let encoder = TiktokenEncoder::new("cl100k_base").unwrap();
            let text = "Hello world, this is a token round trip.";
            let tokens = encoder.encode(text);
            assert!(!tokens.is_empty());
            assert_eq!(encoder.decode(&tokens).unwrap(), text);
        }

        #[test]
        fn test_unknown_encoding_rejected() {
            let err = TiktokenEncoder::new("not_an_encoding").unwrap_err();
            assert!(matches!(
                err,
                SegmentationError::ResourceUnavailable(_)
            ));
        }

        #[test]
        fn test_encoder_reports_name() {
            let encoder = TiktokenEncoder::new("cl100k_base").unwrap();
            assert_eq!(encoder.name(), "cl100k_base");
        }
    }
}
