use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported segmentation method: {0}")]
    UnsupportedMethod(String),

    #[error("Segmentation resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Segmentation produced no valid chunks")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, SegmentationError>;
