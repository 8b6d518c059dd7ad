use thiserror::Error;

/// Custom error type for the DecTree crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DecTreeError {
    #[error("Could not open dataset file '{path}': {message}")]
    DatasetOpen { path: String, message: String },

    #[error("Dataset truncated: header announces {expected} items but only {read} could be read")]
    TruncatedDataset { expected: usize, read: usize },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid label {label} for item {index}: labels must be in 0..10")]
    InvalidLabel { index: usize, label: u8 },

    #[error("Image size mismatch: expected {expected} pixels, got {actual}")]
    ImageSizeMismatch { expected: usize, actual: usize },

    #[error("Length mismatch: {images} images but {labels} labels")]
    LengthMismatch { images: usize, labels: usize },

    #[error("Dataset has {0} items, more than the file header can count")]
    TooManyItems(usize),

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Operation '{operation}' requires a non-empty subset")]
    EmptySubset { operation: String },

    #[error("Cannot build a decision tree from an empty dataset")]
    EmptyDataset,

    #[error("Invalid threshold ratio {0}: must be in (0, 1]")]
    InvalidThreshold(f64),
}

impl From<std::io::Error> for DecTreeError {
    fn from(err: std::io::Error) -> Self {
        DecTreeError::Io(err.to_string())
    }
}
