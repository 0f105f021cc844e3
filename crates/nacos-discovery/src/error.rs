//! Conversion error types

use std::num::ParseFloatError;

/// Error type for converting a service instance back into a Nacos instance
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("missing metadata: {0}")]
    MissingMetadata(String),

    #[error("invalid weight '{value}': {source}")]
    InvalidWeight {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
