//! Failure taxonomy for Variant encode/decode.

use gd_buffers::BufferError;
use thiserror::Error;

/// Errors surfaced by the Variant codec.
///
/// Every failure aborts the operation immediately and propagates unchanged
/// to the original caller; composites never substitute a default or return
/// a partially-built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariantError {
    /// Decode met a wire tag with no registered codec.
    #[error("unknown type tag: {0}")]
    UnknownTypeTag(u32),
    /// Fewer bytes remain than a codec's declared payload size.
    #[error("truncated buffer")]
    TruncatedBuffer,
    /// Encode could not classify the value into any Variant kind.
    #[error("unsupported value shape")]
    UnsupportedValueShape,
    /// A string payload held bytes that are not valid UTF-8.
    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,
}

impl From<BufferError> for VariantError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => VariantError::TruncatedBuffer,
            BufferError::InvalidUtf8 => VariantError::InvalidUtf8,
        }
    }
}
