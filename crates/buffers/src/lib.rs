//! Little-endian binary buffer primitives.
//!
//! [`Writer`] accumulates bytes into a growable buffer; [`Reader`] walks a
//! borrowed byte slice with a cursor and bounds-checked `try_*` reads. Both
//! are shared plumbing for wire codecs that need exact cursor accounting.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Errors surfaced by bounds-checked buffer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A read would pass the end of the buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    /// The requested bytes are not valid UTF-8.
    #[error("invalid utf-8 in buffer")]
    InvalidUtf8,
}
