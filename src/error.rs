use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// All variants describe a malformed compressed buffer encountered during
/// [`search_compressed`][crate::search_compressed]. Building and querying the
/// live tree never fails.
#[derive(Error, Debug)]
pub enum RTreeCompressError {
    /// A decode read ran past the end of the buffer.
    #[error("Unexpected end of buffer: read at offset {offset} in buffer of length {len}.")]
    UnexpectedEof { offset: usize, len: usize },

    /// An internal node referenced a child outside the buffer.
    #[error("Child offset {offset} out of bounds for buffer of length {len}.")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// A leaf node declared a payload id width other than 1, 2, or 4.
    #[error("Invalid payload id width {0}, expected 1, 2, or 4.")]
    InvalidIdWidth(u8),
}

pub type Result<T> = std::result::Result<T, RTreeCompressError>;
