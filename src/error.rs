use thiserror::Error;

/// Errors produced by [`crate::compress`] and [`crate::compress_into`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum EncodeError {
    #[error("output buffer is too small to hold the compressed stream")]
    OutputTooSmall,
    #[error("failed to allocate working memory for the encoder")]
    OutOfMemory,
}
