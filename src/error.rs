//! Error types for vocab-filter.

/// Errors that can occur while configuring a filter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// OOV ratio threshold is NaN or outside `[0, 1]`.
    #[error("invalid OOV ratio threshold: {0} (must be within [0, 1])")]
    InvalidOovRatio(f32),
}

/// Result type for vocab-filter operations.
pub type Result<T> = std::result::Result<T, Error>;
