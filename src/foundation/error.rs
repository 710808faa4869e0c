/// Result alias used across the crate.
pub type MorphResult<T> = Result<T, MorphError>;

/// Every failure the engine and its helpers report.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Outline that yields no usable geometry (unparseable, empty, zero length).
    #[error("degenerate path: {0}")]
    DegeneratePath(String),

    /// `play` was called without a timeline.
    #[error("missing clock: play requires a timeline to drive progress")]
    MissingClock,

    /// Color string that is not `#RGB` or `#RRGGBB`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Out-of-range option or malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Anything else, usually I/O from a host.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build [`MorphError::DegeneratePath`].
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegeneratePath(msg.into())
    }

    /// Build [`MorphError::InvalidColor`].
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build [`MorphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Geometry errors are recovered by skipping the affected target.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DegeneratePath(_) | Self::InvalidColor(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
