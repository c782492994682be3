/// Type alias for Result with anyhow::Error as the error type.
/// Used by every layer so errors can carry context as they propagate.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
