/// Type alias for Result with anyhow::Error as the error type.
/// Used by configuration loading and the CLI; the controller itself
/// surfaces typed errors from `shared::error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
