/// Query channel error.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct ChannelError<E>(pub E);

/// Event handler error.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct HandlerError<E>(pub E);

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A transition pattern failed to compile.
    #[error("invalid pattern {pattern:?}")]
    InvalidPattern {
        /// Source of the pattern.
        pattern: &'static str,

        /// Compilation error.
        #[source]
        source: regex::Error,
    },

    /// No backend is known under this name.
    #[error("unknown backend {0:?}")]
    UnknownBackend(String),
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
