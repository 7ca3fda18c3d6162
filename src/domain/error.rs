//! Error taxonomy for manual page generation

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManpageError {
    /// Caller supplied no, too many, or an unknown command name
    #[error("{0}")]
    Usage(String),

    /// Failure reported by the renderer, passed through unchanged
    #[error(transparent)]
    Render(#[from] io::Error),

    /// The fixed header date literal could not be parsed
    #[error("Invalid fixed manpage date '{literal}': {source}")]
    Configuration {
        literal: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

impl ManpageError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
