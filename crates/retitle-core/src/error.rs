use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetitleError {
    #[error("content root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rewrite rule pattern: {0}")]
    Rule(#[from] regex::Error),
}

impl RetitleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
