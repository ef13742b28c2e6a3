//! Load failures

use std::path::PathBuf;

use thiserror::Error;

/// Fatal scene loading errors
///
/// Any of these means the level failed to load; no partial scene is
/// returned. Recoverable problems (unknown material ids, incomplete `mat`
/// entries, absent optional sections) never surface here, they are logged
/// and the load carries on.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The map file is missing or unreadable
    #[error("map resource {path} is unavailable: {source}")]
    ResourceUnavailable {
        /// Path the map name resolved to
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The map file is not a well-formed document
    #[error("malformed map document: {0}")]
    MalformedDocument(String),

    /// A section every map must have is absent
    #[error("map has no '{0}' section")]
    MissingRequiredSection(&'static str),
}

impl From<roxmltree::Error> for LoadError {
    fn from(error: roxmltree::Error) -> Self {
        Self::MalformedDocument(error.to_string())
    }
}
