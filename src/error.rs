use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions. Every variant is detected and reported before the
/// config document is written, so a failed run leaves the file untouched.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("trajectory JSON not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("config document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("bad --set spec `{spec}`: {reason}")]
    BadOverrideSyntax { spec: String, reason: String },

    #[error("--set spec `{spec}` has no id field")]
    MissingOverrideId { spec: String },

    #[error("bad --set value in `{spec}`: {reason}")]
    DisallowedOverrideValue { spec: String, reason: String },

    #[error("--set ids not present in the trajectory JSON: {ids:?}")]
    OverrideIdNotInSource { ids: Vec<u32> },

    #[error("failed to parse trajectory JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl MergeError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::SourceNotFound(_) => 2,
            MergeError::DocumentNotFound(_) => 3,
            MergeError::BadOverrideSyntax { .. }
            | MergeError::MissingOverrideId { .. }
            | MergeError::DisallowedOverrideValue { .. } => 6,
            MergeError::OverrideIdNotInSource { .. } => 7,
            MergeError::Json(_) | MergeError::Io(_) => 1,
        }
    }
}
