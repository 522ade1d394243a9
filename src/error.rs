//! Error types for seatshow
//!
//! Navigation never fails (boundaries clamp, bad jumps are ignored), so the
//! only fallible paths are configuration loading, diagram rendering and deck
//! export.

use std::path::PathBuf;

/// A specialized `Result` type for seatshow operations.
pub type Result<T> = std::result::Result<T, ShowError>;

/// Errors raised outside the presentation state machine
#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    /// Invalid JSON or an unreadable configuration file
    #[error("invalid config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    ConfigValidation(String),

    /// The flowchart definition could not be rendered
    #[error("diagram error at line {line}: {message}")]
    Diagram { line: usize, message: String },

    /// Writing slide XML into a string buffer failed
    #[error("xml write error: {0}")]
    Xml(#[from] std::fmt::Error),

    /// Writing the PPTX package failed
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShowError {
    pub(crate) fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn diagram(line: usize, message: impl Into<String>) -> Self {
        Self::Diagram {
            line,
            message: message.into(),
        }
    }
}
