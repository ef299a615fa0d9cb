use miette::Diagnostic;
use thiserror::Error;

/// Why the caller site could not be recovered. `locate` collapses every
/// variant to `None`; the checked form surfaces them.
#[derive(Debug, Error, Diagnostic)]
pub enum LocateError {
    #[error("stack capture is unavailable in this environment")]
    CaptureUnavailable,

    #[error("no stack frame at offset {offset} ({available} frames captured)")]
    MissingFrame { offset: usize, available: usize },

    #[error("frame matches no known location dialect: {frame}")]
    DialectMismatch { frame: String },
}
