use miette::Diagnostic;
use thiserror::Error;

/// Why argument names could not be read back. `resolve_names` collapses
/// every variant to an empty list; the checked form surfaces them.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("could not read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is out of range ({total} lines in file)")]
    LineOutOfRange { line: usize, total: usize },

    #[error("no call to '{function}' found on the target line")]
    PatternMismatch { function: String },
}
