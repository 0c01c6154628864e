//! Setup errors: the top-level failures shown to the user

use thiserror::Error;

/// Failures the entry point can report.
///
/// Every variant funnels into the same stderr report and exit code; the
/// taxonomy exists so the wizard can grow richer failures without touching
/// the reporting shell.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The interactive wizard flow has not been built.
    #[error("Not implemented yet.")]
    NotImplemented,

    /// Argument parsing failed before any configuration existed.
    #[error("{0}")]
    Usage(String),

    /// Filesystem work on the pipeline directory failed.
    #[error("cannot access {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;
