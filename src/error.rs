//! Error handling for msa-starter.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for msa-starter operations.
///
/// Per-file failures end up inside [`crate::processor::FileOutcome::Failed`] and never
/// stop a run. Everything else is fatal and reaches [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while locating or walking a template tree
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur while loading an answers file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised by the template engine, including unresolved placeholders
    #[error("Render error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while walking the template directory
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The destination root could not be reset before the run
    #[error("Cannot reset output directory '{output_dir}': {source}.")]
    OutputDirError {
        output_dir: String,
        #[source]
        source: io::Error,
    },

    /// Represents failures while reading interactive input
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The user declined the collected build information
    #[error("Aborted by user.")]
    Aborted,
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
