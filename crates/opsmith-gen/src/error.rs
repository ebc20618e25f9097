use thiserror::Error;

/// Failures surfaced from one generation attempt. All are fatal to the
/// attempt; the caller owns user messaging and any retry decision.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("generation backend error: {0}")]
    Backend(String),

    #[error("no valid files found in the generated response")]
    NoFilesFound,

    #[error("missing required file: {0}")]
    MissingRequiredFile(String),

    #[error("failed to parse the generated tasks: {0}")]
    TaskParse(String),
}
