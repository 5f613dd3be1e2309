//! Error types for the RFML compiler

use thiserror::Error;

/// Result type alias for compiler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a split-form question could not be attached to a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteStep {
    /// No step has been started yet
    NoOpenStep,
    /// The last step has no instruction
    MissingInstruction,
    /// The last step already has a question
    QuestionAlreadySet,
}

impl std::fmt::Display for IncompleteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            IncompleteStep::NoOpenStep => "there are no steps to add a question to",
            IncompleteStep::MissingInstruction => {
                "can't add a question until the step has an instruction"
            }
            IncompleteStep::QuestionAlreadySet => "the last step already has a question",
        };
        f.write_str(msg)
    }
}

/// Errors that can occur while registering, rendering or saving tests
#[derive(Error, Debug)]
pub enum Error {
    /// Registration without a usable identifier
    #[error("test case is missing an ID")]
    MissingIdentifier,

    /// Identifier already used by an earlier registration
    #[error("duplicate test ID: {0}")]
    DuplicateIdentifier(String),

    /// Title already used by an earlier registration
    #[error("duplicate test title: {0}")]
    DuplicateTitle(String),

    /// Split-form question call without a step to attach to
    #[error("incomplete step: {0}")]
    IncompleteStep(IncompleteStep),

    /// Normalized question that does not end with `?`
    #[error("question does not end with a question mark: {0}")]
    MalformedQuestion(String),

    /// Invalid configuration or suite selection
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by user registration code
    #[error("{0}")]
    Other(String),
}

impl From<IncompleteStep> for Error {
    fn from(err: IncompleteStep) -> Self {
        Error::IncompleteStep(err)
    }
}
