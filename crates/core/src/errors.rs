use thiserror::Error;

/// Failures raised by the injected LMS collaborator. Missing slots and
/// unknown-user ledger reads are normal response branches, not errors, so they
/// never appear here.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("lms backend unavailable: {0}")]
    Unavailable(String),
    #[error("lms backend rejected the request: {0}")]
    Rejected(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// User-safe wording. Raw fault detail stays in logs; the conversation
    /// must never crash or leak it.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Backend(_) => "I'm having trouble setting up your course. Please try again.",
            Self::Configuration(_) => {
                "Something went wrong on my side. Please try again in a moment."
            }
        }
    }
}
