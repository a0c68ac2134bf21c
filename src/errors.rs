use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Summarization provider request failed: {0}")]
    Provider(String),

    #[error("Mail delivery failed: {0}")]
    Transport(String),

    #[error("History store unavailable: {0}")]
    Persistence(String),

    #[error("Invalid request: {0}")]
    Validation(String),
}

impl From<rusqlite::Error> for PipelineError {
    fn from(error: rusqlite::Error) -> Self {
        PipelineError::Persistence(error.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::Persistence(error.to_string())
    }
}
