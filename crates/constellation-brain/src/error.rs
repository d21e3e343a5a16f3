use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrainError {
    #[error("Intelligence collection failed ({category}): {reason}")]
    Collection { category: String, reason: String },

    #[error("Pattern analysis error: {0}")]
    Analysis(String),

    #[error("Strategy execution error: {0}")]
    Execution(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
