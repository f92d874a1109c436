use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("source table '{0}' does not exist")]
    TableMissing(String),

    #[error("missing required columns: {0}")]
    MissingColumns(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("projection invariant violated: {0}")]
    Projection(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
