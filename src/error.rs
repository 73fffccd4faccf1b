use thiserror::Error;

#[derive(Error, Debug)]
pub enum HitScoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Score Out Of Range: components {0} overflow the total")]
    ScoreOutOfRange(String),

    #[error("Unsupported Scoring Type: '{0}'")]
    UnsupportedScoringType(String),
}

pub type HsResult<T> = Result<T, HitScoreError>;
