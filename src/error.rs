use ggez::GameError;
use thiserror::Error;

/// Failure while loading or saving the score board.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ScoreError> for GameError {
    fn from(err: ScoreError) -> Self {
        GameError::CustomError(err.to_string())
    }
}
