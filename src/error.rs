use thiserror::Error;

#[derive(Error, Debug)]
pub enum K4Error {
    #[error("Invalid start letter '{0}': expected a single letter A-Z")]
    InvalidStartLetter(String),

    #[error("Length Mismatch: left has {left} letters, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Search exhausted after {attempts} attempts without a match")]
    ExhaustedAttempts { attempts: usize },

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type K4Result<T> = Result<T, K4Error>;
