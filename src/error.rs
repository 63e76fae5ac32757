use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error loading items from '{path}': {source}")]
    Load {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid letter '{0}': expected a single character A-Z")]
    InvalidLetter(String),

    #[error("Unknown exclusion '{0}'")]
    UnknownExclusion(String),
}

pub type PkResult<T> = Result<T, PickerError>;
