use thiserror::Error;

/// Goweek error types
#[derive(Error, Debug)]
pub enum GoweekError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Timezone error: {0}")]
    Timezone(String),

    #[error("Command `{command}` failed: {message}")]
    Command { command: String, message: String },

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Goweek operations
pub type Result<T> = std::result::Result<T, GoweekError>;
