/// Application-level errors
///
/// Three kinds cross the data-source boundary: transport failures, non-success
/// upstream responses (quota exhaustion, bad credential), and responses missing
/// the structure we expect. The remaining variants are caller-side.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed response: {0}")]
    Shape(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type AppResult<T> = Result<T, AppError>;
