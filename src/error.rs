#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authorization failed: {0}")]
    Auth(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Operation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, HubError>;
