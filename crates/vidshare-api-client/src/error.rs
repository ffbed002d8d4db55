//! Client-side error categories.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connectivity(String),

    /// Non-2xx status or a `success:false` envelope
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// Body was empty, not JSON, or not the expected shape
    #[error("{message}")]
    MalformedResponse { message: String, html: bool },

    #[error("{0}")]
    InvalidFile(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ClientError::MalformedResponse {
            message: message.into(),
            html: false,
        }
    }

    /// Message shown in the status line after a failed request.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Timeout => {
                "Upload timed out. The file may be too large, try a smaller one".to_string()
            }
            ClientError::Connectivity(_) => {
                "Connection failed. Check your network connection".to_string()
            }
            ClientError::MalformedResponse { html: true, .. } => {
                "Server error. Try again in a moment".to_string()
            }
            ClientError::MalformedResponse { message, .. } => format!("Upload failed: {}", message),
            ClientError::Server { message, .. } => format!("Upload failed: {}", message),
            ClientError::InvalidFile(message) => message.clone(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::malformed(err.to_string())
        } else {
            ClientError::Connectivity(err.to_string())
        }
    }
}
