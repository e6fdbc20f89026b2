use derive_more::Display;

/// Failure taxonomy of the data-access layer. Accessors never recover these;
/// the owning page is the error boundary.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, refused
    /// connection, timeout, malformed body).
    #[display("Request failed: {_0}")]
    Transport(String),

    /// The backend answered with a non-success status. The message comes
    /// from the response body's `detail` field when present.
    #[display("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// A lookup that completed but had nothing to return.
    #[display("No data: {_0}")]
    NoData(String),
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ApiError::NoData(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Backend {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Transport(err.to_string()),
        }
    }
}
