use loom_core::CoreError;

/// Error type for spreadsheet adapter failures.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// The credentials file could not be read.
    #[error("Failed to read credentials file: {0}")]
    Io(#[from] std::io::Error),

    /// The credentials file is not a valid service-account key.
    #[error("Invalid credentials file: {0}")]
    Credentials(#[from] serde_json::Error),

    /// The private key could not sign the token assertion.
    #[error("Failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// The underlying HTTP request failed (network, DNS, decode, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote API answered with a non-2xx status.
    #[error("Spreadsheet API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Spreadsheet '{0}' not found")]
    SpreadsheetNotFound(String),

    #[error("Worksheet '{worksheet}' not found in spreadsheet '{spreadsheet}'")]
    WorksheetNotFound {
        spreadsheet: String,
        worksheet: String,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl From<SheetsError> for CoreError {
    fn from(err: SheetsError) -> Self {
        CoreError::Integration(err.to_string())
    }
}

/// Turn a non-2xx response into [`SheetsError::HttpStatus`], keeping the body
/// for the log line.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SheetsError::HttpStatus {
        status: status.as_u16(),
        body,
    })
}
