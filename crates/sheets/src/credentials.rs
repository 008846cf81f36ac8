//! Service-account key file loading.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::SheetsError;

/// Token endpoint used when the key file does not name one.
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The fields of a Google service-account JSON key that the adapter uses.
///
/// Other keys in the file (`type`, `project_id`, `client_id`, ...) are ignored.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Service-account identity, used as the assertion issuer.
    pub client_email: String,
    /// PEM-encoded RSA private key.
    pub private_key: String,
    /// Key id, sent as the JWT `kid` header when present.
    #[serde(default)]
    pub private_key_id: Option<String>,
    /// OAuth2 token endpoint, also the assertion audience.
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Read and parse a key file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SheetsError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SheetsError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
