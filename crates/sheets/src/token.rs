//! OAuth2 access tokens for a service account (JWT-bearer grant).
//!
//! A short-lived RS256 assertion signed with the service-account key is
//! exchanged at the key's `token_uri` for a bearer token. The token is cached
//! and only re-minted when it is about to expire, so every request shares the
//! credentials obtained at startup.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::credentials::ServiceAccountKey;
use crate::error::{ensure_success, SheetsError};

/// Read/write access to spreadsheets plus the drive metadata needed to find
/// a spreadsheet by name.
pub const SCOPES: [&str; 2] = [
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/drive",
];

/// Grant type for exchanging a signed assertion.
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime; Google rejects anything longer than one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Re-mint the access token this long before it expires.
const REFRESH_MARGIN_SECS: i64 = 60;

/// Claims of the signed assertion sent to the token endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    value: String,
    expires_at: i64,
}

/// Mints and caches access tokens for one service account.
pub struct TokenProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    /// Parse the key's private PEM up front so a bad key fails at startup.
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Result<Self, SheetsError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        Ok(Self {
            key,
            encoding_key,
            http,
            cached: Mutex::new(None),
        })
    }

    /// Sign an assertion issued at `now` (UTC Unix seconds).
    pub fn sign_assertion(&self, now: i64) -> Result<String, SheetsError> {
        let claims = AssertionClaims {
            iss: self.key.client_email.clone(),
            scope: SCOPES.join(" "),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Return a valid access token, fetching a new one only when the cached
    /// token is missing or about to expire.
    pub async fn access_token(&self) -> Result<String, SheetsError> {
        let mut cached = self.cached.lock().await;
        let now = Utc::now().timestamp();

        if let Some(token) = cached.as_ref() {
            if token.expires_at - REFRESH_MARGIN_SECS > now {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.fetch(now).await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    async fn fetch(&self, now: i64) -> Result<CachedToken, SheetsError> {
        let assertion = self.sign_assertion(now)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;
        let body: TokenResponse = ensure_success(response).await?.json().await?;

        tracing::debug!(
            client_email = %self.key.client_email,
            expires_in = body.expires_in,
            "Obtained spreadsheet access token"
        );

        Ok(CachedToken {
            value: body.access_token,
            expires_at: now + body.expires_in,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
