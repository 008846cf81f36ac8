#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use loom_api::router::build_app_router;
use loom_api::state::AppState;
use loom_core::{ConfirmationSender, CoreError, SubmissionSink};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Adapter doubles
// ---------------------------------------------------------------------------

/// Records every appended row; fails every call when `fail` is set.
#[derive(Default)]
pub struct RecordingSink {
    pub rows: Mutex<Vec<Vec<String>>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn append(&self, row: &[String]) -> Result<(), CoreError> {
        self.rows.lock().unwrap().push(row.to_vec());
        if self.fail {
            return Err(CoreError::Integration("spreadsheet unavailable".into()));
        }
        Ok(())
    }
}

/// Records every `(recipient, display_name)` pair; fails every call when
/// `fail` is set.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationSender for RecordingMailer {
    async fn send(&self, recipient: &str, display_name: &str) -> Result<(), CoreError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), display_name.to_string()));
        if self.fail {
            return Err(CoreError::Integration("relay unavailable".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

/// Build the full application router around the given adapters.
pub fn build_test_app(sheet: Arc<RecordingSink>, mailer: Arc<RecordingMailer>) -> Router {
    let state = AppState {
        sheet,
        mailer,
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a url-encoded form built from `fields`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Minimal `application/x-www-form-urlencoded` encoder for test bodies.
fn encode(raw: &str) -> String {
    let mut out = String::new();
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// A complete form submission, in column order, without `custom_size`.
pub fn complete_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full_name", "Sara Khan"),
        ("country", "United Arab Emirates"),
        ("state", "Dubai"),
        ("city", "Dubai"),
        ("abaya_size", "56"),
        ("followers", "12000"),
        ("reel_views", "4500"),
        ("instagram_id", "@sara.styles"),
        ("email", "a@b.com"),
        ("contact_number", "+971 50 123 4567"),
        ("queries", "Do you ship to Oman?"),
        ("days_required", "5"),
    ]
}
