use std::sync::Arc;

use loom_core::{ConfirmationSender, SubmissionSink};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Spreadsheet handle, authenticated once at startup.
    pub sheet: Arc<dyn SubmissionSink>,
    /// Confirmation email sender.
    pub mailer: Arc<dyn ConfirmationSender>,
}
