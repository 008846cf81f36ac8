//! Adapter traits the form handler depends on.
//!
//! Both are object-safe (`async_trait`) so the API state can hold them as
//! `Arc<dyn ...>` and tests can inject recording or failing doubles.

use async_trait::async_trait;

use crate::error::CoreError;

/// Appends submission rows to the system of record.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Append `row` as the new last row.
    async fn append(&self, row: &[String]) -> Result<(), CoreError>;
}

/// Sends the applicant confirmation email.
#[async_trait]
pub trait ConfirmationSender: Send + Sync {
    /// Send the confirmation to `recipient`, greeting them as `display_name`.
    async fn send(&self, recipient: &str, display_name: &str) -> Result<(), CoreError>;
}
