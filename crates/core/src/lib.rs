//! Domain types for the Loom Abayas influencer intake service.
//!
//! - [`Submission`] and its fixed spreadsheet column order.
//! - [`SIZE_OPTIONS`] offered on the application form.
//! - [`CoreError`], the two-case failure taxonomy.
//! - [`SubmissionSink`] / [`ConfirmationSender`], the seams the form handler
//!   calls through so adapters can be swapped in tests.

pub mod error;
pub mod ports;
pub mod submission;

pub use error::CoreError;
pub use ports::{ConfirmationSender, SubmissionSink};
pub use submission::{Submission, COLUMNS, CUSTOM_SIZE_OPTION, SIZE_OPTIONS};
