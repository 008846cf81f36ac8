//! Google Sheets adapter for the intake service.
//!
//! - [`ServiceAccountKey`]: the service-account JSON key file.
//! - [`TokenProvider`]: mints and caches OAuth2 access tokens from that key.
//! - [`Worksheet`]: the spreadsheet/worksheet handle opened once at startup;
//!   implements [`loom_core::SubmissionSink`].

pub mod client;
pub mod credentials;
pub mod error;
pub mod token;

pub use client::{SheetsConfig, Worksheet};
pub use credentials::ServiceAccountKey;
pub use error::SheetsError;
pub use token::TokenProvider;
