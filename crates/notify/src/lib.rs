//! Applicant confirmation email.
//!
//! - [`ConfirmationEmail`]: the fixed subject and greeting template.
//! - [`EmailDelivery`]: sends it over SMTP; implements
//!   [`loom_core::ConfirmationSender`].

pub mod email;
pub mod template;

pub use email::{EmailConfig, EmailDelivery, EmailError};
pub use template::{ConfirmationEmail, CONFIRMATION_SUBJECT};
