//! Route trees, mounted at the root by [`crate::router::build_app_router`].
//!
//! ```text
//! /health          GET   service health
//! /                GET   application form
//! /                POST  submit application, 303 to /success
//! /success         GET   confirmation page
//! ```

pub mod health;
pub mod intake;
