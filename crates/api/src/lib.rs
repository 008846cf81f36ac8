//! Loom intake server library.
//!
//! Exposes the building blocks (config, state, router, routes, handlers,
//! pages) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod routes;
pub mod state;
