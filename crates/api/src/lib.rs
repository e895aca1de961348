//! Lunchbox order API library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! upstream client) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod recommendation;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
