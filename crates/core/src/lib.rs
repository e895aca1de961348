//! Shared domain types for the lunchbox order service.
//!
//! Pure types only: no database or HTTP dependencies live here.

pub mod error;
pub mod health;
pub mod types;
