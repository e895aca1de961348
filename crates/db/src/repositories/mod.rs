//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a pool or executor as the first argument.

pub mod order_repo;

pub use order_repo::OrderRepo;
