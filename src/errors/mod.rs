//! Error types shared by the pool data collaborators

pub mod pool_error;

pub use pool_error::*;
