//! Core data types and structures

pub mod addresses;
pub mod pools;

pub use addresses::*;
pub use pools::*;
