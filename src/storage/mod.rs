//! Data persistence and file operations

pub mod pages;
pub mod snapshots;

pub use pages::*;
pub use snapshots::*;
