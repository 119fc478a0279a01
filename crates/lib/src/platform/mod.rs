//! Platform-specific filesystem helpers.

pub mod owner;

pub use owner::copy_owner;
