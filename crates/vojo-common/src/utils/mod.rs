//! Common utilities used throughout vojo.
//!
//! - [`error`] - Error types like [`Error`] and the crate-wide [`Result`]
//! - [`hash`] - Fast hashing with FxHash (non-cryptographic)

pub mod error;
pub mod hash;

pub use error::{Error, Result};
