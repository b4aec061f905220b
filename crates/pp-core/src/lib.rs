//! # pp-core
//!
//! Shared building blocks for the pulsar prior workspace:
//! - the error type and `Result` alias used by every crate
//! - parameter descriptions (name, sampling bounds, strict bounds)
//! - the [`Prior`] trait implemented by concrete prior distributions

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types.
pub mod error;
/// Core traits.
pub mod traits;
/// Parameter description types.
pub mod types;

pub use error::{Error, Result};
pub use traits::Prior;
pub use types::{Bounds, Parameter};

/// Workspace version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
