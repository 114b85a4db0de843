//! Error types for the Erewhon content pipeline.
//!
//! This crate provides the error types shared by every Erewhon crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use erewhon_error::{ErewhonResult, PublishError};
//!
//! fn upload() -> ErewhonResult<String> {
//!     Err(PublishError::new("Upload quota exceeded"))?
//! }
//!
//! match upload() {
//!     Ok(id) => println!("Published: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod acquisition;
mod classification;
mod config;
mod error;
mod generation;
mod publish;

pub use acquisition::{AcquisitionError, AcquisitionErrorKind};
pub use classification::{ClassificationError, ClassificationErrorKind};
pub use config::ConfigError;
pub use error::{ErewhonError, ErewhonErrorKind, ErewhonResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use publish::PublishError;
