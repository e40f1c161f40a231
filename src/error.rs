//! Error types for the graticule library.
//!
//! All failures are represented by the [`GraticuleError`] enum. There is no
//! I/O and no partial failure in this crate: every error is local,
//! synchronous, and surfaced immediately at shape construction or query
//! compilation time.
//!
//! # Examples
//!
//! ```
//! use graticule::error::{GraticuleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GraticuleError::invalid_shape("minY must not exceed maxY"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for graticule operations.
#[derive(Error, Debug)]
pub enum GraticuleError {
    /// A shape with malformed bounds or coordinates outside the configured
    /// world bounds. Raised at construction, never silently clamped.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// A spatial operation the compiler does not implement for the given
    /// shape type. Raised at compile time, never downgraded to a different
    /// operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An inconsistent or incomplete context configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for operations that may fail with [`GraticuleError`].
pub type Result<T> = std::result::Result<T, GraticuleError>;

impl GraticuleError {
    /// Create a new invalid-shape error.
    pub fn invalid_shape<S: Into<String>>(msg: S) -> Self {
        GraticuleError::InvalidShape(msg.into())
    }

    /// Create a new unsupported-operation error.
    pub fn unsupported_operation<S: Into<String>>(msg: S) -> Self {
        GraticuleError::UnsupportedOperation(msg.into())
    }

    /// Create a new invalid-configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        GraticuleError::InvalidConfig(msg.into())
    }
}
