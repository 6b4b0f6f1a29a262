//! Error types for omittable values
//!
//! Only extraction can fail: asking an absent value for its payload.
//! Every other operation on `Omittable` is total.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for omittable values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The value was absent where a payload was required
    #[error("No value present")]
    NoSuchElement,
}
