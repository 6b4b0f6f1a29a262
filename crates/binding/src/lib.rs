//! Request binding for omittable values
//!
//! Turns raw request query strings into `Omittable` parameters so handlers can
//! tell "not sent" from "sent without a value":
//!
//! ```
//! use omittable_binding::QueryParams;
//! use omittable_core::Omittable;
//!
//! let params = QueryParams::parse("?myId");
//! assert_eq!(params.bind::<u64>("myId").unwrap(), Omittable::of(None));
//! assert_eq!(params.bind::<u64>("other").unwrap(), Omittable::absent());
//! ```
//!
//! - QueryParams: decoded query string with `bind`/`bind_str`/`raw`
//! - BindConfig: binding configuration (serde + TOML)
//! - BindError: error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod query;

pub use config::{BindConfig, DuplicatePolicy};
pub use error::{BindError, Result};
pub use query::QueryParams;
