//! Query parameter binding
//!
//! Request parameters have three observable states, which map onto
//! `Omittable<Option<T>>`:
//!
//! ```text
//! /person            -> Omittable::Absent
//! /person?name       -> Omittable::Present(None)
//! /person?name=Karl  -> Omittable::Present(Some("Karl"))
//! ```
//!
//! An empty value (`?name=`) binds like a bare name unless
//! `BindConfig::empty_as_null` is turned off.

use crate::config::{BindConfig, DuplicatePolicy};
use crate::error::{BindError, Result};
use omittable_core::Omittable;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};
use url::{form_urlencoded, Url};

/// One decoded `name[=value]` pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct Param {
    name: String,
    /// `None` when the pair had no `=` at all
    value: Option<String>,
}

/// Decoded query string, ready for binding
#[derive(Debug, Clone)]
pub struct QueryParams {
    params: Vec<Param>,
    config: BindConfig,
}

impl QueryParams {
    /// Parse a query string with the default configuration
    ///
    /// A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        Self::parse_with(query, BindConfig::default())
    }

    /// Parse a query string with an explicit configuration
    pub fn parse_with(query: &str, config: BindConfig) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: Vec<Param> = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| {
                let has_value = segment.contains('=');
                let (name, value) = form_urlencoded::parse(segment.as_bytes()).next()?;
                Some(Param {
                    name: name.into_owned(),
                    value: has_value.then(|| value.into_owned()),
                })
            })
            .collect();

        trace!(target: "omittable::binding", count = params.len(), "Parsed query parameters");
        QueryParams { params, config }
    }

    /// Parse the query component of a URL
    pub fn from_url(url: &Url, config: BindConfig) -> Self {
        Self::parse_with(url.query().unwrap_or_default(), config)
    }

    /// Number of parameter occurrences, repeats included
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the query had no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Check if a parameter occurs at all
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// The configuration used for binding
    pub fn config(&self) -> &BindConfig {
        &self.config
    }

    /// Look up the raw value of a parameter
    ///
    /// Returns `Absent` if the parameter does not occur, `Present(None)` if it
    /// occurs without a value (or with an empty one, see `empty_as_null`).
    pub fn raw(&self, name: &str) -> Omittable<Option<&str>> {
        let mut chosen = None;
        let mut occurrences = 0usize;
        for param in self.params.iter().filter(|p| p.name == name) {
            occurrences += 1;
            if chosen.is_none() || self.config.duplicates == DuplicatePolicy::Last {
                chosen = Some(param);
            }
        }

        let Some(param) = chosen else {
            return Omittable::absent();
        };

        if occurrences > 1 {
            debug!(
                target: "omittable::binding",
                parameter = name,
                occurrences,
                policy = ?self.config.duplicates,
                "Repeated query parameter, binding a single occurrence"
            );
        }

        match param.value.as_deref() {
            None => Omittable::of(None),
            Some("") if self.config.empty_as_null => Omittable::of(None),
            Some(value) => Omittable::of(Some(value)),
        }
    }

    /// Bind a parameter as a string
    pub fn bind_str(&self, name: &str) -> Omittable<Option<String>> {
        self.raw(name).map(|value| value.map(str::to_string))
    }

    /// Bind a parameter, parsing its value with `FromStr`
    ///
    /// # Errors
    ///
    /// Returns `BindError::InvalidValue` if the parameter has a value that
    /// does not parse as `T`. Absent and null parameters never fail.
    pub fn bind<T>(&self, name: &str) -> Result<Omittable<Option<T>>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.raw(name) {
            Omittable::Absent => {
                trace!(target: "omittable::binding", parameter = name, "Query parameter absent");
                Ok(Omittable::absent())
            }
            Omittable::Present(None) => {
                debug!(target: "omittable::binding", parameter = name, "Query parameter bound as null");
                Ok(Omittable::of(None))
            }
            Omittable::Present(Some(value)) => match value.parse::<T>() {
                Ok(parsed) => Ok(Omittable::of(Some(parsed))),
                Err(e) => {
                    debug!(target: "omittable::binding", parameter = name, value, error = %e, "Query parameter rejected");
                    Err(BindError::InvalidValue {
                        name: name.to_string(),
                        value: value.to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        }
    }
}
