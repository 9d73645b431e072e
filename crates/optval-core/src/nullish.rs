//! Raw factory input
//!
//! Rust has no null, so the two sentinels a factory has to judge are spelled
//! out explicitly:
//! - `Null`: the value was deliberately cleared
//! - `Undefined`: the value was never supplied
//!
//! Plain values convert with `From<T>`, and `Option<T>` maps `None` to `Null`.

use std::fmt;

/// A value that may be one of the two sentinels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nullish<T> {
    /// A real value
    Value(T),
    /// The "null" sentinel
    Null,
    /// The "missing" sentinel
    Undefined,
}

impl<T> Nullish<T> {
    /// Is this a real value?
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Nullish::Value(_))
    }

    /// Is this either sentinel?
    #[inline]
    pub fn is_nullish(&self) -> bool {
        !self.is_value()
    }

    /// Which sentinel this is, if any
    #[inline]
    pub fn sentinel(&self) -> Option<SentinelKind> {
        match self {
            Nullish::Value(_) => None,
            Nullish::Null => Some(SentinelKind::Null),
            Nullish::Undefined => Some(SentinelKind::Undefined),
        }
    }

    /// Drop the sentinel distinction
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullish::Value(v) => Some(v),
            Nullish::Null | Nullish::Undefined => None,
        }
    }
}

impl<T> From<T> for Nullish<T> {
    #[inline]
    fn from(value: T) -> Self {
        Nullish::Value(value)
    }
}

impl<T> From<Option<T>> for Nullish<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullish::Value(v),
            None => Nullish::Null,
        }
    }
}

/// Category of input a factory refused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentinelKind {
    /// Either sentinel, rejected by the strict factory
    Nullish,
    /// Only the "null" sentinel
    Null,
    /// Only the "missing" sentinel
    Undefined,
}

impl SentinelKind {
    /// Lowercase name used in diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            SentinelKind::Nullish => "nullish",
            SentinelKind::Null => "null",
            SentinelKind::Undefined => "undefined",
        }
    }
}

impl fmt::Display for SentinelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
