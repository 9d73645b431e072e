//! The optional value and its synchronous combinators
//!
//! An `Optional<T>` is decided once, at construction, and never changes.
//! Every combinator consumes or borrows the value and hands back a new one.
//! Absent results are always built from [`EMPTY`].

use std::fmt;

use crate::{EmptyOptional, Nullish, OptionalError, OptionalResult, EMPTY, EMPTY_STRING};

const STRING_PREFIX: &str = "Optional";

/// A value that may or may not be present
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// Holds a value
    Present(T),
    /// Holds nothing
    Empty,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        EMPTY.cast()
    }
}

impl<T> Optional<T> {
    /// Wrap raw input, mapping either sentinel to empty.
    ///
    /// This is the presence test shared by `of_nullish` and `map`.
    #[inline]
    pub(crate) fn from_raw(raw: Nullish<T>) -> Self {
        match raw {
            Nullish::Value(v) => Optional::Present(v),
            Nullish::Null | Nullish::Undefined => EMPTY.cast(),
        }
    }

    /// Take the value, failing with `NotPresent` when absent
    pub fn get(self) -> OptionalResult<T> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Empty => Err(OptionalError::NotPresent),
        }
    }

    /// Does this hold a value?
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Is this the empty optional?
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// `self` if present, otherwise `other`
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Present(_) => self,
            Optional::Empty => other,
        }
    }

    /// The value, or `default` when absent
    pub fn or_else(self, default: T) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => default,
        }
    }

    /// The value, or whatever `supplier` returns when absent.
    ///
    /// `supplier` is not called when a value is present.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => supplier(),
        }
    }

    /// The value, or the caller's own error when absent
    pub fn or_else_throw<E>(self, error: E) -> Result<T, E> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Empty => Err(error),
        }
    }

    /// Run `callback` on the value if there is one
    pub fn if_present<F>(&self, callback: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(v) = self {
            callback(v);
        }
    }

    /// Run exactly one of `callback` (present) or `empty_action` (absent)
    pub fn if_present_or_else<F, G>(&self, callback: F, empty_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Optional::Present(v) => callback(v),
            Optional::Empty => empty_action(),
        }
    }

    /// Keep the value only if `predicate` accepts it.
    ///
    /// `predicate` is not called when absent.
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self {
            Optional::Present(v) => predicate(v),
            Optional::Empty => false,
        };
        if keep {
            self
        } else {
            EMPTY.cast()
        }
    }

    /// Transform the value and re-test the result for presence.
    ///
    /// The mapper's output goes through the same check as `of_nullish`, so a
    /// mapper returning `Nullish::Null`, `Nullish::Undefined` or `None`
    /// produces an empty optional. Returning a bare `Option` or `Nullish`
    /// needs the target type spelled out, e.g. `map::<u32, _, _>`.
    pub fn map<R, U, F>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> U,
        U: Into<Nullish<R>>,
    {
        match self {
            Optional::Present(v) => Optional::from_raw(mapper(v).into()),
            Optional::Empty => EMPTY.cast(),
        }
    }

    /// Chain into another optional without nesting
    pub fn flat_map<R, F>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Optional::Present(v) => mapper(v),
            Optional::Empty => EMPTY.cast(),
        }
    }

    /// Borrow the value inside
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Empty => EMPTY.cast(),
        }
    }

    /// Raw held value, without the error path of `get`
    #[inline]
    pub fn value_of(&self) -> Option<&T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Empty => None,
        }
    }

    /// Convert into a std `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Empty => None,
        }
    }

    /// String form with caller-supplied rendering of the value
    pub fn to_locale_string<F>(&self, render: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            Optional::Present(v) => format!("{}[{}]", STRING_PREFIX, render(v)),
            Optional::Empty => EMPTY_STRING.to_string(),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => EMPTY.cast(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(v) => write!(f, "{}[{}]", STRING_PREFIX, v),
            Optional::Empty => fmt::Display::fmt(&EmptyOptional, f),
        }
    }
}
