//! Factory layer
//!
//! Four admission policies decide which sentinels become empty and which are
//! refused:
//!
//! | Factory          | Empty on           | Rejects            |
//! |------------------|--------------------|--------------------|
//! | `of`             | nothing            | `Null`, `Undefined`|
//! | `of_nullish`     | `Null`, `Undefined`| nothing            |
//! | `of_nullable`    | `Null`             | `Undefined`        |
//! | `of_undefinable` | `Undefined`        | `Null`             |
//!
//! Rejections fail immediately; no partially built optional escapes.

use tracing::debug;

use crate::{Nullish, Optional, OptionalError, OptionalResult, SentinelKind, EMPTY};

fn reject<T>(kind: SentinelKind) -> OptionalResult<Optional<T>> {
    let err = OptionalError::rejected(kind);
    debug!(rejected = %kind, "refused optional construction");
    Err(err)
}

impl<T> Optional<T> {
    /// Strict construction: both sentinels are refused with `Nullish`
    pub fn of(value: impl Into<Nullish<T>>) -> OptionalResult<Self> {
        match value.into() {
            Nullish::Value(v) => Ok(Optional::Present(v)),
            Nullish::Null | Nullish::Undefined => reject(SentinelKind::Nullish),
        }
    }

    /// Both sentinels become empty; never fails
    pub fn of_nullish(value: impl Into<Nullish<T>>) -> Self {
        Optional::from_raw(value.into())
    }

    /// `Null` becomes empty, `Undefined` is refused
    pub fn of_nullable(value: impl Into<Nullish<T>>) -> OptionalResult<Self> {
        match value.into() {
            Nullish::Undefined => reject(SentinelKind::Undefined),
            raw => Ok(Optional::from_raw(raw)),
        }
    }

    /// `Undefined` becomes empty, `Null` is refused
    pub fn of_undefinable(value: impl Into<Nullish<T>>) -> OptionalResult<Self> {
        match value.into() {
            Nullish::Null => reject(SentinelKind::Null),
            raw => Ok(Optional::from_raw(raw)),
        }
    }

    /// The canonical empty optional
    #[inline]
    pub const fn empty() -> Self {
        EMPTY.cast()
    }
}

/// Free-function form of [`Optional::of`]
pub fn of<T>(value: impl Into<Nullish<T>>) -> OptionalResult<Optional<T>> {
    Optional::of(value)
}

/// Free-function form of [`Optional::of_nullish`]
pub fn of_nullish<T>(value: impl Into<Nullish<T>>) -> Optional<T> {
    Optional::of_nullish(value)
}

/// Free-function form of [`Optional::of_nullable`]
pub fn of_nullable<T>(value: impl Into<Nullish<T>>) -> OptionalResult<Optional<T>> {
    Optional::of_nullable(value)
}

/// Free-function form of [`Optional::of_undefinable`]
pub fn of_undefinable<T>(value: impl Into<Nullish<T>>) -> OptionalResult<Optional<T>> {
    Optional::of_undefinable(value)
}

/// Free-function form of [`Optional::empty`]
pub const fn empty<T>() -> Optional<T> {
    Optional::empty()
}
