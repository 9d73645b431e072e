//! Canonical empty optional
//!
//! Absence carries no payload, so a single type-erased value stands in for
//! every `Optional<T>::Empty`. It is zero-sized and `'static`; threads share
//! it without synchronization.

use std::fmt;

use crate::Optional;

/// The type-erased absent optional
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyOptional;

/// The one empty instance
pub const EMPTY: EmptyOptional = EmptyOptional;

/// String form of an absent optional
pub const EMPTY_STRING: &str = "Optional.empty";

impl EmptyOptional {
    /// Re-specialize for an element type
    #[inline]
    pub const fn cast<T>(self) -> Optional<T> {
        Optional::Empty
    }
}

impl<T> From<EmptyOptional> for Optional<T> {
    #[inline]
    fn from(empty: EmptyOptional) -> Self {
        empty.cast()
    }
}

impl<T> PartialEq<EmptyOptional> for Optional<T> {
    fn eq(&self, _other: &EmptyOptional) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for EmptyOptional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EMPTY_STRING)
    }
}
