//! optval Core - Optional values with explicit admission policies
//!
//! This crate defines:
//! - The raw factory input (`Nullish<T>`) with its two sentinels
//! - The optional value (`Optional<T>`) and its combinators, sync and async
//! - The canonical empty instance shared by every absent result
//! - Factories with null/undefined admission policies
//! - Construction diagnostics and the error taxonomy
//!
//! ```rust
//! use optval_core::{Nullish, Optional, OptionalError};
//!
//! let len = Optional::of("ab").unwrap().map(|s| s.len());
//! assert_eq!(len.get(), Ok(2));
//!
//! assert_eq!(Optional::<u8>::of_nullish(Nullish::Null).or_else(7), 7);
//! assert_eq!(
//!     Optional::<u8>::of_nullable(Nullish::Undefined),
//!     Err(OptionalError::Undefined)
//! );
//! ```

pub mod nullish;
pub mod empty;
pub mod optional;
mod deferred;
pub mod factory;
pub mod diagnostic;
pub mod error;

pub use nullish::*;
pub use empty::*;
pub use optional::*;
pub use diagnostic::DiagnosticConfig;
pub use error::*;
