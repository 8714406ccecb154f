//! Type class traits for monadic containers.
//!
//! - [`TypeConstructor`]: emulation of higher-kinded types through GATs
//! - [`Monad`]: the capability set every monadic container implements
//! - [`Then`]: tags the result of a step passed to [`Monad::then`]
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses a
//! Generic Associated Type so that [`Monad`] can describe "the same container
//! holding a different type", which is what `map`, `bind` and `join` return.
//!
//! # Examples
//!
//! ```rust
//! use listmonad::typeclass::{Monad, Then};
//!
//! fn halve(value: i32) -> Option<i32> {
//!     (value % 2 == 0).then_some(value / 2)
//! }
//!
//! assert_eq!(Some(8).bind(halve).bind(halve), Some(2));
//! assert_eq!(Some(6).bind(halve).bind(halve), None);
//!
//! // `then` accepts plain and container-returning steps through `Then`.
//! let result = Some(8)
//!     .then(|value| Then::Wrapped(halve(value)))
//!     .then(|value| Then::Plain(value + 1));
//! assert_eq!(result, Some(5));
//! ```

mod higher;
mod monad;

pub use higher::TypeConstructor;
pub use monad::{Monad, Then};
