//! # listmonad
//!
//! Monadic containers and the small set of combinators that go with them.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Monad`](typeclass::Monad) over a GAT-based
//!   [`TypeConstructor`](typeclass::TypeConstructor), with `Option` as a
//!   built-in instance
//! - **List Monad**: [`ListMonad`](list::ListMonad), a container holding every
//!   possible result of a non-deterministic computation
//! - **Function Composition**: [`curry`](compose::curry),
//!   [`kleisli_compose`](compose::kleisli_compose) and
//!   [`identity`](compose::identity)
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Monad` and `Then`
//! - `list`: `ListMonad` and the [`list_monad!`] macro
//! - `compose`: curry engine, Kleisli composition, identity
//! - `serde`: serialization of `ListMonad` as a plain sequence
//! - `arc`: thread-safe curried functions (`Arc` instead of `Rc`)
//! - `full`: enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use listmonad::prelude::*;
//!
//! // Every square a piece on a 1-D board of size 8 can reach in two moves.
//! fn moves(position: i32) -> ListMonad<i32> {
//!     [position - 1, position + 1]
//!         .into_iter()
//!         .filter(|square| (0..8).contains(square))
//!         .collect()
//! }
//!
//! let reachable = ListMonad::insert(0).bind(moves).bind(moves);
//! assert_eq!(reachable, list_monad![0, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use listmonad::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "compose")]
pub mod compose;
