//! The List monad: computations with several possible results.
//!
//! [`ListMonad`] holds every result a non-deterministic computation could
//! produce, in order. Binding a function that itself returns several results
//! expands each value into all of them, so a chain of `bind`s explores every
//! combination.
//!
//! # Examples
//!
//! ```rust
//! use listmonad::list::ListMonad;
//! use listmonad::list_monad;
//! use listmonad::typeclass::Monad;
//!
//! type Square = (i8, i8);
//!
//! // Every square a knight can jump to from `square` on an 8x8 board.
//! fn knight_moves((file, rank): Square) -> ListMonad<Square> {
//!     [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)]
//!         .into_iter()
//!         .map(|(df, dr)| (file + df, rank + dr))
//!         .filter(|&(f, r)| (0..8).contains(&f) && (0..8).contains(&r))
//!         .collect()
//! }
//!
//! let one_move = ListMonad::insert((0, 0)).bind(knight_moves);
//! assert_eq!(one_move, list_monad![(1, 2), (2, 1)]);
//!
//! let three_moves = ListMonad::insert((0, 0))
//!     .bind(knight_moves)
//!     .bind(knight_moves)
//!     .bind(knight_moves);
//! assert!(three_moves.iter().any(|&square| square == (1, 2)));
//! ```

mod list_monad;

pub use list_monad::{ListMonad, ListMonadIntoIterator, ListMonadIterator};

pub use crate::list_monad;

/// Creates a [`ListMonad`] from zero or more elements.
///
/// # Examples
///
/// ```rust
/// use listmonad::list::ListMonad;
/// use listmonad::list_monad;
///
/// let empty: ListMonad<i32> = list_monad![];
/// assert!(empty.is_empty());
///
/// let numbers = list_monad![1, 2, 3];
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! list_monad {
    () => {
        $crate::list::ListMonad::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::list::ListMonad::new(::std::vec![$($element),+])
    };
}
