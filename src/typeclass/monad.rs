//! Monad type class - sequencing computations within a container.
//!
//! This module provides the [`Monad`] trait: the capability set
//! (`insert`, `map`, `amap`, `bind`, `join`) that every monadic container
//! implements, together with behaviour derived only from that set
//! (`then`, `then_map`, `then_bind`, `apply`).
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::insert(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::insert) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use listmonad::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .bind(parse_positive)
//!     .bind(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::higher::TypeConstructor;

/// The result of a single step handed to [`Monad::then`].
///
/// A step either produces a plain value, which `then` wraps with
/// [`Monad::insert`], or a whole container, which `then` splices in as
/// `bind` would. Tagging the case at the call site keeps `then` free of any
/// failure-driven guessing: an error produced inside the step is part of the
/// value the step returns and travels on unchanged.
///
/// # Examples
///
/// ```rust
/// use listmonad::typeclass::{Monad, Then};
///
/// let doubled = Some(21).then(|n| Then::Plain(n * 2));
/// assert_eq!(doubled, Some(42));
///
/// let filtered = Some(21).then(|n| Then::Wrapped((n > 100).then_some(n)));
/// assert_eq!(filtered, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Then<B, M> {
    /// A plain value, lifted with `insert`.
    Plain(B),
    /// A container, flattened into the result.
    Wrapped(M),
}

impl<B, M> Then<B, M> {
    /// Returns `true` if the step produced a plain value.
    #[inline]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }

    /// Returns `true` if the step produced a container.
    #[inline]
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }
}

/// A type class for containers that support sequencing of computations.
///
/// Implementors provide `insert`, `map`, `amap` and `bind`; `join` has a
/// default derived from `bind` which multi-valued containers usually
/// override. Functions are taken as `FnMut` because a container holding
/// several values calls them once per value.
///
/// # Laws
///
/// ```text
/// Self::insert(a).bind(f) == f(a)
/// m.bind(Self::insert) == m
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use listmonad::list_monad;
/// use listmonad::typeclass::Monad;
///
/// let pairs = list_monad![1, 2].bind(|n| list_monad![n, n * 10]);
/// assert_eq!(pairs, list_monad![1, 10, 2, 20]);
/// ```
pub trait Monad: TypeConstructor + Sized {
    /// Wraps a single value as the minimal container.
    ///
    /// The value is neither inspected nor transformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::typeclass::Monad;
    ///
    /// let x: Option<i32> = <Option<()> as Monad>::insert(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn insert<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the wrapped value(s), preserving the shape of
    /// the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list_monad;
    /// use listmonad::typeclass::Monad;
    ///
    /// assert_eq!(list_monad![1, 2, 3].map(|n| n + 1), list_monad![2, 3, 4]);
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies every wrapped function to every value in `values`.
    ///
    /// `self` holds the functions. How functions and values are combined is
    /// up to each container: `Option` applies its single function to its
    /// single value, `ListMonad` takes the Cartesian product.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::typeclass::Monad;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.amap(Some(5)), Some(6));
    /// ```
    fn amap<V, B>(self, values: Self::WithType<V>) -> Self::WithType<B>
    where
        Self::Inner: FnMut(V) -> B,
        V: Clone;

    /// Applies a container-returning function and flattens one level.
    ///
    /// In Haskell this is `>>=`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::typeclass::Monad;
    ///
    /// let x = Some(5).bind(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(x, None);
    /// ```
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Flattens one level of nesting.
    ///
    /// The values held must themselves be containers of the same kind. A
    /// container of plain values is rejected by the type checker rather than
    /// wrapped implicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::typeclass::Monad;
    ///
    /// let nested: Option<Option<i32>> = Some(Some(42));
    /// let flat: Option<i32> = nested.join();
    /// assert_eq!(flat, Some(42));
    /// ```
    ///
    /// A value that is not nested cannot be joined:
    ///
    /// ```compile_fail
    /// use listmonad::typeclass::Monad;
    ///
    /// let flat: Option<i32> = Some(5).join();
    /// ```
    #[inline]
    fn join<B>(self) -> Self::WithType<B>
    where
        Self::Inner: TypeConstructor<Inner = B> + Into<Self::WithType<B>>,
    {
        self.bind::<B, _>(|nested| nested.into())
    }

    /// Continues with a plain transformation. Same as [`Monad::map`].
    #[inline]
    fn then_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        self.map::<B, F>(function)
    }

    /// Continues with a container-returning transformation. Same as
    /// [`Monad::bind`].
    #[inline]
    fn then_bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.bind::<B, F>(function)
    }

    /// Continues with a step that decides per value whether it produced a
    /// plain value or a whole container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list_monad;
    /// use listmonad::typeclass::{Monad, Then};
    ///
    /// let result = list_monad![1, 2, 3].then(|n| {
    ///     if n % 2 == 0 {
    ///         Then::Wrapped(list_monad![n, n])
    ///     } else {
    ///         Then::Plain(n)
    ///     }
    /// });
    /// assert_eq!(result, list_monad![1, 2, 2, 3]);
    /// ```
    fn then<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Then<B, Self::WithType<B>>,
    {
        self.bind::<B, _>(move |value| match function(value) {
            Then::Plain(result) => Self::insert(result),
            Then::Wrapped(container) => container,
        })
    }

    /// Applies a container of functions to a container of values.
    ///
    /// Constructor-level alias for [`Monad::amap`], convenient for
    /// applicative-style code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list::ListMonad;
    /// use listmonad::list_monad;
    /// use listmonad::typeclass::Monad;
    ///
    /// let functions = list_monad![
    ///     (|x: i32| x + 1) as fn(i32) -> i32,
    ///     (|x: i32| x * 2) as fn(i32) -> i32,
    /// ];
    /// let result = ListMonad::apply(functions, list_monad![10, 20]);
    /// assert_eq!(result, list_monad![11, 21, 20, 40]);
    /// ```
    #[inline]
    fn apply<V, B>(functions: Self, values: Self::WithType<V>) -> Self::WithType<B>
    where
        Self::Inner: FnMut(V) -> B,
        V: Clone,
    {
        functions.amap::<V, B>(values)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn insert<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Some(value) => Some(function(value)),
            None => None,
        }
    }

    #[inline]
    fn amap<V, B>(self, values: Option<V>) -> Option<B>
    where
        A: FnMut(V) -> B,
        V: Clone,
    {
        match (self, values) {
            (Some(mut function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}
