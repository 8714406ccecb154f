//! The curry engine: partial application of fixed-arity functions.
//!
//! A curried function collects arguments over any number of calls. While
//! fewer than `arity` arguments have been supplied, each call returns a new
//! continuation carrying everything supplied so far. The call that reaches
//! (or passes) the arity invokes the target with *all* accumulated
//! arguments, including any beyond the arity.
//!
//! Targets take their arguments as a `Vec<A>`, so one engine serves every
//! arity, including functions that accept a variable number of arguments.
//!
//! # Design Decisions
//!
//! The target is shared between continuations through a reference counter
//! (`Rc`, or `Arc` with the `arc` feature). A call never mutates the curried
//! function it is made on: it copies the accumulated arguments and builds a
//! fresh continuation, so partial applications can be reused freely.
//!
//! # Examples
//!
//! ```
//! use listmonad::compose::{Application, Curry, curry};
//!
//! let sum3 = |arguments: Vec<i32>| {
//!     let [first, second, third, ..] = arguments[..] else {
//!         return 0;
//!     };
//!     first + second + third
//! };
//!
//! let add = curry(3, sum3);
//! let result = add
//!     .call([1])
//!     .call([2])
//!     .and_then(|application| application.call([3]))
//!     .and_then(Application::into_result);
//! assert_eq!(result, Ok(6));
//!
//! // Configuration style: fix the arity first, the function later.
//! let ternary = Curry::arity(3);
//! assert_eq!(ternary.curry(sum3).call([1, 2, 3]).complete(), Some(6));
//! ```

use std::fmt;

use super::error::CurryError;

// =============================================================================
// Shared Target
// =============================================================================

/// A target function the curry engine can invoke.
///
/// With the `arc` feature the target must be `Send + Sync`, which makes
/// curried functions shareable between threads.
#[cfg(feature = "arc")]
pub trait CurryTarget<A, R>: Fn(Vec<A>) -> R + Send + Sync {}

#[cfg(feature = "arc")]
impl<A, R, F> CurryTarget<A, R> for F where F: Fn(Vec<A>) -> R + Send + Sync {}

/// A target function the curry engine can invoke.
///
/// With the `arc` feature the target must be `Send + Sync`, which makes
/// curried functions shareable between threads.
#[cfg(not(feature = "arc"))]
pub trait CurryTarget<A, R>: Fn(Vec<A>) -> R {}

#[cfg(not(feature = "arc"))]
impl<A, R, F> CurryTarget<A, R> for F where F: Fn(Vec<A>) -> R {}

/// Reference-counted smart pointer sharing a target between continuations.
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
type ReferenceCounter<T> = std::rc::Rc<T>;

type SharedTarget<A, R> = ReferenceCounter<dyn CurryTarget<A, R>>;

// =============================================================================
// Curried
// =============================================================================

/// A function waiting for more arguments.
///
/// Created by [`curry`] or [`Curry::curry`]. Calling it with
/// [`Curried::call`] never changes it, so the same partial application can be
/// completed in several different ways.
///
/// # Examples
///
/// ```
/// use listmonad::compose::curry;
///
/// let join = curry(2, |words: Vec<&str>| words.join(" "));
/// let greet = join.call(["hello"]).partial().unwrap();
///
/// assert_eq!(greet.call(["world"]).complete(), Some("hello world".to_string()));
/// assert_eq!(greet.call(["there"]).complete(), Some("hello there".to_string()));
/// assert_eq!(greet.accumulated(), &["hello"]);
/// ```
pub struct Curried<A, R> {
    arity: usize,
    target: SharedTarget<A, R>,
    accumulated: Vec<A>,
}

impl<A, R> Curried<A, R> {
    /// Returns the number of arguments the target needs.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the arguments supplied so far.
    #[inline]
    pub fn accumulated(&self) -> &[A] {
        &self.accumulated
    }

    /// Returns how many more arguments are needed before the target runs.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.accumulated.len())
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Supplies zero or more arguments.
    ///
    /// Returns [`Application::Complete`] with the target's result once the
    /// accumulated arguments reach the arity, otherwise a new
    /// [`Application::Partial`] continuation. Supplying no arguments yields an
    /// equivalent continuation.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmonad::compose::curry;
    ///
    /// let sum = curry(2, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
    ///
    /// // Over-supply: every argument reaches the target.
    /// assert_eq!(sum.call([1, 2, 3]).complete(), Some(6));
    ///
    /// // Zero arguments: nothing changes.
    /// let same = sum.call([]).partial().unwrap();
    /// assert_eq!(same.remaining(), 2);
    /// ```
    pub fn call<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.accumulated.clone();
        accumulated.extend(arguments);
        accumulate(self.arity, ReferenceCounter::clone(&self.target), accumulated)
    }

    /// Supplies a single argument.
    #[inline]
    pub fn call_one(&self, argument: A) -> Application<A, R> {
        self.call(std::iter::once(argument))
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            target: ReferenceCounter::clone(&self.target),
            accumulated: self.accumulated.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Application
// =============================================================================

/// The outcome of supplying arguments to a [`Curried`] function.
#[derive(Debug, Clone)]
pub enum Application<A, R> {
    /// Not enough arguments yet; holds the continuation.
    Partial(Curried<A, R>),
    /// The target has run; holds its result.
    Complete(R),
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the target has run.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the target's result, if it has run.
    #[inline]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the continuation, if more arguments are needed.
    #[inline]
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns the target's result.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Incomplete`] if more arguments are needed.
    pub fn into_result(self) -> Result<R, CurryError> {
        match self {
            Self::Complete(result) => Ok(result),
            Self::Partial(curried) => Err(CurryError::Incomplete {
                arity: curried.arity,
                supplied: curried.accumulated.len(),
            }),
        }
    }
}

impl<A: Clone, R> Application<A, R> {
    /// Supplies more arguments to a partial application.
    ///
    /// The application itself is left untouched, so a completed result is
    /// still available after a rejected call.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyComplete`] if the target has already run.
    ///
    /// # Examples
    ///
    /// ```
    /// use listmonad::compose::{CurryError, curry};
    ///
    /// let double = curry(1, |arguments: Vec<i32>| arguments.iter().sum::<i32>() * 2);
    /// let done = double.call([21]);
    ///
    /// assert_eq!(done.call([1]).err(), Some(CurryError::AlreadyComplete));
    /// assert_eq!(done.complete(), Some(42));
    /// ```
    pub fn call<I>(&self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Partial(curried) => Ok(curried.call(arguments)),
            Self::Complete(_) => Err(CurryError::AlreadyComplete),
        }
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Builds the next step of a partial application.
fn accumulate<A, R>(
    arity: usize,
    target: SharedTarget<A, R>,
    accumulated: Vec<A>,
) -> Application<A, R> {
    if accumulated.len() >= arity {
        Application::Complete((*target)(accumulated))
    } else {
        Application::Partial(Curried {
            arity,
            target,
            accumulated,
        })
    }
}

/// Curry configured with an arity but no function yet.
///
/// `Curry::arity(n).curry(f)` is equivalent to `curry(n, f)`.
///
/// # Examples
///
/// ```
/// use listmonad::compose::{Curry, curry};
///
/// let binary = Curry::arity(2);
/// let product = binary.curry(|arguments: Vec<u32>| arguments.iter().product::<u32>());
/// let same = curry(2, |arguments: Vec<u32>| arguments.iter().product::<u32>());
///
/// assert_eq!(product.call([3, 4]).complete(), same.call([3, 4]).complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Curry {
    arity: usize,
}

impl Curry {
    /// Fixes the number of arguments the curried function will need.
    #[inline]
    pub const fn arity(arity: usize) -> Self {
        Self { arity }
    }

    /// Returns the configured arity.
    #[inline]
    pub const fn number_of_arguments(&self) -> usize {
        self.arity
    }

    /// Curries `target` with the configured arity.
    pub fn curry<A, R, F>(self, target: F) -> Curried<A, R>
    where
        F: CurryTarget<A, R> + 'static,
    {
        let target: SharedTarget<A, R> = ReferenceCounter::new(target);
        Curried {
            arity: self.arity,
            target,
            accumulated: Vec::new(),
        }
    }
}

/// Curries `target`, a function of `arity` arguments.
///
/// The returned function accepts its arguments over any number of calls to
/// [`Curried::call`]. An arity of zero makes the very first call, even with
/// no arguments, invoke the target.
///
/// # Examples
///
/// ```
/// use listmonad::compose::curry;
///
/// let sum3 = curry(3, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
///
/// let step = sum3.call([1, 2]).partial().unwrap();
/// assert_eq!(step.call([3]).complete(), Some(6));
///
/// let constant = curry(0, |_: Vec<i32>| "ready");
/// assert_eq!(constant.call([]).complete(), Some("ready"));
/// ```
pub fn curry<A, R, F>(arity: usize, target: F) -> Curried<A, R>
where
    F: CurryTarget<A, R> + 'static,
{
    Curry::arity(arity).curry(target)
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Curried<i32, i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Curried<i32, i32>: Send, Sync);
