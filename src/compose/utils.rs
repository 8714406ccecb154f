//! The identity combinator.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition and a
/// convenient no-op wherever a function is required.
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use listmonad::compose::identity;
/// use listmonad::list_monad;
/// use listmonad::typeclass::Monad;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
///
/// // Mapping identity leaves a container unchanged.
/// assert_eq!(list_monad![1, 2, 3].map(identity), list_monad![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
