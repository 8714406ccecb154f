//! Kleisli composition.
//!
//! A Kleisli function maps a bare value to a monadic container:
//!
//! ```text
//! f :: a -> m b
//! ```
//!
//! Two of them compose by running the first and binding the second over its
//! result:
//!
//! ```text
//! (f >=> g)(a) = f(a).bind(g)
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `(f >=> g) >=> h == f >=> (g >=> h)`
//! - **Left Identity**: `insert >=> f == f`
//! - **Right Identity**: `f >=> insert == f`

use crate::typeclass::Monad;

/// Composes two Kleisli functions, running `first` then `second`.
///
/// The result maps `a` to `first(a).bind(second)`. Because `bind` calls
/// `second` once per value held by the container, both functions are
/// `FnMut`; the composed function is `FnMut` as well and can be called any
/// number of times.
///
/// # Examples
///
/// ```
/// use listmonad::compose::kleisli_compose;
///
/// fn add_one(value: i32) -> Option<i32> {
///     Some(value + 1)
/// }
///
/// fn fail_if_zero(value: i32) -> Option<i32> {
///     if value == 0 { None } else { Some(value) }
/// }
///
/// let mut checked = kleisli_compose(add_one, fail_if_zero);
/// assert_eq!(checked(0), Some(1));
/// assert_eq!(checked(-1), None);
/// ```
///
/// With the List monad every intermediate result is explored:
///
/// ```
/// use listmonad::compose::kleisli_compose;
/// use listmonad::list::ListMonad;
/// use listmonad::list_monad;
///
/// fn neighbours(value: i32) -> ListMonad<i32> {
///     list_monad![value - 1, value + 1]
/// }
///
/// let mut two_steps = kleisli_compose(neighbours, neighbours);
/// assert_eq!(two_steps(0), list_monad![-2, 0, 0, 2]);
/// ```
pub fn kleisli_compose<A, M, C, F, G>(
    mut first: F,
    mut second: G,
) -> impl FnMut(A) -> M::WithType<C>
where
    M: Monad,
    F: FnMut(A) -> M,
    G: FnMut(M::Inner) -> M::WithType<C>,
{
    move |value| first(value).bind::<C, _>(&mut second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(value: i32) -> Option<i32> {
        (value % 2 == 0).then_some(value / 2)
    }

    fn positive(value: i32) -> Option<i32> {
        (value > 0).then_some(value)
    }

    #[rstest]
    #[case(8, Some(4))]
    #[case(7, None)]
    #[case(-4, None)]
    fn composes_options(#[case] input: i32, #[case] expected: Option<i32>) {
        let mut composed = kleisli_compose(positive, half);
        assert_eq!(composed(input), expected);
    }

    #[rstest]
    fn composed_function_is_reusable() {
        let mut composed = kleisli_compose(half, half);
        assert_eq!(composed(8), Some(2));
        assert_eq!(composed(12), Some(3));
        assert_eq!(composed(6), None);
    }

    #[rstest]
    fn composition_is_associative_for_options() {
        let mut left = kleisli_compose(kleisli_compose(positive, half), half);
        let mut right = kleisli_compose(positive, kleisli_compose(half, half));
        for value in [-8, 0, 3, 8, 12, 16] {
            assert_eq!(left(value), right(value));
        }
    }

    #[rstest]
    fn insert_is_a_unit_on_both_sides() {
        let mut left = kleisli_compose(<Option<()> as Monad>::insert, half);
        let mut right = kleisli_compose(half, <Option<()> as Monad>::insert);
        for value in [1, 2, 3, 4] {
            assert_eq!(left(value), half(value));
            assert_eq!(right(value), half(value));
        }
    }

    #[rstest]
    fn changes_value_type_through_the_chain() {
        let mut describe = kleisli_compose(half, |value: i32| Some(value.to_string()));
        assert_eq!(describe(10), Some("5".to_string()));
    }
}
