//! Integration tests for the curry engine.
//!
//! Tests for accumulating arguments across any number of calls until a
//! function's arity is reached.

#![cfg(feature = "compose")]

use listmonad::compose::{Application, Curried, Curry, CurryError, curry};
use rstest::rstest;

fn sum(arguments: Vec<i32>) -> i32 {
    arguments.iter().sum()
}

fn concatenate(arguments: Vec<&'static str>) -> String {
    arguments.concat()
}

/// Feeds `groups` to `curried` one call at a time.
fn feed(curried: &Curried<i32, i32>, groups: &[Vec<i32>]) -> Application<i32, i32> {
    let mut application = Application::Partial(curried.clone());
    for group in groups {
        application = application
            .call(group.iter().copied())
            .unwrap_or_else(|error| panic!("unexpected error: {error}"));
    }
    application
}

// =============================================================================
// Accumulation
// =============================================================================

mod accumulation_tests {
    use super::*;

    #[rstest]
    fn test_one_argument_per_call() {
        let sum3 = curry(3, sum);
        let result = sum3
            .call([1])
            .call([2])
            .and_then(|application| application.call([3]))
            .map(Application::complete);
        assert_eq!(result, Ok(Some(6)));
    }

    #[rstest]
    fn test_grouped_then_single() {
        let sum3 = curry(3, sum);
        let rest = sum3.call([1, 2]).partial().expect("two of three supplied");
        assert_eq!(rest.call([3]).complete(), Some(6));
    }

    #[rstest]
    fn test_all_at_once() {
        assert_eq!(curry(3, sum).call([1, 2, 3]).complete(), Some(6));
    }

    #[rstest]
    #[case(vec![vec![1], vec![2], vec![3]])]
    #[case(vec![vec![1, 2], vec![3]])]
    #[case(vec![vec![1], vec![2, 3]])]
    #[case(vec![vec![], vec![1], vec![], vec![2, 3]])]
    #[case(vec![vec![1, 2, 3]])]
    fn test_every_grouping_agrees(#[case] groups: Vec<Vec<i32>>) {
        let sum3 = curry(3, sum);
        assert_eq!(feed(&sum3, &groups).complete(), Some(6));
    }

    #[rstest]
    fn test_over_supply_passes_every_argument() {
        let sum2 = curry(2, sum);
        assert_eq!(sum2.call([1, 2, 3]).complete(), Some(6));
    }

    #[rstest]
    fn test_over_supply_after_partial() {
        let sum2 = curry(2, sum);
        let rest = sum2.call([1]).partial().expect("one of two supplied");
        assert_eq!(rest.call([2, 3, 4]).complete(), Some(10));
    }

    #[rstest]
    fn test_order_is_preserved() {
        let joined = curry(3, concatenate);
        let rest = joined.call(["a"]).partial().expect("one of three supplied");
        let rest = rest.call(["b"]).partial().expect("two of three supplied");
        assert_eq!(rest.call(["c"]).complete(), Some("abc".to_string()));
    }

    #[rstest]
    fn test_call_one_matches_call() {
        let sum2 = curry(2, sum);
        let rest = sum2.call_one(40).partial().expect("one of two supplied");
        assert_eq!(rest.call_one(2).complete(), Some(42));
    }
}

// =============================================================================
// Continuations
// =============================================================================

mod continuation_tests {
    use super::*;

    #[rstest]
    fn test_zero_arguments_is_a_no_op() {
        let sum2 = curry(2, sum);
        let same = sum2.call([]).partial().expect("nothing supplied");
        assert_eq!(same.arity(), 2);
        assert!(same.accumulated().is_empty());
        assert_eq!(same.call([4, 5]).complete(), Some(9));
    }

    #[rstest]
    fn test_partial_is_reusable() {
        let add = curry(2, sum);
        let add_ten = add.call([10]).partial().expect("one of two supplied");

        assert_eq!(add_ten.call([1]).complete(), Some(11));
        assert_eq!(add_ten.call([5]).complete(), Some(15));
        assert_eq!(add_ten.accumulated(), &[10]);
    }

    #[rstest]
    fn test_branches_do_not_share_arguments() {
        let sum3 = curry(3, sum);
        let base = sum3.call([1]).partial().expect("one of three supplied");
        let left = base.call([10]).partial().expect("two of three supplied");
        let right = base.call([100]).partial().expect("two of three supplied");

        assert_eq!(left.call([0]).complete(), Some(11));
        assert_eq!(right.call([0]).complete(), Some(101));
        assert_eq!(base.accumulated(), &[1]);
    }

    #[rstest]
    #[case(0, 4)]
    #[case(1, 3)]
    #[case(3, 1)]
    fn test_remaining_counts_down(#[case] supplied: usize, #[case] expected: usize) {
        let sum4 = curry(4, sum);
        let partial = sum4
            .call(std::iter::repeat_n(1, supplied))
            .partial()
            .expect("fewer than four supplied");
        assert_eq!(partial.remaining(), expected);
    }

    #[rstest]
    fn test_zero_arity_runs_on_first_call() {
        let constant = curry(0, |_: Vec<i32>| 7);
        assert_eq!(constant.call([]).complete(), Some(7));
    }
}

// =============================================================================
// Configuration style
// =============================================================================

mod configuration_tests {
    use super::*;

    #[rstest]
    fn test_configured_arity_matches_direct_curry() {
        let binary = Curry::arity(2);
        assert_eq!(binary.number_of_arguments(), 2);

        let configured = binary.curry(sum);
        let direct = curry(2, sum);

        for arguments in [[1, 2], [0, 0], [-5, 5]] {
            assert_eq!(
                configured.call(arguments).complete(),
                direct.call(arguments).complete()
            );
        }
    }

    #[rstest]
    fn test_one_configuration_curries_many_functions() {
        let binary = Curry::arity(2);
        let add = binary.curry(sum);
        let multiply = binary.curry(|arguments: Vec<i32>| arguments.iter().product::<i32>());

        assert_eq!(add.call([3, 4]).complete(), Some(7));
        assert_eq!(multiply.call([3, 4]).complete(), Some(12));
    }
}

// =============================================================================
// Errors
// =============================================================================

mod error_tests {
    use super::*;

    #[rstest]
    fn test_into_result_on_partial() {
        let sum3 = curry(3, sum);
        assert_eq!(
            sum3.call([1, 2]).into_result(),
            Err(CurryError::Incomplete {
                arity: 3,
                supplied: 2
            })
        );
    }

    #[rstest]
    fn test_complete_application_keeps_its_result() {
        let sum2 = curry(2, sum);
        let complete = sum2.call([20, 22]);

        assert_eq!(complete.call([1]).err(), Some(CurryError::AlreadyComplete));
        assert_eq!(complete.into_result(), Ok(42));
    }

    #[rstest]
    fn test_feeding_past_completion_keeps_the_result() {
        let sum2 = curry(2, sum);
        let mut application = Application::Partial(sum2);
        for group in [vec![1], vec![2], vec![3]] {
            application = match application.call(group) {
                Ok(next) => next,
                Err(_) => break,
            };
        }
        assert_eq!(application.complete(), Some(3));
    }

    #[rstest]
    fn test_calling_a_complete_application() {
        let sum1 = curry(1, sum);
        let complete = sum1.call([1]);
        assert!(complete.is_complete());
        assert_eq!(
            complete.call([2]).map(Application::complete),
            Err(CurryError::AlreadyComplete)
        );
    }

    #[rstest]
    fn test_target_errors_are_returned_unchanged() {
        let divide = curry(2, |arguments: Vec<i32>| {
            arguments[0]
                .checked_div(arguments[1])
                .ok_or_else(|| format!("cannot divide {} by zero", arguments[0]))
        });

        assert_eq!(divide.call([6, 3]).complete(), Some(Ok(2)));
        assert_eq!(
            divide.call([6, 0]).complete(),
            Some(Err("cannot divide 6 by zero".to_string()))
        );
    }
}
