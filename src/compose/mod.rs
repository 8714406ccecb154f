//! Function composition utilities.
//!
//! # Overview
//!
//! - [`identity`]: returns its argument unchanged
//! - [`curry`] / [`Curry`]: partial application of fixed-arity functions
//! - [`kleisli_compose`]: composition of functions returning monadic containers
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use listmonad::compose::curry;
//!
//! let add = curry(2, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
//! let add_five = add.call([5]).partial().unwrap();
//! assert_eq!(add_five.call([3]).complete(), Some(8));
//! ```
//!
//! ## Kleisli Composition
//!
//! ```
//! use listmonad::compose::kleisli_compose;
//!
//! let parse = |text: &str| text.parse::<i32>().ok();
//! let reciprocal = |value: i32| (value != 0).then(|| 1.0 / f64::from(value));
//!
//! let mut parse_reciprocal = kleisli_compose(parse, reciprocal);
//! assert_eq!(parse_reciprocal("4"), Some(0.25));
//! assert_eq!(parse_reciprocal("0"), None);
//! assert_eq!(parse_reciprocal("x"), None);
//! ```
//!
//! # Mathematical Background
//!
//! ## Currying
//!
//! ```text
//! curry(3, f)(a)(b)(c) = curry(3, f)(a, b)(c) = f(a, b, c)
//! ```
//!
//! ## Kleisli Composition
//!
//! ```text
//! (f >=> g)(a) = f(a) >>= g
//! ```
//!
//! # Laws
//!
//! - **Kleisli Associativity**: `(f >=> g) >=> h == f >=> (g >=> h)`
//! - **Identity**: `identity(x) == x`

mod curry;
mod error;
mod kleisli;
mod utils;

pub use curry::{Application, Curried, Curry, CurryTarget, curry};
pub use error::CurryError;
pub use kleisli::kleisli_compose;
pub use utils::identity;
