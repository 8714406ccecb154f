//! Error types for the curry engine.

/// Represents misuse of an [`Application`](super::Application).
///
/// The curry engine itself never fails: under-supplied calls return a
/// continuation and over-supplied calls forward every argument. These errors
/// only arise when a caller treats a finished application as unfinished or
/// the other way round.
///
/// # Examples
///
/// ```rust
/// use listmonad::compose::{CurryError, curry};
///
/// let add = curry(2, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
/// let error = add.call([1]).into_result().unwrap_err();
/// assert_eq!(error, CurryError::Incomplete { arity: 2, supplied: 1 });
/// assert_eq!(
///     error.to_string(),
///     "curried function needs 2 arguments but only 1 were supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurryError {
    /// More arguments were supplied to an application whose target function
    /// has already been invoked.
    AlreadyComplete,
    /// A result was requested before enough arguments were supplied.
    Incomplete {
        /// The number of arguments the target function needs.
        arity: usize,
        /// The number of arguments accumulated so far.
        supplied: usize,
    },
}

impl std::fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyComplete => write!(
                formatter,
                "curried function already invoked; its result cannot take more arguments"
            ),
            Self::Incomplete { arity, supplied } => write!(
                formatter,
                "curried function needs {arity} arguments but only {supplied} were supplied"
            ),
        }
    }
}

impl std::error::Error for CurryError {}
