//! The [`ListMonad`] container.
//!
//! `ListMonad` wraps a private `Vec` and never mutates it after
//! construction: `map`, `amap`, `bind` and `join` all build a new list.

use std::fmt;

use crate::typeclass::{Monad, TypeConstructor};

/// An ordered, immutable list of every result of a computation.
///
/// Order is significant and duplicates are kept. Two lists are equal when
/// they hold the same elements in the same order.
///
/// # Time Complexity
///
/// | Operation | Complexity    |
/// |-----------|---------------|
/// | `insert`  | O(1)          |
/// | `map`     | O(n)          |
/// | `join`    | O(total)      |
/// | `bind`    | O(total)      |
/// | `amap`    | O(n * m)      |
///
/// # Examples
///
/// ```rust
/// use listmonad::list::ListMonad;
/// use listmonad::list_monad;
/// use listmonad::typeclass::Monad;
///
/// let list = list_monad![1, 2, 3];
/// assert_eq!(list.clone().map(|x| x + 1), list_monad![2, 3, 4]);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListMonad<T> {
    elements: Vec<T>,
}

impl<T> ListMonad<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list::ListMonad;
    ///
    /// let list: ListMonad<i32> = ListMonad::empty();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a list holding `elements` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list::ListMonad;
    ///
    /// let list = ListMonad::new(vec!['a', 'b']);
    /// assert_eq!(list.as_slice(), &['a', 'b']);
    /// ```
    #[inline]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Creates a list containing exactly one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list::ListMonad;
    ///
    /// let list = ListMonad::insert(42);
    /// assert_eq!(list.as_slice(), &[42]);
    /// ```
    #[inline]
    pub fn insert(value: T) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns an iterator over references to the elements.
    ///
    /// Each call starts a new traversal from the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list_monad;
    ///
    /// let list = list_monad![1, 2, 3];
    /// assert_eq!(list.iter().sum::<i32>(), 6);
    /// assert_eq!(list.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> ListMonadIterator<'_, T> {
        ListMonadIterator {
            inner: self.elements.iter(),
        }
    }

    /// Maps a fallible function over the elements.
    ///
    /// Stops at the first `Err` and returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list_monad;
    ///
    /// let parsed = list_monad!["1", "2"].try_map(|text| text.parse::<i32>());
    /// assert_eq!(parsed, Ok(list_monad![1, 2]));
    ///
    /// let failed = list_monad!["1", "x"].try_map(|text| text.parse::<i32>());
    /// assert!(failed.is_err());
    /// ```
    pub fn try_map<B, E, F>(self, function: F) -> Result<ListMonad<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.elements
            .into_iter()
            .map(function)
            .collect::<Result<Vec<B>, E>>()
            .map(ListMonad::new)
    }

    /// Binds a fallible, list-returning function over the elements.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list::ListMonad;
    /// use listmonad::list_monad;
    ///
    /// fn divisors(n: u32) -> Result<ListMonad<u32>, String> {
    ///     if n == 0 {
    ///         return Err("zero has no divisor list".to_string());
    ///     }
    ///     Ok((1..=n).filter(|d| n % d == 0).collect())
    /// }
    ///
    /// assert_eq!(list_monad![4, 3].try_bind(divisors), Ok(list_monad![1, 2, 4, 1, 3]));
    /// assert!(list_monad![4, 0].try_bind(divisors).is_err());
    /// ```
    pub fn try_bind<B, E, F>(self, function: F) -> Result<ListMonad<B>, E>
    where
        F: FnMut(T) -> Result<ListMonad<B>, E>,
    {
        Ok(self.try_map(function)?.join())
    }
}

impl<T: Clone> ListMonad<T> {
    /// Combines two lists with a binary function, taking every pair.
    ///
    /// Built from `map` and `amap`: elements of `self` vary slowest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmonad::list_monad;
    ///
    /// let sums = list_monad![1, 2].map2(list_monad![10, 20], |a, b| a + b);
    /// assert_eq!(sums, list_monad![11, 21, 12, 22]);
    /// ```
    pub fn map2<U, C, F>(self, other: ListMonad<U>, function: F) -> ListMonad<C>
    where
        U: Clone,
        F: Fn(T, U) -> C,
    {
        let function = &function;
        self.map(|first| move |second| function(first.clone(), second))
            .amap(other)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`ListMonad`].
pub struct ListMonadIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ListMonadIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ListMonadIterator<'_, T> {}

/// An owning iterator over elements of a [`ListMonad`].
pub struct ListMonadIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for ListMonadIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ListMonadIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ListMonad<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for ListMonad<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for ListMonad<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ListMonad<T> {
    type Item = T;
    type IntoIter = ListMonadIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListMonadIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ListMonad<T> {
    type Item = &'a T;
    type IntoIter = ListMonadIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListMonad<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ListMonad<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for ListMonad<T> {
    type Inner = T;
    type WithType<B> = ListMonad<B>;
}

impl<T> Monad for ListMonad<T> {
    #[inline]
    fn insert<B>(value: B) -> ListMonad<B> {
        ListMonad {
            elements: vec![value],
        }
    }

    fn map<B, F>(self, function: F) -> ListMonad<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }

    fn amap<V, B>(self, values: ListMonad<V>) -> ListMonad<B>
    where
        T: FnMut(V) -> B,
        V: Clone,
    {
        let capacity = self.len().saturating_mul(values.len());
        let mut result = Vec::with_capacity(capacity);
        for mut function in self.elements {
            for value in &values.elements {
                result.push(function(value.clone()));
            }
        }
        ListMonad::new(result)
    }

    fn bind<B, F>(self, function: F) -> ListMonad<B>
    where
        F: FnMut(T) -> ListMonad<B>,
    {
        self.map(function).join()
    }

    fn join<B>(self) -> ListMonad<B>
    where
        T: TypeConstructor<Inner = B> + Into<ListMonad<B>>,
    {
        let mut result = Vec::new();
        for nested in self.elements {
            let nested: ListMonad<B> = nested.into();
            result.extend(nested.elements);
        }
        ListMonad::new(result)
    }
}
