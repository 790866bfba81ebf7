//! Non-empty vector type
//!
//! `NonEmptyVec<T>` always holds at least one element. It is the shape of every
//! failure in this crate: a rejected pipeline carries a non-empty list of patches,
//! and an error-list validator reports a first error plus the rest.
//!
//! # Example
//!
//! ```
//! use formpatch::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("too short", vec!["no digits"]);
//! assert_eq!(errors.head(), &"too short");
//! assert_eq!(errors.tail(), &["no digits"]);
//! assert_eq!(errors.len(), 2);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// The first element is stored apart from the rest, so `head` and `reduce`
/// never need to return `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a first element and the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use formpatch::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.len(), 3);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use formpatch::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        iter.next().map(|head| Self::new(head, iter.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to satisfy `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Map a function over every element, preserving order.
    ///
    /// # Example
    ///
    /// ```
    /// use formpatch::NonEmptyVec;
    ///
    /// let lens = NonEmptyVec::new("ab", vec!["cde"]).map(str::len);
    /// assert_eq!(lens.into_vec(), vec![2, 3]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Fold every element into one, left to right, starting from the head.
    ///
    /// Unlike `Iterator::reduce` this cannot come back empty.
    ///
    /// # Example
    ///
    /// ```
    /// use formpatch::NonEmptyVec;
    ///
    /// let total = NonEmptyVec::new(1, vec![2, 3]).reduce(|a, b| a + b);
    /// assert_eq!(total, 6);
    /// ```
    pub fn reduce<F>(self, f: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.tail.into_iter().fold(self.head, f)
    }

    /// Convert into a regular `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

// Concatenation: everything in `self`, then everything in `other`.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

/// First error plus the remaining errors, the pair form error-list validators
/// often report.
impl<T> From<(T, Vec<T>)> for NonEmptyVec<T> {
    fn from((head, tail): (T, Vec<T>)) -> Self {
        Self::new(head, tail)
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}
