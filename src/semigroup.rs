//! Semigroup trait for associative combination
//!
//! A Semigroup is a type with an associative binary operation. In this crate it is
//! what lets a pipeline keep every field failure: the patches produced by failing
//! fields are accumulated with `combine` instead of the first one winning.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use formpatch::Semigroup;
//!
//! let v1 = vec!["first name"];
//! let v2 = vec!["last name"];
//! assert_eq!(v1.combine(v2), vec!["first name", "last name"]);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both values by value. Clone beforehand if the originals
/// are still needed.
///
/// # Example
///
/// ```
/// use formpatch::Semigroup;
///
/// #[derive(Debug, PartialEq)]
/// struct Messages(Vec<String>);
///
/// impl Semigroup for Messages {
///     fn combine(mut self, other: Self) -> Self {
///         self.0.extend(other.0);
///         self
///     }
/// }
///
/// let all = Messages(vec!["a".into()]).combine(Messages(vec!["b".into()]));
/// assert_eq!(all, Messages(vec!["a".into(), "b".into()]));
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
