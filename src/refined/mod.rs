//! Refined types: values narrowed to a stronger invariant
//!
//! A verified form usually holds stronger types than the raw form it came from: a
//! raw `String` becomes a string that is known to be non-empty, a raw `i32` becomes
//! one known to be positive. `Refined<T, P>` carries that guarantee in the type, so
//! code downstream of a successful pipeline run never re-checks it.
//!
//! Use [`refine`](crate::field::refine) to narrow a form field inside a pipeline.
//!
//! # Quick Start
//!
//! ```rust
//! use formpatch::refined::{NonEmptyString, PositiveI32};
//!
//! let name = NonEmptyString::new("Alice".to_string()).unwrap();
//! let age = PositiveI32::new(30).unwrap();
//!
//! assert_eq!(name.get(), "Alice");
//! assert_eq!(*age, 30);
//! assert!(NonEmptyString::new(String::new()).is_err());
//! ```
//!
//! # Custom Predicates
//!
//! ```rust
//! use formpatch::refined::{Predicate, Refined};
//!
//! pub struct ValidEmail;
//!
//! impl Predicate<String> for ValidEmail {
//!     type Error = &'static str;
//!
//!     fn check(value: &String) -> Result<(), Self::Error> {
//!         if value.contains('@') && value.contains('.') {
//!             Ok(())
//!         } else {
//!             Err("invalid email format")
//!         }
//!     }
//! }
//!
//! type Email = Refined<String, ValidEmail>;
//!
//! assert!(Email::new("user@example.com".to_string()).is_ok());
//! ```

pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;
mod validation;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use predicates::numeric::{InRange, NonNegative, Positive};
pub use predicates::string::{MaxLength, MinLength, NonEmpty, Trimmed};

/// A string guaranteed to be non-empty.
pub type NonEmptyString = Refined<String, NonEmpty>;

/// An `i32` guaranteed to be greater than zero.
pub type PositiveI32 = Refined<i32, Positive>;

/// A predicate that constrains values of type T.
///
/// Predicates are stateless: they only define the check. The value lives in
/// [`Refined<T, P>`].
pub trait Predicate<T>: Send + Sync + 'static {
    /// Error returned when the predicate fails
    type Error: Send + Sync;

    /// Check if the value satisfies the predicate
    fn check(value: &T) -> Result<(), Self::Error>;

    /// Human-readable description of what this predicate requires
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type T that is guaranteed to satisfy predicate P.
///
/// `Refined<T, P>` has the same memory layout as `T`.
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Create a new refined value, checking the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formpatch::refined::{Refined, Positive};
    ///
    /// assert!(Refined::<i32, Positive>::new(42).is_ok());
    /// assert!(Refined::<i32, Positive>::new(-5).is_err());
    /// ```
    pub fn new(value: T) -> Result<Self, P::Error> {
        P::check(&value)?;
        Ok(Self {
            value,
            _predicate: PhantomData,
        })
    }

    /// Get a reference to the inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the refined value, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Create a refined value without checking the predicate.
    ///
    /// Not unsafe in the memory sense, but the caller must know the predicate
    /// holds, e.g. for values that were verified before being stored.
    #[inline]
    pub fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &std::any::type_name::<P>())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Predicate<i32> for Even {
        type Error = &'static str;

        fn check(value: &i32) -> Result<(), Self::Error> {
            if value % 2 == 0 {
                Ok(())
            } else {
                Err("value must be even")
            }
        }
    }

    type EvenI32 = Refined<i32, Even>;

    #[test]
    fn test_new_checks_predicate() {
        assert_eq!(*EvenI32::new(42).unwrap().get(), 42);
        assert_eq!(EvenI32::new(41).unwrap_err(), "value must be even");
    }

    #[test]
    fn test_new_unchecked_skips_predicate() {
        assert_eq!(EvenI32::new_unchecked(41).into_inner(), 41);
    }

    #[test]
    fn test_comparisons_delegate_to_value() {
        let a = EvenI32::new(42).unwrap();
        let b = EvenI32::new(44).unwrap();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_hash_delegates_to_value() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(EvenI32::new(42).unwrap());
        set.insert(EvenI32::new(42).unwrap());
        set.insert(EvenI32::new(44).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_deref_display_debug() {
        let n = EvenI32::new(42).unwrap();
        assert_eq!(*n, 42);
        assert_eq!(n.to_string(), "42");
        let debug = format!("{:?}", n);
        assert!(debug.contains("Refined"));
        assert!(debug.contains("42"));
    }

    #[test]
    fn test_default_description_is_type_name() {
        assert!(<Even as Predicate<i32>>::description().ends_with("Even"));
    }
}
