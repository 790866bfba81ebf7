//! Validation integration for refined types

use super::{Predicate, Refined};
use crate::{NonEmptyVec, Validation};

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Refine a value, returning a Validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formpatch::refined::PositiveI32;
    ///
    /// assert!(PositiveI32::validate(42).is_success());
    /// assert!(PositiveI32::validate(-5).is_failure());
    /// ```
    pub fn validate(value: T) -> Validation<Self, P::Error> {
        Validation::from_result(Self::new(value))
    }

    /// Refine a value, reporting failure as a non-empty error list.
    ///
    /// This is the error-list validator shape accepted by
    /// [`lift_validator`](crate::lift_validator).
    ///
    /// # Example
    ///
    /// ```rust
    /// use formpatch::refined::NonEmptyString;
    /// use formpatch::Validation;
    ///
    /// match NonEmptyString::validate_nev(String::new()) {
    ///     Validation::Failure(errors) => assert_eq!(errors.head(), &"string cannot be empty"),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn validate_nev(value: T) -> Validation<Self, NonEmptyVec<P::Error>> {
        Self::validate(value).map_err(NonEmptyVec::singleton)
    }
}
