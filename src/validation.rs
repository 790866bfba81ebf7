//! Validation type for accumulating failures
//!
//! `Validation` is shaped like `Result`, but combining two of them with [`Validation::and`]
//! keeps the failures of both sides instead of stopping at the first. Pipelines use it
//! with [`Patches`](crate::Patches) as the failure type; [`run`](crate::run) hands back a
//! `Validation` whose failure side is the annotated form.
//!
//! # Examples
//!
//! ```
//! use formpatch::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["first name"]);
//! let v2 = Validation::<i32, _>::failure(vec!["last name"]);
//!
//! assert_eq!(v1.and(v2), Validation::Failure(vec!["first name", "last name"]));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value (a `Semigroup` when accumulating)
///
/// # Examples
///
/// ```
/// use formpatch::Validation;
///
/// let v = Validation::<_, Vec<&str>>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use formpatch::Validation;
    ///
    /// let v = Validation::from_result("42".parse::<u8>());
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use formpatch::Validation;
    ///
    /// let v = Validation::<_, String>::success("ada");
    /// assert_eq!(v.map(str::len), Validation::Success(3));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the failure value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating failures with `Semigroup::combine`
    ///
    /// Both successful gives a tuple of both values. If both fail, the failure of
    /// `self` comes first in the combined failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use formpatch::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs if this validation succeeded.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Succeeds with every value in order, or fails with every failure combined
    /// in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use formpatch::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
