//! Field validators
//!
//! A field validator checks one raw field value. It either returns the validated
//! (often narrowed) value or a [`Patch`] describing how to annotate the whole form
//! with this field's failure. A field produces at most one patch per check, though
//! that patch may touch as many parts of the form as it likes.
//!
//! Any closure `Fn(A) -> Validation<B, Patch<F>>` is a field validator. This module
//! adds the ready-made ones:
//!
//! - [`Accept`]: always succeeds with the raw value (used by [`keep`](crate::keep))
//! - [`ensure`]: keeps the raw value when a check passes, otherwise applies a fixed patch
//! - [`refine`]: narrows the raw value into a [`Refined`] type
//!
//! Error-list validators are adapted with [`lift_validator`](crate::lift_validator).

use std::fmt;

use crate::lift::{lift_validator, Lifted};
use crate::refined::{Predicate, Refined};
use crate::{NonEmptyVec, Patch, Validation};

/// Validation of a single raw field value of type `A` inside a form `F`.
///
/// # Example
///
/// ```
/// use formpatch::{FieldValidator, Patch, Validation};
///
/// struct Form {
///     age: String,
///     age_error: Option<String>,
/// }
///
/// let parse_age = |raw: String| match raw.parse::<u8>() {
///     Ok(age) => Validation::success(age),
///     Err(_) => Validation::failure(Patch::new(|form: Form| Form {
///         age_error: Some("Age must be a number".into()),
///         ..form
///     })),
/// };
///
/// assert_eq!(parse_age.check_field("42".to_string()).into_result().ok(), Some(42));
/// assert!(parse_age.check_field("forty".to_string()).is_failure());
/// ```
pub trait FieldValidator<A, F> {
    /// The validated value produced on success.
    type Output;

    /// Check the raw value.
    fn check_field(&self, raw: A) -> Validation<Self::Output, Patch<F>>;
}

impl<A, B, F, C> FieldValidator<A, F> for C
where
    C: Fn(A) -> Validation<B, Patch<F>>,
{
    type Output = B;

    #[inline]
    fn check_field(&self, raw: A) -> Validation<B, Patch<F>> {
        self(raw)
    }
}

/// A field validator that never fails and passes the raw value through.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accept;

impl<A, F> FieldValidator<A, F> for Accept {
    type Output = A;

    #[inline]
    fn check_field(&self, raw: A) -> Validation<A, Patch<F>> {
        Validation::Success(raw)
    }
}

/// Field validator created by [`ensure`].
#[derive(Clone)]
pub struct Ensure<C, P> {
    check: C,
    on_fail: P,
}

impl<C, P> fmt::Debug for Ensure<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ensure")
            .field("check", &"<function>")
            .field("on_fail", &"<function>")
            .finish()
    }
}

impl<A, F, C, P> FieldValidator<A, F> for Ensure<C, P>
where
    C: Fn(&A) -> bool,
    P: Fn(F) -> F + Clone + 'static,
{
    type Output = A;

    fn check_field(&self, raw: A) -> Validation<A, Patch<F>> {
        if (self.check)(&raw) {
            Validation::Success(raw)
        } else {
            Validation::Failure(Patch::new(self.on_fail.clone()))
        }
    }
}

/// Keep the raw value when `check` holds, otherwise fail with `on_fail` as the patch.
///
/// # Example
///
/// ```
/// use formpatch::field::ensure;
/// use formpatch::FieldValidator;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Form {
///     email: String,
///     email_error: Option<&'static str>,
/// }
///
/// let email = ensure(
///     |raw: &String| raw.contains('@'),
///     |form: Form| Form { email_error: Some("Email must contain @"), ..form },
/// );
///
/// assert!(email.check_field("ada@example.com".to_string()).is_success());
///
/// let patch = email.check_field("ada".to_string()).into_result().unwrap_err();
/// assert_eq!(patch.apply(Form::default()).email_error, Some("Email must contain @"));
/// ```
pub fn ensure<C, P>(check: C, on_fail: P) -> Ensure<C, P> {
    Ensure { check, on_fail }
}

/// Field validator created by [`refine`].
pub type Refine<T, P, S> =
    Lifted<S, fn(T) -> Validation<Refined<T, P>, NonEmptyVec<<P as Predicate<T>>::Error>>>;

/// Narrow the raw value into `Refined<T, P>`.
///
/// On failure the predicate's error is handed to `store`, which records it on
/// the form.
///
/// # Example
///
/// ```
/// use formpatch::field::refine;
/// use formpatch::refined::NonEmpty;
/// use formpatch::FieldValidator;
///
/// #[derive(Debug, Default)]
/// struct Form {
///     name: String,
///     name_error: Option<String>,
/// }
///
/// let name = refine::<String, NonEmpty, Form, _>(|errors, form| Form {
///     name_error: Some(errors.head().to_string()),
///     ..form
/// });
///
/// let verified = name.check_field("Ada".to_string()).into_result().unwrap();
/// assert_eq!(verified.get(), "Ada");
///
/// let patch = name.check_field(String::new()).into_result().unwrap_err();
/// assert_eq!(
///     patch.apply(Form::default()).name_error.as_deref(),
///     Some("string cannot be empty")
/// );
/// ```
pub fn refine<T, P, F, S>(store: S) -> Refine<T, P, S>
where
    P: Predicate<T>,
    S: Fn(NonEmptyVec<P::Error>, F) -> F + 'static,
{
    lift_validator(store, Refined::<T, P>::validate_nev as fn(_) -> _)
}
