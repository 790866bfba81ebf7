//! Testing utilities for pipelines
//!
//! Assertion macros that unwrap the outcome of [`run`](crate::run): a verified value
//! or a patched form. With the `proptest` feature, [`Validation`] and
//! [`NonEmptyVec`] also implement `Arbitrary`.
//!
//! # Example
//!
//! ```rust
//! use formpatch::{assert_rejected, assert_verified, run, validate, verify};
//! use formpatch::field::ensure;
//!
//! let pipeline = verify(
//!     |s: &String| s.clone(),
//!     ensure(|s: &String| s.len() > 2, |s: String| s + " (too short)"),
//!     validate(|s: String| s.to_uppercase()),
//! );
//!
//! let verified = assert_verified!(run(&pipeline, "ada".to_string()));
//! assert_eq!(verified, "ADA");
//!
//! let patched = assert_rejected!(run(&pipeline, "al".to_string()));
//! assert_eq!(patched, "al (too short)");
//! ```

#[cfg(feature = "proptest")]
use crate::{NonEmptyVec, Validation};

/// Assert that a pipeline run verified the form, evaluating to the verified value.
///
/// Panics with the patched form if the run was rejected.
///
/// # Example
///
/// ```rust
/// use formpatch::{assert_verified, Validation};
///
/// let outcome = Validation::<_, &str>::success(7);
/// assert_eq!(assert_verified!(outcome), 7);
/// ```
#[macro_export]
macro_rules! assert_verified {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Success(verified) => verified,
            $crate::Validation::Failure(form) => {
                panic!("Expected form to verify, got rejected form: {:?}", form);
            }
        }
    };
}

/// Assert that a pipeline run rejected the form, evaluating to the patched form.
///
/// Panics with the verified value if the run succeeded.
#[macro_export]
macro_rules! assert_rejected {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Failure(form) => form,
            $crate::Validation::Success(verified) => {
                panic!(
                    "Expected form to be rejected, got verified value: {:?}",
                    verified
                );
            }
        }
    };
}

/// Assert that a validation fails with specific errors.
///
/// Works with any error type comparable to `$expected`, typically the
/// `NonEmptyVec` produced by a validator before it is lifted.
///
/// # Example
///
/// ```rust
/// use formpatch::{assert_errors, NonEmptyVec, Validation};
///
/// let val = Validation::<i32, _>::failure(NonEmptyVec::new("E1", vec!["E2"]));
/// assert_errors!(val, NonEmptyVec::new("E1", vec!["E2"]));
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<E>(e_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for NonEmptyVec<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<T>(),
            proptest::collection::vec(any::<T>(), 0..8),
        )
            .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
            .boxed()
    }
}
