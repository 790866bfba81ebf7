//! Form validation pipelines
//!
//! A pipeline starts from a curried constructor with [`validate`] and adds one
//! field at a time with [`verify`] or [`keep`]. Every stage pulls its raw value out
//! of the original form through an accessor, so later stages never see the output
//! of earlier ones. [`run`] executes the pipeline against a form:
//!
//! - every field passes: the constructor is saturated and the verified value returned
//! - any field fails: every failing field's patch is applied to the untouched form
//!   and the annotated form returned
//!
//! # Example
//!
//! ```
//! use formpatch::field::ensure;
//! use formpatch::{run, validate, verify, Validation};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct SignIn {
//!     user: String,
//!     pin: String,
//!     user_error: Option<&'static str>,
//!     pin_error: Option<&'static str>,
//! }
//!
//! let pipeline = verify(
//!     |f: &SignIn| f.pin.clone(),
//!     ensure(|p: &String| p.len() == 4, |f: SignIn| SignIn { pin_error: Some("4 digits"), ..f }),
//!     verify(
//!         |f: &SignIn| f.user.clone(),
//!         ensure(|u: &String| !u.is_empty(), |f: SignIn| SignIn { user_error: Some("required"), ..f }),
//!         validate(|user: String| move |pin: String| (user, pin)),
//!     ),
//! );
//!
//! let form = SignIn { user: "ada".into(), pin: "12".into(), ..SignIn::default() };
//! match run(&pipeline, form) {
//!     Validation::Failure(patched) => {
//!         assert_eq!(patched.pin_error, Some("4 digits"));
//!         assert_eq!(patched.user_error, None);
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

mod base;
mod boxed;
mod ext;
#[cfg(feature = "tracing")]
mod instrument;
mod map;
mod verify;

pub use base::Validate;
pub use boxed::BoxedFormValidator;
pub use ext::FormValidatorExt;
#[cfg(feature = "tracing")]
pub use instrument::{FormValidatorTracingExt, Instrument};
pub use map::Map;
pub use verify::{Keep, Verify};

use std::marker::PhantomData;

use crate::field::{Accept, FieldValidator};
use crate::patch::{self, Patches};
use crate::Validation;

/// A validation pipeline over forms of type `F`.
///
/// `check` reads the form without consuming it and either produces the
/// pipeline's output or every patch contributed by failing fields, in the order
/// the fields were declared.
pub trait FormValidator<F> {
    /// Value produced when every field passes. For a partially built pipeline
    /// this is the remaining curried constructor.
    type Output;

    /// Check every field of `form`.
    fn check(&self, form: &F) -> Validation<Self::Output, Patches<F>>;
}

impl<F, P: FormValidator<F> + ?Sized> FormValidator<F> for &P {
    type Output = P::Output;

    fn check(&self, form: &F) -> Validation<Self::Output, Patches<F>> {
        (**self).check(form)
    }
}

/// Start a pipeline from a constructor that never fails.
///
/// The constructor is usually curried, taking one field per closure:
/// `|first| move |last| Name { first, last }`. It is cloned on every check.
///
/// # Example
///
/// ```
/// use formpatch::{run, validate, Validation};
///
/// let pipeline = validate(42);
/// assert_eq!(run(&pipeline, "any form"), Validation::Success(42));
/// ```
pub fn validate<C: Clone>(ctor: C) -> Validate<C> {
    Validate { ctor }
}

/// Add a verified field to `pipeline`.
///
/// `accessor` extracts the raw value from the form, `field` checks it, and the
/// checked value is fed to the constructor pending in `pipeline`. If both this
/// field and an earlier one fail, both patches are kept.
///
/// # Example
///
/// ```
/// use formpatch::field::ensure;
/// use formpatch::{run, validate, verify, Validation};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Age {
///     raw: i32,
///     error: bool,
/// }
///
/// let pipeline = verify(
///     |f: &Age| f.raw,
///     ensure(|n: &i32| *n >= 0, |f: Age| Age { error: true, ..f }),
///     validate(|n: i32| n as u32),
/// );
///
/// assert_eq!(run(&pipeline, Age { raw: 7, error: false }), Validation::Success(7));
/// assert_eq!(
///     run(&pipeline, Age { raw: -1, error: false }),
///     Validation::Failure(Age { raw: -1, error: true })
/// );
/// ```
pub fn verify<F, P, G, V, A>(accessor: G, field: V, pipeline: P) -> Verify<P, G, V, A>
where
    P: FormValidator<F>,
    G: Fn(&F) -> A,
    V: FieldValidator<A, F>,
{
    Verify {
        inner: pipeline,
        accessor,
        field,
        _raw: PhantomData,
    }
}

/// Add a field to `pipeline` that is passed to the constructor as-is.
///
/// # Example
///
/// ```
/// use formpatch::{keep, run, validate, Validation};
///
/// struct Note {
///     body: String,
/// }
///
/// let pipeline = keep(|f: &Note| f.body.clone(), validate(|body: String| body.len()));
/// assert!(matches!(run(&pipeline, Note { body: "hi".into() }), Validation::Success(2)));
/// ```
pub fn keep<F, P, G, A>(accessor: G, pipeline: P) -> Keep<P, G, A>
where
    P: FormValidator<F>,
    G: Fn(&F) -> A,
{
    verify(accessor, Accept, pipeline)
}

/// Run `pipeline` against `form`.
///
/// Returns `Success` with the verified value, or `Failure` with `form` after
/// every contributed patch was applied, last declared first.
pub fn run<F, P>(pipeline: &P, form: F) -> Validation<P::Output, F>
where
    P: FormValidator<F> + ?Sized,
{
    match pipeline.check(&form) {
        Validation::Success(verified) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("form verified");
            Validation::Success(verified)
        }
        Validation::Failure(patches) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("form rejected with {} patch(es)", patches.len());
            Validation::Failure(patch::apply_all(patches, form))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ensure;
    use crate::Patch;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Form {
        a: i32,
        b: i32,
        log: Vec<&'static str>,
    }

    fn log(tag: &'static str) -> impl Fn(Form) -> Form + Clone {
        move |mut form: Form| {
            form.log.push(tag);
            form
        }
    }

    fn positive(tag: &'static str) -> impl FieldValidator<i32, Form, Output = i32> {
        ensure(|n: &i32| *n > 0, log(tag))
    }

    fn sum_pipeline() -> impl FormValidator<Form, Output = i32> {
        verify(
            |f: &Form| f.b,
            positive("b"),
            verify(
                |f: &Form| f.a,
                positive("a"),
                validate(|a: i32| move |b: i32| a + b),
            ),
        )
    }

    #[test]
    fn test_validate_ignores_form() {
        let pipeline = validate("ctor");
        assert_eq!(pipeline.check(&Form::default()).into_result().ok(), Some("ctor"));
        assert_eq!(pipeline.check(&Form { a: 9, ..Form::default() }).into_result().ok(), Some("ctor"));
    }

    #[test]
    fn test_run_success_saturates_constructor() {
        let form = Form { a: 2, b: 3, ..Form::default() };
        assert_eq!(run(&sum_pipeline(), form), Validation::Success(5));
    }

    #[test]
    fn test_run_failure_applies_last_declared_first() {
        let form = Form { a: -1, b: -1, ..Form::default() };
        match run(&sum_pipeline(), form) {
            Validation::Failure(patched) => assert_eq!(patched.log, vec!["b", "a"]),
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn test_single_failure_keeps_other_fields_untouched() {
        let form = Form { a: 4, b: 0, ..Form::default() };
        assert_eq!(
            run(&sum_pipeline(), form),
            Validation::Failure(Form { a: 4, b: 0, log: vec!["b"] })
        );
    }

    #[test]
    fn test_check_accumulates_in_declaration_order() {
        let form = Form { a: 0, b: 0, ..Form::default() };
        match sum_pipeline().check(&form) {
            Validation::Failure(patches) => {
                assert_eq!(patches.len(), 2);
                let applied: Vec<_> = patches
                    .into_iter()
                    .map(|p| p.apply(Form::default()).log)
                    .collect();
                assert_eq!(applied, vec![vec!["a"], vec!["b"]]);
            }
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn test_fields_are_read_in_declaration_order() {
        use std::cell::RefCell;

        let seen = RefCell::new(Vec::new());
        let pipeline = verify(
            |f: &Form| {
                seen.borrow_mut().push("b");
                f.b
            },
            positive("b"),
            verify(
                |f: &Form| {
                    seen.borrow_mut().push("a");
                    f.a
                },
                positive("a"),
                validate(|a: i32| move |b: i32| a + b),
            ),
        );

        let _ = run(&pipeline, Form { a: -1, b: -1, ..Form::default() });
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_keep_never_fails() {
        let pipeline = keep(
            |f: &Form| f.b,
            keep(|f: &Form| f.a, validate(|a: i32| move |b: i32| (a, b))),
        );
        let form = Form { a: -5, b: -6, ..Form::default() };
        assert_eq!(run(&pipeline, form), Validation::Success((-5, -6)));
    }

    #[test]
    fn test_run_is_repeatable() {
        let pipeline = sum_pipeline();
        let form = Form { a: -1, b: 2, ..Form::default() };
        assert_eq!(run(&pipeline, form.clone()), run(&pipeline, form));
    }

    #[test]
    fn test_reference_is_pipeline() {
        let pipeline = sum_pipeline();
        let by_ref = &pipeline;
        let form = Form { a: 1, b: 1, ..Form::default() };
        assert_eq!(run(&by_ref, form), Validation::Success(2));
    }

    #[test]
    fn test_field_patch_may_touch_several_parts() {
        let field = |n: i32| {
            if n == 0 {
                Validation::failure(Patch::new(|f: Form| Form {
                    a: -100,
                    log: vec!["zeroed"],
                    ..f
                }))
            } else {
                Validation::success(n)
            }
        };
        let pipeline = verify(|f: &Form| f.a, field, validate(|a: i32| a));
        assert_eq!(
            run(&pipeline, Form { b: 7, ..Form::default() }),
            Validation::Failure(Form { a: -100, b: 7, log: vec!["zeroed"] })
        );
    }
}
