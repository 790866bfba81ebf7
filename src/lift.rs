//! Lifting error-list validators into field validators
//!
//! Most existing validators report failure the conventional way: a first error plus
//! any further errors, here a [`NonEmptyVec<E>`]. [`lift_validator`] adapts such a
//! validator to the patch model. The caller supplies a `store` function that knows
//! where the errors belong on the form; the lifted validator turns a failure into a
//! patch that calls `store` with the complete, ordered error list.

use std::fmt;
use std::sync::Arc;

use crate::{FieldValidator, NonEmptyVec, Patch, Validation};

/// Field validator created by [`lift_validator`].
pub struct Lifted<S, V> {
    store: Arc<S>,
    validator: V,
}

impl<S, V: Clone> Clone for Lifted<S, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            validator: self.validator.clone(),
        }
    }
}

impl<S, V> fmt::Debug for Lifted<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifted")
            .field("store", &"<function>")
            .field("validator", &"<function>")
            .finish()
    }
}

impl<A, B, E, F, S, V> FieldValidator<A, F> for Lifted<S, V>
where
    V: Fn(A) -> Validation<B, NonEmptyVec<E>>,
    S: Fn(NonEmptyVec<E>, F) -> F + 'static,
    E: 'static,
    F: 'static,
{
    type Output = B;

    fn check_field(&self, raw: A) -> Validation<B, Patch<F>> {
        (self.validator)(raw).map_err(|errors| {
            let store = Arc::clone(&self.store);
            Patch::new(move |form| (*store)(errors, form))
        })
    }
}

/// Adapt an error-list validator into a field validator.
///
/// `validator` runs on the raw field value. Success passes its value through
/// unchanged. Failure becomes a patch that records the errors with
/// `store(errors, form)`, the errors in the order the validator emitted them.
///
/// # Example
///
/// ```
/// use formpatch::{lift_validator, FieldValidator, NonEmptyVec, Validation};
///
/// #[derive(Debug, Default)]
/// struct Form {
///     password: String,
///     password_errors: Vec<String>,
/// }
///
/// fn strong_password(raw: String) -> Validation<String, NonEmptyVec<String>> {
///     let mut errors = Vec::new();
///     if raw.len() < 8 {
///         errors.push("at least 8 characters".to_string());
///     }
///     if !raw.chars().any(|c| c.is_ascii_digit()) {
///         errors.push("at least one digit".to_string());
///     }
///     match NonEmptyVec::from_vec(errors) {
///         Some(errors) => Validation::failure(errors),
///         None => Validation::success(raw),
///     }
/// }
///
/// let password = lift_validator(
///     |errors: NonEmptyVec<String>, form: Form| Form {
///         password_errors: errors.into_vec(),
///         ..form
///     },
///     strong_password,
/// );
///
/// let patch = password.check_field("abc".to_string()).into_result().unwrap_err();
/// let patched = patch.apply(Form::default());
/// assert_eq!(
///     patched.password_errors,
///     vec!["at least 8 characters", "at least one digit"]
/// );
/// ```
pub fn lift_validator<A, B, E, F, S, V>(store: S, validator: V) -> Lifted<S, V>
where
    V: Fn(A) -> Validation<B, NonEmptyVec<E>>,
    S: Fn(NonEmptyVec<E>, F) -> F + 'static,
{
    Lifted {
        store: Arc::new(store),
        validator,
    }
}
