//! Type-erased pipelines.
//!
//! Every combinator produces its own nested type, which is awkward to name in a
//! struct field, a static, or a collection. [`BoxedFormValidator`] erases that
//! type behind an `Arc`, keeping only the form and output types.

use std::fmt;
use std::sync::Arc;

use super::FormValidator;
use crate::patch::Patches;
use crate::Validation;

type CheckFn<F, V> = dyn Fn(&F) -> Validation<V, Patches<F>> + Send + Sync;

/// A type-erased pipeline over forms `F` producing `V`.
///
/// Cloning is cheap and clones share the underlying pipeline, which can be
/// checked from several threads at once.
///
/// # Example
///
/// ```
/// use formpatch::field::ensure;
/// use formpatch::{validate, BoxedFormValidator, FormValidatorExt, Validation};
///
/// struct Registry {
///     rules: Vec<BoxedFormValidator<String, usize>>,
/// }
///
/// let registry = Registry {
///     rules: vec![
///         validate(0usize).boxed(),
///         validate(|s: String| s.len())
///             .verify(
///                 |f: &String| f.clone(),
///                 ensure(|s: &String| s.len() < 5, |f: String| format!("[{}]", f)),
///             )
///             .boxed(),
///     ],
/// };
///
/// assert_eq!(registry.rules[0].run("toolong".to_string()), Validation::Success(0));
/// assert_eq!(
///     registry.rules[1].run("toolong".to_string()),
///     Validation::Failure("[toolong]".to_string())
/// );
/// ```
pub struct BoxedFormValidator<F, V> {
    check_fn: Arc<CheckFn<F, V>>,
}

impl<F, V> BoxedFormValidator<F, V> {
    /// Erase the type of `pipeline`.
    pub fn new<P>(pipeline: P) -> Self
    where
        P: FormValidator<F, Output = V> + Send + Sync + 'static,
        F: 'static,
        V: 'static,
    {
        Self {
            check_fn: Arc::new(move |form: &F| pipeline.check(form)),
        }
    }
}

impl<F, V> Clone for BoxedFormValidator<F, V> {
    fn clone(&self) -> Self {
        Self {
            check_fn: Arc::clone(&self.check_fn),
        }
    }
}

impl<F, V> fmt::Debug for BoxedFormValidator<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedFormValidator")
            .field("check_fn", &"<function>")
            .finish()
    }
}

impl<F, V> FormValidator<F> for BoxedFormValidator<F, V> {
    type Output = V;

    fn check(&self, form: &F) -> Validation<V, Patches<F>> {
        (self.check_fn)(form)
    }
}
