use std::fmt;

use super::FormValidator;
use crate::patch::Patches;
use crate::Validation;

/// Pipeline created by [`FormValidatorExt::map`](crate::FormValidatorExt::map).
///
/// Transforms the verified output. Failures pass through untouched.
#[derive(Clone)]
pub struct Map<P, M> {
    pub(crate) inner: P,
    pub(crate) f: M,
}

impl<P, M> fmt::Debug for Map<P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<pipeline>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, P, M, U> FormValidator<F> for Map<P, M>
where
    P: FormValidator<F>,
    M: Fn(P::Output) -> U,
{
    type Output = U;

    fn check(&self, form: &F) -> Validation<U, Patches<F>> {
        self.inner.check(form).map(|value| (self.f)(value))
    }
}
