use std::fmt;

use super::FormValidator;
use crate::patch::Patches;
use crate::Validation;

/// Pipeline created by [`validate`](crate::validate).
#[derive(Clone, Copy)]
pub struct Validate<C> {
    pub(crate) ctor: C,
}

impl<C> fmt::Debug for Validate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validate")
            .field("ctor", &"<function>")
            .finish()
    }
}

impl<F, C: Clone> FormValidator<F> for Validate<C> {
    type Output = C;

    #[inline]
    fn check(&self, _form: &F) -> Validation<C, Patches<F>> {
        Validation::Success(self.ctor.clone())
    }
}
