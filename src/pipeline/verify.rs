use std::fmt;
use std::marker::PhantomData;

use super::FormValidator;
use crate::field::{Accept, FieldValidator};
use crate::patch::Patches;
use crate::{NonEmptyVec, Validation};

/// Pipeline created by [`verify`](crate::verify).
///
/// `A` is the raw field type returned by the accessor.
pub struct Verify<P, G, V, A> {
    pub(crate) inner: P,
    pub(crate) accessor: G,
    pub(crate) field: V,
    pub(crate) _raw: PhantomData<fn() -> A>,
}

/// Pipeline created by [`keep`](crate::keep).
pub type Keep<P, G, A> = Verify<P, G, Accept, A>;

impl<P: Clone, G: Clone, V: Clone, A> Clone for Verify<P, G, V, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            accessor: self.accessor.clone(),
            field: self.field.clone(),
            _raw: PhantomData,
        }
    }
}

impl<P, G, V, A> fmt::Debug for Verify<P, G, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verify")
            .field("inner", &"<pipeline>")
            .field("accessor", &"<function>")
            .field("field", &"<validator>")
            .finish()
    }
}

impl<F, P, G, V, A, R> FormValidator<F> for Verify<P, G, V, A>
where
    P: FormValidator<F>,
    G: Fn(&F) -> A,
    V: FieldValidator<A, F>,
    P::Output: FnOnce(V::Output) -> R,
{
    type Output = R;

    fn check(&self, form: &F) -> Validation<R, Patches<F>> {
        // earlier fields are checked first
        let earlier = self.inner.check(form);
        let checked = self.field.check_field((self.accessor)(form));

        #[cfg(feature = "tracing")]
        if checked.is_failure() {
            tracing::trace!(field = std::any::type_name::<A>(), "field check failed");
        }

        earlier
            .and(checked.map_err(NonEmptyVec::singleton))
            .map(|(build, value)| build(value))
    }
}
