//! Patches: failures expressed as transformations of the input
//!
//! A [`Patch<F>`] takes the original form and returns a copy carrying a failure
//! annotation, such as a `first_name_error` message. Pipelines never collect error
//! values; a failing field contributes a patch, and running the pipeline applies
//! every contributed patch to the untouched input.
//!
//! Patches accumulate as [`Patches<F>`], a non-empty list in the order the fields
//! were declared. Applying that list works right to left: the last declared patch
//! runs first and earlier patches are layered on top of its output.
//!
//! # Example
//!
//! ```
//! use formpatch::{patch, NonEmptyVec, Patch};
//!
//! let patches = NonEmptyVec::new(
//!     Patch::new(|log: String| log + "first "),
//!     vec![Patch::new(|log: String| log + "second ")],
//! );
//!
//! // "second" was declared last, so it is applied first.
//! assert_eq!(patch::apply_all(patches, String::new()), "second first ");
//! ```

use std::fmt;

use crate::{NonEmptyVec, Semigroup};

/// Every patch contributed by the failing fields of one pipeline run, in
/// declaration order.
pub type Patches<F> = NonEmptyVec<Patch<F>>;

/// A deferred update that annotates a form with a failure.
///
/// A patch is consumed when applied; pipelines build fresh patches on every run.
pub struct Patch<F> {
    apply: Box<dyn FnOnce(F) -> F>,
}

impl<F> Patch<F> {
    /// Wrap a function from form to annotated form.
    ///
    /// # Example
    ///
    /// ```
    /// use formpatch::Patch;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Login {
    ///     user: String,
    ///     user_error: Option<String>,
    /// }
    ///
    /// let patch = Patch::new(|form: Login| Login {
    ///     user_error: Some("required".into()),
    ///     ..form
    /// });
    ///
    /// let patched = patch.apply(Login { user: String::new(), user_error: None });
    /// assert_eq!(patched.user_error.as_deref(), Some("required"));
    /// ```
    pub fn new<P>(patch: P) -> Self
    where
        P: FnOnce(F) -> F + 'static,
    {
        Self {
            apply: Box::new(patch),
        }
    }

    /// Apply the patch, producing the annotated form.
    #[inline]
    pub fn apply(self, form: F) -> F {
        (self.apply)(form)
    }
}

impl<F> fmt::Debug for Patch<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patch").field("apply", &"<function>").finish()
    }
}

/// `a.combine(b)` applies `b` first and `a` to its output.
///
/// Reducing patches in declaration order with `combine` therefore gives the same
/// composite as [`apply_all`].
impl<F: 'static> Semigroup for Patch<F> {
    fn combine(self, other: Self) -> Self {
        Patch::new(move |form| self.apply(other.apply(form)))
    }
}

/// Apply accumulated patches to a form, last declared first.
pub fn apply_all<F>(patches: Patches<F>, form: F) -> F {
    patches
        .into_iter()
        .rev()
        .fold(form, |form, patch| patch.apply(form))
}

/// Collapse accumulated patches into one composite patch.
///
/// `collapse(patches).apply(form)` is equivalent to `apply_all(patches, form)`.
pub fn collapse<F: 'static>(patches: Patches<F>) -> Patch<F> {
    patches.reduce(Semigroup::combine)
}
