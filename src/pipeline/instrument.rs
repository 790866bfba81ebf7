//! Span instrumentation for pipelines.

use std::fmt;

use super::FormValidator;
use crate::patch::Patches;
use crate::Validation;

/// Pipeline that checks its inner pipeline inside a [`tracing::Span`].
pub struct Instrument<P> {
    inner: P,
    span: tracing::Span,
}

impl<P> fmt::Debug for Instrument<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrument")
            .field("inner", &"<pipeline>")
            .field("span", &self.span)
            .finish()
    }
}

impl<P: Clone> Clone for Instrument<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            span: self.span.clone(),
        }
    }
}

impl<F, P: FormValidator<F>> FormValidator<F> for Instrument<P> {
    type Output = P::Output;

    fn check(&self, form: &F) -> Validation<P::Output, Patches<F>> {
        let _guard = self.span.enter();
        self.inner.check(form)
    }
}

/// Extension trait adding span instrumentation to pipelines.
///
/// # Example
///
/// ```rust
/// use formpatch::pipeline::FormValidatorTracingExt;
/// use formpatch::{run, validate};
///
/// let pipeline =
///     FormValidatorTracingExt::<()>::instrument(validate(1), tracing::info_span!("signup_form"));
/// assert!(run(&pipeline, ()).is_success());
/// ```
pub trait FormValidatorTracingExt<F>: FormValidator<F> + Sized {
    /// Enter `span` every time the pipeline checks a form.
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<F, P: FormValidator<F>> FormValidatorTracingExt<F> for P {}
