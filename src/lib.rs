//! # formpatch
//!
//! Applicative form validation where failures are patches.
//!
//! A pipeline verifies a raw form field by field and feeds the validated values
//! into a curried constructor. When a field fails it does not produce an error
//! message. It produces a [`Patch`]: a function that takes the original form and
//! returns a copy annotated with the failure, for example with `first_name_error`
//! filled in. Running a rejected pipeline applies every patch and hands back the
//! annotated form, ready to be shown to the user again.
//!
//! - [`validate`] starts a pipeline from a constructor
//! - [`verify`] adds a field checked by a [`FieldValidator`]
//! - [`keep`] adds a field that is always accepted
//! - [`run`] executes the pipeline
//! - [`lift_validator`] adapts validators that report a list of errors
//!
//! ## Quick Example
//!
//! ```rust
//! use formpatch::field::ensure;
//! use formpatch::{run, validate, verify, Validation};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct NameForm {
//!     first_name: String,
//!     last_name: String,
//!     first_name_error: Option<String>,
//!     last_name_error: Option<String>,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct Name {
//!     first: String,
//!     last: String,
//! }
//!
//! let pipeline = verify(
//!     |f: &NameForm| f.last_name.clone(),
//!     ensure(|s: &String| !s.is_empty(), |f: NameForm| NameForm {
//!         last_name_error: Some("Last name cannot be empty".into()),
//!         ..f
//!     }),
//!     verify(
//!         |f: &NameForm| f.first_name.clone(),
//!         ensure(|s: &String| !s.is_empty(), |f: NameForm| NameForm {
//!             first_name_error: Some("First name cannot be empty".into()),
//!             ..f
//!         }),
//!         validate(|first: String| move |last: String| Name { first, last }),
//!     ),
//! );
//!
//! let ok = NameForm { first_name: "John".into(), last_name: "Doe".into(), ..NameForm::default() };
//! assert_eq!(
//!     run(&pipeline, ok),
//!     Validation::Success(Name { first: "John".into(), last: "Doe".into() })
//! );
//!
//! match run(&pipeline, NameForm::default()) {
//!     Validation::Failure(form) => {
//!         assert_eq!(form.first_name_error.as_deref(), Some("First name cannot be empty"));
//!         assert_eq!(form.last_name_error.as_deref(), Some("Last name cannot be empty"));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```
//!
//! For more examples, see the `demos` directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod field;
pub mod lift;
pub mod nonempty;
pub mod patch;
pub mod pipeline;
pub mod refined;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use field::FieldValidator;
pub use lift::lift_validator;
pub use nonempty::NonEmptyVec;
pub use patch::{Patch, Patches};
pub use pipeline::{keep, run, validate, verify, BoxedFormValidator, FormValidator, FormValidatorExt};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::field::{ensure, refine, Accept, FieldValidator};
    pub use crate::lift::lift_validator;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::patch::{Patch, Patches};
    #[cfg(feature = "tracing")]
    pub use crate::pipeline::FormValidatorTracingExt;
    pub use crate::pipeline::{
        keep, run, validate, verify, BoxedFormValidator, FormValidator, FormValidatorExt,
    };
    pub use crate::refined::{Predicate, Refined};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
