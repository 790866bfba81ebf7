//! Predefined predicates for common refinements
//!
//! - **Numeric**: [`Positive`](numeric::Positive), [`NonNegative`](numeric::NonNegative),
//!   [`InRange`](numeric::InRange)
//! - **String**: [`NonEmpty`](string::NonEmpty), [`Trimmed`](string::Trimmed),
//!   [`MaxLength`](string::MaxLength), [`MinLength`](string::MinLength)

pub mod numeric;
pub mod string;
